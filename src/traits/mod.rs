//! Core trait abstractions for injected collaborators.

pub mod ai;
pub mod mapper;

pub use ai::{Categorizer, PatternGenerator};
pub use mapper::UrlMapper;
