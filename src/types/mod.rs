//! Data types shared across the analysis lifecycle.

pub mod category;
pub mod filter;
pub mod mapping;
pub mod schema;
pub mod test_run;
