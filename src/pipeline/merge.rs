//! Merge per-batch classifier output into one analysis.
//!
//! Batched categorization produces one category map per batch, usually with
//! overlapping names. Merging unions them by name, dedups examples, and
//! caps examples per category so downstream prompts stay small.

use crate::types::category::UrlTypeAnalysis;

/// Merge `batch` into `merged`, keeping at most `max_examples` examples per
/// category.
///
/// The first batch to introduce a category fixes its description; later
/// batches only contribute new examples.
pub fn merge_analysis(merged: &mut UrlTypeAnalysis, batch: UrlTypeAnalysis, max_examples: usize) {
    for (name, category) in batch.url_categories {
        match merged.url_categories.get_mut(&name) {
            Some(existing) => {
                for example in category.examples {
                    if existing.examples.len() >= max_examples {
                        break;
                    }
                    if !existing.examples.contains(&example) {
                        existing.examples.push(example);
                    }
                }
            }
            None => {
                let mut category = category;
                category.examples.truncate(max_examples);
                merged.url_categories.insert(name, category);
            }
        }
    }
}
