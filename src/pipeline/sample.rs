//! Sampling and batching for oversized URL sets.
//!
//! Classifier context windows cap how many URLs one call can see. Large
//! discovered sets are first thinned to a representative sample, then cut
//! into fixed-size batches.

/// Take an evenly-strided sample of at most `max` URLs.
///
/// Picks every `len / max`-th URL so the sample spans the whole list rather
/// than just its head. Returns the input unchanged when it already fits.
pub fn sample_evenly(urls: &[String], max: usize) -> Vec<String> {
    if max == 0 {
        return Vec::new();
    }
    if urls.len() <= max {
        return urls.to_vec();
    }

    let step = urls.len() / max;
    urls.iter()
        .step_by(step.max(1))
        .take(max)
        .cloned()
        .collect()
}

/// Cut URLs into batches of at most `batch_size`.
pub fn batches(urls: &[String], batch_size: usize) -> Vec<&[String]> {
    if urls.is_empty() || batch_size == 0 {
        return Vec::new();
    }
    urls.chunks(batch_size).collect()
}
