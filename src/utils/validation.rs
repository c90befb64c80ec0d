//! Centralized validation and helper functions.

/// Maximum number of samples allowed in a single sample sheet
pub const MAX_SAMPLES: usize = 1_000_000;

/// Whether adding another sample to `count` existing ones would exceed [`MAX_SAMPLES`].
///
/// Call this with the current count BEFORE adding a new sample.
///
/// # Example
/// ```ignore
/// if exceeds_sample_limit(records.len()) {
///     return Err(...);
/// }
/// records.push(new_record); // Safe to add
/// ```
#[must_use]
pub fn exceeds_sample_limit(count: usize) -> bool {
    count >= MAX_SAMPLES
}

/// Whether a path names a gzip/bgzip compressed file
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &std::path::Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}
