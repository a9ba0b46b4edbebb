//! Utility functions for rule implementations.

/// Splits a comma-separated option value into trimmed entries.
///
/// Never rejects input: an empty value yields a single empty entry, and
/// empty entries between commas are kept.
#[must_use]
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}
