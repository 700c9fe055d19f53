//! Project name normalization for scaffolded manifests
//!
//! Turns an arbitrary directory name into something npm accepts as a
//! package name.

use lazy_static::lazy_static;
use regex::Regex;

/// npm rejects package names longer than this
pub const MAX_NAME_LEN: usize = 214;

lazy_static! {
    static ref DISALLOWED: Regex = Regex::new(r"[^a-z0-9~ -]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref EDGES: Regex = Regex::new(r"^[^a-z0-9]+|[^a-z0-9]+$").unwrap();
}

/// Normalize a directory name into a valid package name.
///
/// # Examples
/// ```
/// use depwiz::project::name::normalize_project_name;
///
/// assert_eq!(normalize_project_name("My App!!"), "my-app");
/// assert_eq!(normalize_project_name("123-Go"), "123-go");
/// assert_eq!(normalize_project_name("---"), "a");
/// ```
pub fn normalize_project_name(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lower, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    let trimmed = EDGES.replace_all(&hyphenated, "");

    let mut name = trimmed.into_owned();
    if !name.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        name.insert(0, 'a');
    }

    // Only ASCII survives the filter, so byte truncation is char-safe
    name.truncate(MAX_NAME_LEN);
    name
}
