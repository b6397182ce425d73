//! Dotted key-path utilities.
//!
//! A key path is a `.`-separated sequence of key segments addressing a
//! position in a nested structure, e.g. `plotOptions.series.animation`.
//! This crate provides the splitting, joining, and lookup primitives the
//! option-graph crate is built on.
//!
//! # Example
//!
//! ```
//! use chartopt_keypath::{join, lookup, segments, split_first};
//!
//! // Splitting happens at the FIRST separator only; the remainder stays
//! // a compound sub-path for recursive resolution.
//! assert_eq!(split_first("chart.events.load"), ("chart", Some("events.load")));
//! assert_eq!(split_first("title"), ("title", None));
//!
//! assert_eq!(segments("a.b.c"), vec!["a", "b", "c"]);
//! assert_eq!(join(&["a", "b", "c"]), "a.b.c");
//!
//! // Tolerant lookup over external JSON records.
//! let record = serde_json::json!({"region": {"name": "Norfolk"}});
//! let found = lookup(&record, "region.name");
//! assert_eq!(found, Some(&serde_json::json!("Norfolk")));
//! ```

use serde_json::Value;

pub mod validate;
pub use validate::{validate_key_path, KeyPathError};

/// The key-path segment separator.
pub const SEPARATOR: char = '.';

/// Split a key path at the first separator occurrence.
///
/// Returns the head segment and, when a separator is present, the entire
/// remainder as one compound sub-path. Only the head is a key; the
/// remainder may itself contain further separators.
///
/// # Example
///
/// ```
/// use chartopt_keypath::split_first;
///
/// assert_eq!(split_first("a.b.c"), ("a", Some("b.c")));
/// assert_eq!(split_first("a"), ("a", None));
/// assert_eq!(split_first(""), ("", None));
/// ```
pub fn split_first(path: &str) -> (&str, Option<&str>) {
    match path.split_once(SEPARATOR) {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

/// Split a key path into all of its segments.
///
/// # Example
///
/// ```
/// use chartopt_keypath::segments;
///
/// assert_eq!(segments("xAxis.labels.step"), vec!["xAxis", "labels", "step"]);
/// assert_eq!(segments("single"), vec!["single"]);
/// ```
pub fn segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).collect()
}

/// Join segments into a key path.
///
/// # Example
///
/// ```
/// use chartopt_keypath::join;
///
/// assert_eq!(join(&["chart", "type"]), "chart.type");
/// assert_eq!(join::<&str>(&[]), "");
/// ```
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(segment.as_ref());
    }
    out
}

/// Check whether `key` can appear unquoted in a JS object literal.
///
/// True for non-empty ASCII identifiers: a leading letter, `_`, or `$`,
/// followed by letters, digits, `_`, or `$`. Reserved words are fine as
/// unquoted property names, so no keyword list is consulted.
///
/// # Example
///
/// ```
/// use chartopt_keypath::is_identifier;
///
/// assert!(is_identifier("pointStart"));
/// assert!(is_identifier("_private"));
/// assert!(is_identifier("$ref"));
/// assert!(!is_identifier("data-label"));
/// assert!(!is_identifier("0series"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Look up a value in a JSON record by dotted key path.
///
/// Objects are traversed by key, arrays by non-negative integer index.
/// Any miss — absent key, bad index, or a scalar in an intermediate
/// position — returns `None` rather than an error, so callers can probe
/// speculative paths against optional data without presence checks.
///
/// # Example
///
/// ```
/// use chartopt_keypath::lookup;
/// use serde_json::json;
///
/// let record = json!({"samples": [{"value": 7}, {"value": 9}]});
/// assert_eq!(lookup(&record, "samples.1.value"), Some(&json!(9)));
/// assert_eq!(lookup(&record, "samples.9.value"), None);
/// assert_eq!(lookup(&record, "samples.value"), None);
/// ```
pub fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(record);
    }
    let mut current = record;
    for segment in path.split(SEPARATOR) {
        match current {
            Value::Object(map) => {
                current = map.get(segment)?;
            }
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                current = items.get(index)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
