// ABOUTME: Parsing of KEY=VALUE label selector arguments.
// ABOUTME: An empty value is kept as-is and matches only an empty label.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Parse one `KEY=VALUE` pair. The key must be non-empty; the value may be empty.
pub fn parse_label(input: &str) -> Result<(String, String)> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::InvalidLabel(input.to_string())),
    }
}

/// Parse a list of `KEY=VALUE` pairs. Later pairs override earlier ones.
pub fn parse_label_selector<S: AsRef<str>>(items: &[S]) -> Result<HashMap<String, String>> {
    items.iter().map(|item| parse_label(item.as_ref())).collect()
}
