//! crates/diary_docx_core/src/resolver.rs
//!
//! Turns heterogeneous body input into the single string the formatter works on.
//!
//! Bodies arrive either as structured JSON (string, list or mapping) or as the raw
//! text of a language-model reply, which usually wraps its JSON in a fenced code
//! block tagged `json`.

use crate::error::ValidationError;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;
use std::io;

const FENCE: &str = "```";
const LANGUAGE_TAG: &str = "json";
const LIST_SEPARATOR: &str = "\n\n";

/// Parses the raw content of a model reply into a JSON value.
///
/// Only strings are accepted. Surrounding code fences and a leading `json`
/// language tag are removed before parsing.
pub fn parse_raw_content(raw: &Value) -> Result<Value, ValidationError> {
    match raw {
        Value::String(text) => parse_fenced_json(text),
        _ => Err(ValidationError::RawContentNotString),
    }
}

/// Strips an optional fenced code block and parses what is left as JSON.
pub fn parse_fenced_json(text: &str) -> Result<Value, ValidationError> {
    let cleaned = strip_fence(text);
    serde_json::from_str(cleaned).map_err(|e| ValidationError::MalformedJson(e.to_string()))
}

fn strip_fence(text: &str) -> &str {
    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix(FENCE) {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.trim_end().strip_suffix(FENCE) {
        cleaned = rest;
    }
    cleaned = cleaned.trim_start();

    // No JSON document can start with the bare word `json`, so dropping it is safe.
    match cleaned.get(..LANGUAGE_TAG.len()) {
        Some(tag) if tag.eq_ignore_ascii_case(LANGUAGE_TAG) => {
            cleaned[LANGUAGE_TAG.len()..].trim_start()
        }
        _ => cleaned,
    }
}

/// Flattens a resolved body into one string.
///
/// Strings pass through untouched, list elements are joined with a blank line
/// and mappings are pretty-printed with a two-space indent. Non-ASCII text is
/// kept literal everywhere.
pub fn normalize_body(body: Option<&Value>) -> String {
    match body {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => to_inline_json(other),
            })
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        Some(map @ Value::Object(_)) => {
            serde_json::to_string_pretty(map).unwrap_or_else(|_| map.to_string())
        }
        Some(other) => other.to_string(),
    }
}

/// Single-line JSON with a space after every `,` and `:`.
fn to_inline_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    proptest! {
        /// Property: wrapping valid JSON in a ```json fence does not change the parsed value
        #[test]
        fn fenced_json_matches_direct_parse(
            entries in prop::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..6),
            upper_tag in any::<bool>(),
        ) {
            let entries: BTreeMap<String, i64> = entries;
            let text = serde_json::to_string(&entries).unwrap();
            let tag = if upper_tag { "JSON" } else { "json" };
            let fenced = format!("```{tag}\n{text}\n```");

            let direct: Value = serde_json::from_str(&text).unwrap();
            prop_assert_eq!(parse_raw_content(&Value::String(fenced)).unwrap(), direct);
        }

        /// Property: string bodies pass through normalization untouched
        #[test]
        fn string_bodies_are_unchanged(text in ".*") {
            let body = Value::String(text.clone());
            prop_assert_eq!(normalize_body(Some(&body)), text);
        }
    }
}
