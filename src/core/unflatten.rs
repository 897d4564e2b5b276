//! Expanding flat `key -> value` pairs into a nested dictionary.
//!
//! Keys are split on the delimiter, except where the delimiter is followed by
//! a space or ends the key. That keeps sentence-like keys such as
//! `"Invalid data. Workshop does not exist."` in one segment.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// The nested, per-language output tree.
pub type NestedDictionary = Map<String, Value>;

/// Split a key into path segments.
///
/// ```
/// use i18n_sheets::core::split_key;
///
/// assert_eq!(split_key("common.greeting", "."), vec!["common", "greeting"]);
/// assert_eq!(split_key("Error. Something failed.", "."), vec!["Error. Something failed."]);
/// ```
pub fn split_key<'a>(key: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![key];
    }

    let mut segments = Vec::new();
    let mut start = 0;

    for (index, _) in key.match_indices(delimiter) {
        let after = index + delimiter.len();
        let rest = &key[after..];
        if rest.is_empty() || rest.starts_with(' ') {
            continue;
        }
        segments.push(&key[start..index]);
        start = after;
    }
    segments.push(&key[start..]);

    segments
}

/// Fold flat pairs into a nested dictionary.
///
/// Pairs are applied in ascending key order. A later pair with the same key
/// replaces the earlier value, and a deeper key replaces a scalar sitting on
/// its path, so `{"a": "X", "a.b": "Y"}` always becomes `{"a": {"b": "Y"}}`.
pub fn unflatten<'a, I>(pairs: I, delimiter: &str) -> NestedDictionary
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let sorted: BTreeMap<&str, &str> = pairs.into_iter().collect();

    let mut root = Map::new();
    for (key, value) in sorted {
        let path = split_key(key, delimiter);
        assoc_path(&mut root, &path, Value::String(value.to_string()));
    }
    root
}

/// Write `value` at `path`, creating or replacing intermediate objects.
fn assoc_path(root: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut current = root;
    for segment in parents {
        let next = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        // Scalars on the path give way to the deeper key
        if !next.is_object() {
            *next = Value::Object(Map::new());
        }

        current = match next {
            Value::Object(map) => map,
            _ => return,
        };
    }

    current.insert(last.to_string(), value);
}
