//! Flat dictionary entries: one translation key with its per-language values.

use std::collections::BTreeMap;

use super::{key::KeySpec, row::RowAccessor};

/// Language code to translated string, for languages that have a value.
pub type LanguageValues = BTreeMap<String, String>;

/// One eligible row, reduced to its key and translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    pub key: String,
    pub values: LanguageValues,
}

impl FlatEntry {
    /// Translation for `language`, if the row had one.
    pub fn value(&self, language: &str) -> Option<&str> {
        self.values.get(language).map(String::as_str)
    }
}

/// Collect the non-empty cells for each language column.
///
/// Languages with an empty or missing cell are left out entirely so that
/// "no translation" stays distinguishable from an empty string.
pub fn extract_languages<R, S>(row: &R, languages: &[S]) -> LanguageValues
where
    R: RowAccessor + ?Sized,
    S: AsRef<str>,
{
    languages
        .iter()
        .filter_map(|language| {
            let language = language.as_ref();
            row.non_empty(language)
                .map(|value| (language.to_string(), value.to_string()))
        })
        .collect()
}

/// Turn a raw row into a flat entry, or `None` if the row is excluded.
pub fn format_row<R, S>(row: &R, spec: &KeySpec, languages: &[S]) -> Option<FlatEntry>
where
    R: RowAccessor + ?Sized,
    S: AsRef<str>,
{
    let key = spec.build_key(row)?;
    let values = extract_languages(row, languages);
    Some(FlatEntry { key, values })
}

/// Project entries onto one language as `(key, value)` pairs, dropping the
/// entries with no value for it.
pub fn language_pairs<'a>(
    entries: impl IntoIterator<Item = &'a FlatEntry>,
    language: &'a str,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    entries
        .into_iter()
        .filter_map(move |entry| entry.value(language).map(|value| (entry.key.as_str(), value)))
}
