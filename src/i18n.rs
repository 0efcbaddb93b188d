// ellipsis_chips — A terminal chip row with "+N more" overflow collapsing
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Localized display strings for the chip row.
//!
//! Catalog files are JSON objects keyed by locale, each mapping a message
//! key to either a plain template or plural forms:
//!
//! ```json
//! {
//!   "en": { "ellipsis-chips-text": "+{count} more" },
//!   "de": { "ellipsis-chips-text": { "one": "+{count} weiterer", "other": "+{count} weitere" } }
//! }
//! ```
//!
//! Lookups walk `locale` -> language prefix -> `en`. A key that no locale
//! provides resolves to the key itself.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Message key for the indicator text. Receives `count`.
pub const ELLIPSIS_TEXT_KEY: &str = "ellipsis-chips-text";

pub const DEFAULT_LOCALE: &str = "en";

const COUNT_TOKEN: &str = "{count}";

/// Synchronous message lookup with a numeric `count` parameter.
pub trait LabelLookup {
    fn instant(&self, key: &str, count: usize) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Simple(String),
    Plural {
        #[serde(default)]
        zero: Option<String>,
        #[serde(default)]
        one: Option<String>,
        other: String,
    },
}

impl Entry {
    fn template(&self, count: usize) -> &str {
        match self {
            Self::Simple(text) => text,
            Self::Plural { zero, one, other } => match count {
                0 => zero.as_deref().unwrap_or(other),
                1 => one.as_deref().unwrap_or(other),
                _ => other,
            },
        }
    }
}

type LocaleStrings = HashMap<String, Entry>;

#[derive(Debug, Clone)]
pub struct Catalog {
    locale: String,
    locales: HashMap<String, LocaleStrings>,
}

impl Catalog {
    /// English strings shipped with the binary.
    pub fn builtin() -> Self {
        let mut en = LocaleStrings::new();
        en.insert(ELLIPSIS_TEXT_KEY.to_owned(), Entry::Simple("+{count} more".to_owned()));
        let mut locales = HashMap::new();
        locales.insert(DEFAULT_LOCALE.to_owned(), en);
        Self { locale: DEFAULT_LOCALE.to_owned(), locales }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Layer the locales from `json` over the current ones. Keys present in
    /// both are replaced.
    pub fn merge_json(&mut self, json: &str) -> Result<(), CatalogError> {
        let parsed: HashMap<String, LocaleStrings> = serde_json::from_str(json)?;
        for (locale, strings) in parsed {
            self.locales.entry(locale).or_default().extend(strings);
        }
        Ok(())
    }

    pub fn load_file(&mut self, path: &Path) -> Result<(), CatalogError> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        self.merge_json(&json)?;
        tracing::debug!(path = %path.display(), locales = self.locales.len(), "catalog loaded");
        Ok(())
    }

    pub fn lookup(&self, key: &str) -> Option<&Entry> {
        self.fallback_chain().find_map(|locale| self.locales.get(locale)?.get(key))
    }

    fn fallback_chain(&self) -> impl Iterator<Item = &str> {
        let language = self.locale.split(['-', '_']).next().filter(|lang| *lang != self.locale);
        std::iter::once(self.locale.as_str()).chain(language).chain(std::iter::once(DEFAULT_LOCALE))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LabelLookup for Catalog {
    fn instant(&self, key: &str, count: usize) -> String {
        match self.lookup(key) {
            Some(entry) => entry.template(count).replace(COUNT_TOKEN, &count.to_string()),
            None => {
                tracing::warn!(key, locale = %self.locale, "missing translation");
                key.to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;

    const GERMAN: &str = r#"{
        "de": {
            "ellipsis-chips-text": { "one": "+{count} weiterer", "other": "+{count} weitere" }
        }
    }"#;

    #[test]
    fn builtin_formats_count() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.instant(ELLIPSIS_TEXT_KEY, 3), "+3 more");
        assert_eq!(catalog.instant(ELLIPSIS_TEXT_KEY, 0), "+0 more");
    }

    #[test]
    fn missing_key_returns_key() {
        assert_eq!(Catalog::builtin().instant("nope", 1), "nope");
    }

    #[test]
    fn plural_forms_pick_by_count() {
        let mut catalog = Catalog::builtin().with_locale("de");
        catalog.merge_json(GERMAN).unwrap();
        assert_eq!(catalog.instant(ELLIPSIS_TEXT_KEY, 1), "+1 weiterer");
        assert_eq!(catalog.instant(ELLIPSIS_TEXT_KEY, 4), "+4 weitere");
        // No zero form: falls back to other.
        assert_eq!(catalog.instant(ELLIPSIS_TEXT_KEY, 0), "+0 weitere");
    }

    #[test]
    fn region_falls_back_to_language_then_english() {
        let mut catalog = Catalog::builtin().with_locale("de-AT");
        catalog.merge_json(GERMAN).unwrap();
        assert_eq!(catalog.instant(ELLIPSIS_TEXT_KEY, 2), "+2 weitere");

        let french = Catalog::builtin().with_locale("fr_CA");
        assert_eq!(french.instant(ELLIPSIS_TEXT_KEY, 2), "+2 more");
    }

    #[test]
    fn merge_overrides_existing_keys() {
        let mut catalog = Catalog::builtin();
        catalog.merge_json(r#"{"en": {"ellipsis-chips-text": "and {count} others"}}"#).unwrap();
        assert_eq!(catalog.instant(ELLIPSIS_TEXT_KEY, 5), "and 5 others");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let mut catalog = Catalog::builtin();
        let err = catalog.merge_json("{\"en\": 3}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert_eq!(catalog.instant(ELLIPSIS_TEXT_KEY, 1), "+1 more");
    }

    #[test]
    fn load_file_reads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GERMAN.as_bytes()).unwrap();
        let mut catalog = Catalog::builtin().with_locale("de");
        catalog.load_file(file.path()).unwrap();
        assert_eq!(catalog.instant(ELLIPSIS_TEXT_KEY, 1), "+1 weiterer");
    }

    #[test]
    fn load_file_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = Catalog::builtin().load_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
