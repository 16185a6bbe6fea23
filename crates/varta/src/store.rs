//! Translated pattern storage.
//!
//! A translation store maps `locale → content hash → translated pattern`.
//! It is produced by an external translation workflow and only read by the
//! core: the resolver looks up `(locale, leaf hash)` and falls back to the
//! leaf's source text when no entry exists.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that occur while ingesting a translation document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error when reading a translation file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid translation JSON.
    #[error("failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only translated patterns keyed by locale and content hash.
///
/// # Example
///
/// ```
/// use varta::TranslationStore;
///
/// let mut store = TranslationStore::new();
/// store.insert("es_ES", "abc123", "{count} mensajes nuevos");
///
/// assert_eq!(store.get("es_ES", "abc123"), Some("{count} mensajes nuevos"));
/// assert_eq!(store.get("fr_FR", "abc123"), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationStore {
    translations: BTreeMap<String, BTreeMap<String, String>>,
}

impl TranslationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The translated pattern for a hash in a locale, if any.
    pub fn get(&self, locale: &str, hash: &str) -> Option<&str> {
        self.translations.get(locale)?.get(hash).map(String::as_str)
    }

    /// Insert one translated pattern.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        hash: impl Into<String>,
        pattern: impl Into<String>,
    ) {
        self.translations
            .entry(locale.into())
            .or_default()
            .insert(hash.into(), pattern.into());
    }

    /// Replace the entire contents of the store.
    pub fn register(&mut self, other: TranslationStore) {
        self.translations = other.translations;
    }

    /// Overlay another store's entries onto this one, per locale.
    pub fn merge(&mut self, other: TranslationStore) {
        for (locale, entries) in other.translations {
            self.translations.entry(locale).or_default().extend(entries);
        }
    }

    /// Locales with at least one translated pattern.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    /// Number of translated patterns across all locales.
    pub fn len(&self) -> usize {
        self.translations.values().map(BTreeMap::len).sum()
    }

    /// Whether the store holds no patterns at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a store from a translation JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load a translation JSON document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let store = Self::from_json_str(&content).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), patterns = store.len(), "loaded translations");
        Ok(store)
    }
}
