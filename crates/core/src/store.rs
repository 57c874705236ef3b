//! Vocabulary store - the read-only word table every game draws from
//!
//! The store is built once at startup (builtin table or a JSON dataset) and
//! then only queried. Sessions receive it by reference in `start()`, so tests
//! can hand in a tiny purpose-built dataset instead of the real one.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::dataset::builtin_entries;
use crate::error::DatasetError;
use crate::rng::SimpleRng;
use crate::types::{Category, CategorySummary, VocabularyEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
}

/// On-disk dataset shape: `{"entries": [...]}`.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    entries: Vec<VocabularyEntry>,
}

impl VocabularyStore {
    /// Store over the builtin Oshikwanyama table.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    /// Build a store from arbitrary entries, validating ids and texts.
    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.source_text.trim().is_empty() || entry.target_text.trim().is_empty() {
                return Err(DatasetError::EmptyText(entry.id.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(DatasetError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Self::from_entries(file.entries)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), entries = store.len(), "loaded vocabulary dataset");
        Ok(store)
    }

    /// Every entry, in load order.
    pub fn all_entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&VocabularyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries of one category.
    ///
    /// Unknown ids (including `"all"`) fall back to the full table rather
    /// than failing.
    pub fn entries_by_category(&self, category_id: &str) -> Vec<&VocabularyEntry> {
        match Category::from_str(category_id) {
            Some(cat) => self.entries.iter().filter(|e| e.category == cat).collect(),
            None => self.entries.iter().collect(),
        }
    }

    /// Draw up to `n` distinct entries without replacement.
    ///
    /// The result has `min(n, pool)` entries; asking for more than the pool
    /// holds silently truncates.
    pub fn sample(
        &self,
        n: usize,
        category_id: Option<&str>,
        rng: &mut SimpleRng,
    ) -> Vec<VocabularyEntry> {
        let mut pool = match category_id {
            Some(id) => self.entries_by_category(id),
            None => self.entries.iter().collect(),
        };
        rng.shuffle(&mut pool);
        pool.into_iter().take(n).cloned().collect()
    }

    /// Per-category counts in canonical order.
    pub fn categories(&self) -> Vec<CategorySummary> {
        Category::ALL
            .iter()
            .map(|cat| CategorySummary {
                id: cat.as_str(),
                display_name: cat.display_name(),
                icon: cat.icon(),
                count: self.entries.iter().filter(|e| e.category == *cat).count(),
            })
            .collect()
    }
}

impl Default for VocabularyStore {
    fn default() -> Self {
        Self::builtin()
    }
}
