//! Word → synonym lookup table.
//!
//! Entries are stored forward only (`headword → synonyms`). A query returns
//! the forward synonyms of a word followed by every headword that lists the
//! word among its own synonyms. Lookups are not transitive.
//!
//! # Examples
//!
//! ```
//! use examlens::keyword::thesaurus::Thesaurus;
//!
//! let thesaurus = Thesaurus::from_entries(vec![
//!     ("majority", vec!["most", "bulk"]),
//!     ("bulk", vec!["mass"]),
//! ]);
//!
//! assert_eq!(thesaurus.query("Majority"), vec!["most", "bulk"]);
//! assert_eq!(thesaurus.query("most"), vec!["majority"]);
//! assert!(!thesaurus.query("most").contains(&"mass".to_string()));
//! ```

mod builtin;

use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use ahash::AHashMap;

use crate::error::{ExamLensError, Result};

static BUILTIN: LazyLock<Arc<Thesaurus>> = LazyLock::new(|| {
    Arc::new(Thesaurus::from_entries(
        builtin::BUILTIN_ENTRIES
            .iter()
            .map(|(word, synonyms)| (*word, synonyms.to_vec())),
    ))
});

/// Immutable synonym table with a derived reverse index.
#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    entries: Vec<(String, Vec<String>)>,
    /// headword -> entry index
    forward: AHashMap<String, usize>,
    /// synonym -> indices of entries listing it, in table order
    reverse: AHashMap<String, Vec<usize>>,
}

impl Thesaurus {
    /// The built-in academic vocabulary table, shared process-wide.
    pub fn builtin() -> Arc<Thesaurus> {
        Arc::clone(&BUILTIN)
    }

    /// Build a table from `(headword, synonyms)` pairs.
    ///
    /// Words are trimmed and lowercased; blank words are skipped. A repeated
    /// headword extends the synonyms of its first occurrence.
    pub fn from_entries<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut thesaurus = Thesaurus::default();

        for (headword, synonyms) in entries {
            let headword = normalize_word(headword.as_ref());
            if headword.is_empty() {
                continue;
            }

            let idx = *thesaurus.forward.entry(headword.clone()).or_insert_with(|| {
                thesaurus.entries.push((headword, Vec::new()));
                thesaurus.entries.len() - 1
            });

            for synonym in synonyms {
                let synonym = normalize_word(synonym.as_ref());
                let list = &mut thesaurus.entries[idx].1;
                if synonym.is_empty() || list.contains(&synonym) {
                    continue;
                }
                list.push(synonym.clone());

                let owners = thesaurus.reverse.entry(synonym).or_default();
                if owners.last() != Some(&idx) {
                    owners.push(idx);
                }
            }
        }

        thesaurus
    }

    /// Load a table from a JSON object `{"word": ["synonym", ...], ...}`.
    ///
    /// Entries keep their file order.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| {
                ExamLensError::config(format!(
                    "failed to parse thesaurus '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        let mut entries = Vec::with_capacity(object.len());
        for (headword, value) in object {
            let synonyms: Vec<String> = serde_json::from_value(value).map_err(|e| {
                ExamLensError::config(format!(
                    "synonyms of '{}' in '{}' must be a list of strings: {}",
                    headword,
                    path.display(),
                    e
                ))
            })?;
            entries.push((headword, synonyms));
        }

        let thesaurus = Self::from_entries(entries);
        log::debug!(
            "loaded {} thesaurus entries from {}",
            thesaurus.len(),
            path.display()
        );
        Ok(thesaurus)
    }

    /// Synonyms of `word`: forward entries first, then reverse membership.
    ///
    /// Case-insensitive, de-duplicated, and never contains `word` itself.
    /// Unknown words yield an empty list.
    pub fn query(&self, word: &str) -> Vec<String> {
        let word = normalize_word(word);
        let mut synonyms: Vec<String> = Vec::new();

        let forward = self
            .forward
            .get(&word)
            .map(|&idx| self.entries[idx].1.as_slice())
            .unwrap_or_default();
        let reverse = self
            .reverse
            .get(&word)
            .into_iter()
            .flatten()
            .map(|&idx| &self.entries[idx].0);

        for candidate in forward.iter().chain(reverse) {
            if *candidate != word && !synonyms.contains(candidate) {
                synonyms.push(candidate.clone());
            }
        }

        synonyms
    }

    /// The stored forward entry of a headword, if any.
    pub fn entry(&self, headword: &str) -> Option<&[String]> {
        self.forward
            .get(&normalize_word(headword))
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Headwords in table order.
    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(headword, _)| headword.as_str())
    }

    /// Number of headwords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}
