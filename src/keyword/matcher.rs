//! Keyword and synonym occurrence search in a passage.
//!
//! Matching is a case-insensitive substring search. Every occurrence is
//! reported, including overlapping ones, with its character offset in the
//! passage and a window of surrounding text.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::keyword::thesaurus::Thesaurus;

/// Characters of context kept on each side of a hit.
pub const DEFAULT_CONTEXT_CHARS: usize = 50;

/// Whether a hit is the keyword itself or one of its synonyms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Direct,
    Synonym,
}

/// One occurrence of a keyword or synonym.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "type")]
    pub match_type: MatchType,
    /// The keyword (direct hits) or synonym (synonym hits) that was found.
    pub matched_word: String,
    /// The keyword a synonym hit belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_keyword: Option<String>,
    /// Character offset of the hit in the passage.
    pub position: usize,
    pub context: String,
}

/// All hits for one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatches {
    pub keyword: String,
    pub matches: Vec<MatchRecord>,
}

impl KeywordMatches {
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Hits per keyword, in keyword order.
///
/// Serializes as a JSON object mapping each keyword to its hits, keeping
/// keyword order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    entries: Vec<KeywordMatches>,
}

impl Serialize for MatchSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.keyword, &entry.matches)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MatchSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        // serde_json::Map keeps insertion order (preserve_order)
        let helper = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let entries = helper
            .into_iter()
            .map(|(keyword, value)| {
                let matches: Vec<MatchRecord> =
                    serde_json::from_value(value).map_err(D::Error::custom)?;
                Ok(KeywordMatches { keyword, matches })
            })
            .collect::<std::result::Result<Vec<_>, D::Error>>()?;

        Ok(MatchSet { entries })
    }
}

impl MatchSet {
    /// Hits for a keyword, if the keyword was searched.
    pub fn get(&self, keyword: &str) -> Option<&[MatchRecord]> {
        self.entries
            .iter()
            .find(|entry| entry.keyword == keyword)
            .map(|entry| entry.matches.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordMatches> {
        self.entries.iter()
    }

    /// Number of distinct keywords searched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords with at least one hit.
    pub fn keywords_with_matches(&self) -> usize {
        self.entries.iter().filter(|e| e.has_matches()).count()
    }

    /// Hits across all keywords.
    pub fn total_matches(&self) -> usize {
        self.entries.iter().map(|e| e.matches.len()).sum()
    }
}

/// Finds keywords and their synonyms in passages.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    thesaurus: Arc<Thesaurus>,
    context_chars: usize,
}

impl Default for TextMatcher {
    fn default() -> Self {
        Self::new(Thesaurus::builtin())
    }
}

impl TextMatcher {
    pub fn new(thesaurus: Arc<Thesaurus>) -> Self {
        TextMatcher {
            thesaurus,
            context_chars: DEFAULT_CONTEXT_CHARS,
        }
    }

    /// Set the context radius in characters.
    pub fn context_chars(mut self, context_chars: usize) -> Self {
        self.context_chars = context_chars;
        self
    }

    /// Find every keyword and synonym occurrence in `text`.
    ///
    /// Per keyword, direct hits come first, then synonym hits in synonym
    /// order. A keyword repeated in `keywords` is searched once.
    pub fn find_matches<S: AsRef<str>>(&self, keywords: &[S], text: &str) -> MatchSet {
        let passage = Passage::new(text);
        let mut set = MatchSet::default();

        for keyword in keywords {
            let keyword = keyword.as_ref();
            if set.get(keyword).is_some() {
                continue;
            }

            let mut matches: Vec<MatchRecord> = passage
                .find_all(keyword)
                .into_iter()
                .map(|position| MatchRecord {
                    match_type: MatchType::Direct,
                    matched_word: keyword.to_string(),
                    original_keyword: None,
                    position,
                    context: passage.context(position, keyword, self.context_chars),
                })
                .collect();

            for synonym in self.thesaurus.query(keyword) {
                for position in passage.find_all(&synonym) {
                    log::trace!("synonym '{}' of '{}' at {}", synonym, keyword, position);
                    matches.push(MatchRecord {
                        match_type: MatchType::Synonym,
                        matched_word: synonym.clone(),
                        original_keyword: Some(keyword.to_string()),
                        position,
                        context: passage.context(position, &synonym, self.context_chars),
                    });
                }
            }

            set.entries.push(KeywordMatches {
                keyword: keyword.to_string(),
                matches,
            });
        }

        log::debug!(
            "{} of {} keywords matched ({} hits)",
            set.keywords_with_matches(),
            set.len(),
            set.total_matches()
        );

        set
    }
}

/// A passage split into characters, with a lowercase copy of the same length.
struct Passage {
    chars: Vec<char>,
    lowered: Vec<char>,
}

impl Passage {
    fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let lowered = chars.iter().map(|&c| lower_char(c)).collect();
        Passage { chars, lowered }
    }

    /// Start offsets of every occurrence of `needle`, overlapping included.
    fn find_all(&self, needle: &str) -> Vec<usize> {
        let needle: Vec<char> = needle.chars().map(lower_char).collect();
        if needle.is_empty() || needle.len() > self.lowered.len() {
            return Vec::new();
        }

        self.lowered
            .windows(needle.len())
            .enumerate()
            .filter(|(_, window)| *window == needle.as_slice())
            .map(|(position, _)| position)
            .collect()
    }

    fn context(&self, position: usize, word: &str, radius: usize) -> String {
        let start = position.saturating_sub(radius);
        let end = (position + word.chars().count() + radius).min(self.chars.len());
        self.chars[start..end].iter().collect()
    }
}

/// Lowercase a character without changing the character count.
fn lower_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
