//! Keyword extraction from exam questions.
//!
//! A question is cleaned, cut into word runs and tagged. Content words that
//! are not function words become keywords, each enriched with its synonyms;
//! every other token is reported as a filtered word.
//!
//! # Examples
//!
//! ```
//! use examlens::keyword::extractor::KeywordExtractor;
//!
//! let extractor = KeywordExtractor::default();
//! let extraction = extractor
//!     .extract("The majority of energy was generated by electricity.")
//!     .unwrap();
//!
//! assert_eq!(
//!     extraction.keyword_words(),
//!     vec!["majority", "energy", "generated", "electricity"]
//! );
//! assert!(extraction.filtered_words.contains(&"The".to_string()));
//! ```

use std::fmt::Write;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::Normalizer;
use crate::analysis::pos::{LexiconTagger, PosTag, PosTagger, tag_tokens};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{ContentWordFilter, Filter, StopFilter};
use crate::error::Result;
use crate::keyword::thesaurus::Thesaurus;

/// Synonyms shown per keyword in a summary.
const SUMMARY_SYNONYMS: usize = 3;

/// A retained content word and its synonyms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub synonyms: Vec<String>,
}

/// A token with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: PosTag,
}

/// Result of extracting keywords from a question.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeywordExtraction {
    /// Keywords in question order.
    pub keywords: Vec<Keyword>,
    /// Non-retained tokens in question order.
    pub filtered_words: Vec<String>,
    /// Every token with its tag.
    pub pos_tags: Vec<TaggedWord>,
}

impl KeywordExtraction {
    /// The keyword surface forms, in order.
    pub fn keyword_words(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.word.as_str()).collect()
    }

    /// Synonyms attached to a keyword, if it was extracted.
    pub fn synonyms_of(&self, word: &str) -> Option<&[String]> {
        self.keywords
            .iter()
            .find(|k| k.word == word)
            .map(|k| k.synonyms.as_slice())
    }
}

/// Extracts content-word keywords from question text.
#[derive(Clone)]
pub struct KeywordExtractor {
    normalizer: Normalizer,
    tagger: Arc<dyn PosTagger>,
    filters: Vec<Arc<dyn Filter>>,
    thesaurus: Arc<Thesaurus>,
}

impl std::fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordExtractor")
            .field("normalizer", &self.normalizer)
            .field("tagger", &self.tagger.name())
            .field(
                "filters",
                &self.filters.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .field("thesaurus_entries", &self.thesaurus.len())
            .finish()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Thesaurus::builtin())
    }
}

impl KeywordExtractor {
    /// Create an extractor with the lexicon tagger and the default filters.
    pub fn new(thesaurus: Arc<Thesaurus>) -> Self {
        KeywordExtractor {
            normalizer: Normalizer::extraction(),
            tagger: Arc::new(LexiconTagger::new()),
            filters: vec![
                Arc::new(ContentWordFilter::new()) as Arc<dyn Filter>,
                Arc::new(StopFilter::new()),
            ],
            thesaurus,
        }
    }

    /// Replace the part-of-speech tagger.
    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Add a token filter after the default ones.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn thesaurus(&self) -> &Arc<Thesaurus> {
        &self.thesaurus
    }

    /// Extract keywords from a question.
    pub fn extract(&self, question: &str) -> Result<KeywordExtraction> {
        let tokens = tag_tokens(self.tagger.as_ref(), self.normalizer.tokenize(question)?)?;

        let mut stream: TokenStream = Box::new(tokens.into_iter());
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }
        let tokens: Vec<Token> = stream.collect();

        let mut extraction = KeywordExtraction::default();
        for token in tokens {
            if let Some(tag) = token.tag {
                extraction.pos_tags.push(TaggedWord {
                    word: token.text.clone(),
                    tag,
                });
            }

            if token.is_stopped() {
                extraction.filtered_words.push(token.text);
            } else {
                let synonyms = self.thesaurus.query(&token.normalized);
                extraction.keywords.push(Keyword {
                    word: token.text,
                    synonyms,
                });
            }
        }

        log::debug!(
            "extracted {} keywords and {} filtered words from {:?}",
            extraction.keywords.len(),
            extraction.filtered_words.len(),
            question
        );

        Ok(extraction)
    }

    /// Human-readable list of keywords with up to three synonyms each.
    pub fn summary(&self, question: &str) -> Result<String> {
        let extraction = self.extract(question)?;
        Ok(format_summary(question, &extraction))
    }
}

/// Format an extraction as a keyword summary.
pub fn format_summary(question: &str, extraction: &KeywordExtraction) -> String {
    let mut summary = String::new();

    let _ = write!(summary, "Question: {}\n\n", question);
    let _ = writeln!(summary, "Keywords ({}):", extraction.keywords.len());
    for (i, keyword) in extraction.keywords.iter().enumerate() {
        let _ = write!(summary, "{}. {}", i + 1, keyword.word);
        if !keyword.synonyms.is_empty() {
            let shown: Vec<&str> = keyword
                .synonyms
                .iter()
                .take(SUMMARY_SYNONYMS)
                .map(String::as_str)
                .collect();
            let _ = write!(summary, " (Synonyms: {})", shown.join(", "));
        }
        summary.push('\n');
    }

    let _ = write!(
        summary,
        "\nFiltered words ({}): {}",
        extraction.filtered_words.len(),
        extraction.filtered_words.join(", ")
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExamLensError;

    struct NounTagger;

    impl PosTagger for NounTagger {
        fn tag(&self, tokens: &[String]) -> Result<Vec<String>> {
            Ok(vec!["NN".to_string(); tokens.len()])
        }

        fn name(&self) -> &'static str {
            "noun"
        }
    }

    struct FailingTagger;

    impl PosTagger for FailingTagger {
        fn tag(&self, _tokens: &[String]) -> Result<Vec<String>> {
            Err(ExamLensError::analysis("model not loaded"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_extract_exam_question() {
        let extractor = KeywordExtractor::default();
        let extraction = extractor
            .extract("The majority of energy was generated by electricity.")
            .unwrap();

        assert_eq!(
            extraction.keyword_words(),
            vec!["majority", "energy", "generated", "electricity"]
        );
        assert_eq!(extraction.filtered_words, vec!["The", "of", "was", "by"]);
        assert_eq!(extraction.pos_tags.len(), 8);
        assert_eq!(extraction.pos_tags[0].tag, PosTag::Determiner);

        let synonyms = extraction.synonyms_of("majority").unwrap();
        assert!(synonyms.contains(&"most".to_string()));
    }

    #[test]
    fn test_stop_words_filtered_even_when_tagged_as_content() {
        let extractor = KeywordExtractor::default().with_tagger(Arc::new(NounTagger));
        let extraction = extractor.extract("the energy of a city").unwrap();

        assert_eq!(extraction.keyword_words(), vec!["energy", "city"]);
        assert_eq!(extraction.filtered_words, vec!["the", "of", "a"]);
    }

    #[test]
    fn test_numbers_and_single_chars_filtered() {
        let extractor = KeywordExtractor::default().with_tagger(Arc::new(NounTagger));
        let extraction = extractor.extract("x 2024 growth").unwrap();

        assert_eq!(extraction.keyword_words(), vec!["growth"]);
        assert_eq!(extraction.filtered_words, vec!["x", "2024"]);
    }

    #[test]
    fn test_tagger_error_propagates() {
        let extractor = KeywordExtractor::default().with_tagger(Arc::new(FailingTagger));
        let result = extractor.extract("energy");
        assert!(matches!(result, Err(ExamLensError::Analysis(msg)) if msg == "model not loaded"));
    }

    #[test]
    fn test_free_standing_dash_is_filtered() {
        let extraction = KeywordExtractor::default()
            .extract("long-term - done")
            .unwrap();

        assert_eq!(extraction.keyword_words(), vec!["long-term", "done"]);
        assert_eq!(extraction.filtered_words, vec!["-"]);
        assert_eq!(extraction.pos_tags[1].tag, PosTag::Other);
    }

    #[test]
    fn test_empty_question() {
        let extraction = KeywordExtractor::default().extract("?!").unwrap();
        assert!(extraction.keywords.is_empty());
        assert!(extraction.filtered_words.is_empty());
    }

    #[test]
    fn test_summary_format() {
        let thesaurus = Arc::new(Thesaurus::from_entries(vec![(
            "energy",
            vec!["power", "fuel", "force", "strength"],
        )]));
        let extractor = KeywordExtractor::new(thesaurus);

        let summary = extractor.summary("The energy of cities").unwrap();
        assert_eq!(
            summary,
            "Question: The energy of cities\n\n\
             Keywords (2):\n\
             1. energy (Synonyms: power, fuel, force)\n\
             2. cities\n\
             \nFiltered words (2): The, of"
        );
    }
}
