//! The exam-practice service facade.
//!
//! [`ExamService`] validates requests and dispatches them to the transcript
//! comparator and the keyword analyzer. It is immutable once built and can be
//! shared across threads.
//!
//! # Examples
//!
//! ```
//! use examlens::service::ExamService;
//!
//! let service = ExamService::default();
//!
//! let comparison = service
//!     .compare_transcripts("The cat sat on the mat", "The cat sat on the mat")
//!     .unwrap();
//! assert_eq!(comparison.accuracy, 100.0);
//!
//! let synonyms = service.get_synonyms("majority");
//! assert!(synonyms.contains(&"bulk".to_string()));
//! ```

use std::sync::Arc;

use crate::compare::engine::{ComparisonResult, TranscriptComparator};
use crate::config::ServiceConfig;
use crate::error::{ExamLensError, Result};
use crate::keyword::analyzer::{AnalysisResult, MatchAnalyzer};
use crate::keyword::extractor::{KeywordExtraction, KeywordExtractor};
use crate::keyword::matcher::{MatchSet, TextMatcher};
use crate::keyword::thesaurus::Thesaurus;

/// Entry point for every exam-practice operation.
#[derive(Debug, Clone)]
pub struct ExamService {
    config: ServiceConfig,
    comparator: TranscriptComparator,
    analyzer: MatchAnalyzer,
}

impl Default for ExamService {
    fn default() -> Self {
        Self::with_thesaurus(ServiceConfig::default(), Thesaurus::builtin())
    }
}

impl ExamService {
    /// Build a service from a configuration, loading a custom thesaurus when
    /// one is configured.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;

        let thesaurus = match &config.thesaurus_path {
            Some(path) => Arc::new(Thesaurus::load_from_file(path)?),
            None => Thesaurus::builtin(),
        };
        if thesaurus.is_empty() {
            log::warn!("thesaurus is empty; only direct matches will be found");
        }

        Ok(Self::with_thesaurus(config, thesaurus))
    }

    /// Build a service around an existing thesaurus, ignoring
    /// `config.thesaurus_path`.
    pub fn with_thesaurus(config: ServiceConfig, thesaurus: Arc<Thesaurus>) -> Self {
        let comparator = TranscriptComparator::new(config.render.clone());
        let extractor = KeywordExtractor::new(Arc::clone(&thesaurus));
        let matcher = TextMatcher::new(thesaurus).context_chars(config.context_chars);

        ExamService {
            config,
            comparator,
            analyzer: MatchAnalyzer::new(extractor, matcher),
        }
    }

    /// Replace the keyword extractor, e.g. to plug in another tagger.
    ///
    /// The passage matcher is rebuilt on the extractor's thesaurus so that
    /// extraction, matching and synonym lookups share one table.
    pub fn with_extractor(mut self, extractor: KeywordExtractor) -> Self {
        let matcher = TextMatcher::new(Arc::clone(extractor.thesaurus()))
            .context_chars(self.config.context_chars);
        self.analyzer = MatchAnalyzer::new(extractor, matcher);
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Compare a user transcript with the reference transcript.
    pub fn compare_transcripts(
        &self,
        user_text: &str,
        reference_text: &str,
    ) -> Result<ComparisonResult> {
        self.comparator.compare(user_text, reference_text)
    }

    /// Extract keywords (with synonyms) from a question.
    pub fn extract_keywords(&self, question: &str) -> Result<KeywordExtraction> {
        require_text(question, "question")?;
        self.analyzer.extractor().extract(question)
    }

    /// Extract keywords from a question and find them in a passage.
    pub fn analyze_question_text_match(&self, question: &str, text: &str) -> Result<AnalysisResult> {
        require_text(question, "question")?;
        require_text(text, "text")?;
        self.analyzer.analyze(question, text)
    }

    /// Find the given keywords and their synonyms in a passage.
    pub fn find_keyword_matches<S: AsRef<str>>(&self, keywords: &[S], text: &str) -> Result<MatchSet> {
        if keywords.is_empty() {
            return Err(ExamLensError::validation("keywords are required"));
        }
        require_text(text, "text")?;

        for (i, keyword) in keywords.iter().enumerate() {
            if keyword.as_ref().trim().is_empty() {
                return Err(ExamLensError::input_shape(format!(
                    "keyword at index {} is empty",
                    i
                )));
            }
        }

        Ok(self.analyzer.matcher().find_matches(keywords, text))
    }

    /// Synonyms of a word; empty for unknown words.
    pub fn get_synonyms(&self, word: &str) -> Vec<String> {
        self.analyzer.extractor().thesaurus().query(word)
    }

    /// Human-readable keyword summary of a question.
    pub fn keyword_summary(&self, question: &str) -> Result<String> {
        require_text(question, "question")?;
        self.analyzer.extractor().summary(question)
    }
}

fn require_text(text: &str, what: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ExamLensError::validation(format!("{} is required", what)));
    }
    Ok(())
}
