//! Question-to-passage analysis.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keyword::extractor::{KeywordExtraction, KeywordExtractor};
use crate::keyword::matcher::{MatchSet, TextMatcher};
use crate::util::round2;

/// Coverage figures of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub total_keywords: usize,
    pub keywords_with_matches: usize,
    /// Percentage of keywords with at least one hit, rounded to 2 decimals.
    pub match_coverage: f64,
    pub total_matches: usize,
}

impl MatchStatistics {
    pub fn compute(extraction: &KeywordExtraction, matches: &MatchSet) -> Self {
        let total_keywords = extraction.keywords.len();
        let keywords_with_matches = matches.keywords_with_matches();
        let match_coverage = if total_keywords == 0 {
            0.0
        } else {
            round2(keywords_with_matches as f64 / total_keywords as f64 * 100.0)
        };

        MatchStatistics {
            total_keywords,
            keywords_with_matches,
            match_coverage,
            total_matches: matches.total_matches(),
        }
    }
}

/// Full result of analysing a question against a passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub question: String,
    pub text: String,
    pub extraction: KeywordExtraction,
    pub matches: MatchSet,
    pub statistics: MatchStatistics,
}

/// Extracts keywords from a question and locates them in a passage.
#[derive(Debug, Clone, Default)]
pub struct MatchAnalyzer {
    extractor: KeywordExtractor,
    matcher: TextMatcher,
}

impl MatchAnalyzer {
    pub fn new(extractor: KeywordExtractor, matcher: TextMatcher) -> Self {
        MatchAnalyzer { extractor, matcher }
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    pub fn matcher(&self) -> &TextMatcher {
        &self.matcher
    }

    pub fn analyze(&self, question: &str, text: &str) -> Result<AnalysisResult> {
        let extraction = self.extractor.extract(question)?;
        let matches = self
            .matcher
            .find_matches(&extraction.keyword_words(), text);
        let statistics = MatchStatistics::compute(&extraction, &matches);

        log::debug!(
            "analysis coverage {}% over {} keywords",
            statistics.match_coverage,
            statistics.total_keywords
        );

        Ok(AnalysisResult {
            question: question.to_string(),
            text: text.to_string(),
            extraction,
            matches,
            statistics,
        })
    }
}
