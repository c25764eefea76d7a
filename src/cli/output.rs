//! Output formatting for CLI commands.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{ExamLensArgs, OutputFormat};
use crate::compare::engine::ComparisonResult;
use crate::error::Result;
use crate::keyword::analyzer::AnalysisResult;
use crate::keyword::extractor::KeywordExtraction;
use crate::keyword::matcher::{MatchSet, MatchType};

/// Result structure for synonym lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynonymsResult {
    pub word: String,
    pub synonyms: Vec<String>,
}

/// Result structure for keyword match searches.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchesResult {
    pub keywords: Vec<String>,
    pub text: String,
    pub matches: MatchSet,
    pub total_matches: usize,
}

impl MatchesResult {
    pub fn new(keywords: Vec<String>, text: String, matches: MatchSet) -> Self {
        let total_matches = matches.total_matches();
        MatchesResult {
            keywords,
            text,
            matches,
            total_matches,
        }
    }
}

/// Result structure for keyword summaries.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResult {
    pub question: String,
    pub summary: String,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn to_human(&self, verbosity: u8) -> String;
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &ExamLensArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &ExamLensArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", result.to_human(args.verbosity()));
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ExamLensArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for ComparisonResult {
    fn to_human(&self, verbosity: u8) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Accuracy: {:.2}% ({} user words, {} reference words)",
            self.accuracy, self.total_words_user, self.total_words_reference
        );

        if self.errors.is_empty() {
            out.push_str("No errors.");
        } else {
            let _ = write!(out, "Errors ({}):", self.errors.len());
            for (i, error) in self.errors.iter().enumerate() {
                let _ = write!(
                    out,
                    "\n  {}. [{}] word {}: {} -> {}",
                    i + 1,
                    error.category,
                    error.position,
                    quote_or_dash(&error.user_segment),
                    quote_or_dash(&error.correct_segment)
                );
            }
        }

        if verbosity > 1 {
            let _ = write!(
                out,
                "\n\nUser:\n{}\n\nReference:\n{}",
                self.user_html, self.reference_html
            );
        }
        out
    }
}

impl HumanOutput for KeywordExtraction {
    fn to_human(&self, verbosity: u8) -> String {
        let mut out = String::new();
        let _ = write!(out, "Keywords ({}):", self.keywords.len());
        for keyword in &self.keywords {
            let _ = write!(out, "\n  {}", keyword.word);
            if !keyword.synonyms.is_empty() {
                let _ = write!(out, " ~ {}", keyword.synonyms.join(", "));
            }
        }
        let _ = write!(
            out,
            "\nFiltered words ({}): {}",
            self.filtered_words.len(),
            self.filtered_words.join(", ")
        );

        if verbosity > 1 {
            let tags: Vec<String> = self
                .pos_tags
                .iter()
                .map(|t| format!("{}/{}", t.word, t.tag))
                .collect();
            let _ = write!(out, "\nTags: {}", tags.join(" "));
        }
        out
    }
}

impl HumanOutput for MatchSet {
    fn to_human(&self, _verbosity: u8) -> String {
        let mut lines = Vec::new();
        for entry in self.iter() {
            if entry.matches.is_empty() {
                lines.push(format!("{}: no matches", entry.keyword));
                continue;
            }

            lines.push(format!("{} ({} matches):", entry.keyword, entry.matches.len()));
            for record in &entry.matches {
                let kind = match record.match_type {
                    MatchType::Direct => "direct",
                    MatchType::Synonym => "synonym",
                };
                lines.push(format!(
                    "  [{}] '{}' at {}: ...{}...",
                    kind, record.matched_word, record.position, record.context
                ));
            }
        }
        lines.join("\n")
    }
}

impl HumanOutput for MatchesResult {
    fn to_human(&self, verbosity: u8) -> String {
        format!(
            "{}\n\nTotal matches: {}",
            self.matches.to_human(verbosity),
            self.total_matches
        )
    }
}

impl HumanOutput for AnalysisResult {
    fn to_human(&self, verbosity: u8) -> String {
        let stats = &self.statistics;
        format!(
            "{}\n\n{}\n\nCoverage: {:.2}% ({} of {} keywords, {} matches)",
            self.extraction.to_human(verbosity),
            self.matches.to_human(verbosity),
            stats.match_coverage,
            stats.keywords_with_matches,
            stats.total_keywords,
            stats.total_matches
        )
    }
}

impl HumanOutput for SynonymsResult {
    fn to_human(&self, _verbosity: u8) -> String {
        if self.synonyms.is_empty() {
            format!("No synonyms found for '{}'", self.word)
        } else {
            self.synonyms.join("\n")
        }
    }
}

impl HumanOutput for SummaryResult {
    fn to_human(&self, _verbosity: u8) -> String {
        self.summary.clone()
    }
}

fn quote_or_dash(segment: &str) -> String {
    if segment.is_empty() {
        "-".to_string()
    } else {
        format!("\"{segment}\"")
    }
}
