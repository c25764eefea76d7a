//! Command line argument parsing for the examlens CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// examlens - dictation comparison and keyword matching for exam practice
#[derive(Parser, Debug, Clone)]
#[command(name = "examlens")]
#[command(about = "Dictation comparison and keyword/synonym matching for language-exam practice")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ExamLensArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Service configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG", env = "EXAMLENS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ExamLensArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    /// Log level for the effective verbosity: quiet logs errors only, each
    /// `-v` past the first opens one more level.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compare a dictation transcript with the reference transcript
    Compare(CompareArgs),

    /// Extract keywords and synonyms from a question
    Extract(ExtractArgs),

    /// Extract keywords from a question and find them in a passage
    Analyze(AnalyzeArgs),

    /// Find keywords and their synonyms in a passage
    Matches(MatchesArgs),

    /// Look up the synonyms of a word
    Synonyms(SynonymsArgs),

    /// Print a keyword summary of a question
    Summary(SummaryArgs),
}

/// Arguments for comparing transcripts
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// What the user wrote (prefix with @ to read a file)
    #[arg(short, long, value_name = "TEXT")]
    pub user: String,

    /// The reference transcript (prefix with @ to read a file)
    #[arg(short, long, value_name = "TEXT")]
    pub reference: String,
}

/// Arguments for keyword extraction
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Question text
    #[arg(value_name = "QUESTION")]
    pub question: String,
}

/// Arguments for question/passage analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Question text
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Passage to search (prefix with @ to read a file)
    #[arg(short, long, value_name = "TEXT")]
    pub text: String,
}

/// Arguments for keyword matching
#[derive(Parser, Debug, Clone)]
pub struct MatchesArgs {
    /// Keywords to search for (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub keywords: Vec<String>,

    /// Passage to search (prefix with @ to read a file)
    #[arg(short, long, value_name = "TEXT")]
    pub text: String,
}

/// Arguments for synonym lookup
#[derive(Parser, Debug, Clone)]
pub struct SynonymsArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for keyword summaries
#[derive(Parser, Debug, Clone)]
pub struct SummaryArgs {
    /// Question text
    #[arg(value_name = "QUESTION")]
    pub question: String,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_command() {
        let args = ExamLensArgs::try_parse_from([
            "examlens",
            "compare",
            "--user",
            "The cat sit on mat",
            "--reference",
            "@reference.txt",
        ])
        .unwrap();

        if let Command::Compare(compare_args) = args.command {
            assert_eq!(compare_args.user, "The cat sit on mat");
            assert_eq!(compare_args.reference, "@reference.txt");
        } else {
            panic!("Expected Compare command");
        }
    }

    #[test]
    fn test_matches_command_splits_keywords() {
        let args = ExamLensArgs::try_parse_from([
            "examlens",
            "matches",
            "--keywords",
            "energy,majority",
            "--text",
            "Most power",
        ])
        .unwrap();

        if let Command::Matches(matches_args) = args.command {
            assert_eq!(matches_args.keywords, vec!["energy", "majority"]);
            assert_eq!(matches_args.text, "Most power");
        } else {
            panic!("Expected Matches command");
        }
    }

    #[test]
    fn test_log_level_follows_verbosity() {
        let parse = |flags: &[&str]| {
            let mut argv = vec!["examlens"];
            argv.extend_from_slice(flags);
            argv.extend(["synonyms", "energy"]);
            ExamLensArgs::try_parse_from(argv).unwrap().log_level()
        };

        assert_eq!(parse(&["-q"]), LevelFilter::Error);
        assert_eq!(parse(&[]), LevelFilter::Warn);
        assert_eq!(parse(&["-vv"]), LevelFilter::Info);
        assert_eq!(parse(&["-vvv"]), LevelFilter::Debug);
        assert_eq!(parse(&["-vvvv"]), LevelFilter::Trace);
    }

    #[test]
    fn test_matches_requires_keywords() {
        let result = ExamLensArgs::try_parse_from(["examlens", "matches", "--text", "passage"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_analyze_command() {
        let args = ExamLensArgs::try_parse_from([
            "examlens",
            "analyze",
            "Why did energy use rise?",
            "-t",
            "@passage.txt",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.question, "Why did energy use rise?");
            assert_eq!(analyze_args.text, "@passage.txt");
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = ExamLensArgs::try_parse_from(["examlens", "synonyms", "energy"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = ExamLensArgs::try_parse_from(["examlens", "-vv", "synonyms", "energy"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = ExamLensArgs::try_parse_from(["examlens", "--quiet", "synonyms", "energy"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = ExamLensArgs::try_parse_from([
            "examlens",
            "extract",
            "What rose?",
            "--format",
            "json",
            "--pretty",
            "-c",
            "examlens.json",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.config, Some(PathBuf::from("examlens.json")));
    }
}
