//! Command implementations for the examlens CLI.

use std::fs;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ServiceConfig;
use crate::error::{ExamLensError, Result};
use crate::service::ExamService;

/// Execute a CLI command.
pub fn execute_command(args: ExamLensArgs) -> Result<()> {
    let service = build_service(&args)?;

    match &args.command {
        Command::Compare(compare_args) => compare(&service, compare_args, &args),
        Command::Extract(extract_args) => extract(&service, extract_args, &args),
        Command::Analyze(analyze_args) => analyze(&service, analyze_args, &args),
        Command::Matches(matches_args) => find_matches(&service, matches_args, &args),
        Command::Synonyms(synonyms_args) => synonyms(&service, synonyms_args, &args),
        Command::Summary(summary_args) => summary(&service, summary_args, &args),
    }
}

/// Process exit status for a failed command: 2 for rejected input, 1 for
/// everything else.
pub fn exit_code(error: &ExamLensError) -> i32 {
    match error {
        ExamLensError::Validation(_) | ExamLensError::InputShape(_) => 2,
        _ => 1,
    }
}

/// Build the service from the configuration file, if any.
fn build_service(args: &ExamLensArgs) -> Result<ExamService> {
    let config = match &args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            ServiceConfig::load_from_file(path)?
        }
        None => ServiceConfig::default(),
    };
    ExamService::new(config)
}

/// Resolve a text argument: `@path` reads the file, anything else is literal.
pub fn resolve_text(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) if !path.is_empty() => fs::read_to_string(path).map_err(|e| {
            ExamLensError::validation(format!("cannot read text file '{}': {}", path, e))
        }),
        _ => Ok(arg.to_string()),
    }
}

fn compare(service: &ExamService, args: &CompareArgs, cli_args: &ExamLensArgs) -> Result<()> {
    let user = resolve_text(&args.user)?;
    let reference = resolve_text(&args.reference)?;
    let result = service.compare_transcripts(&user, &reference)?;
    output_result("Transcript comparison", &result, cli_args)
}

fn extract(service: &ExamService, args: &ExtractArgs, cli_args: &ExamLensArgs) -> Result<()> {
    let result = service.extract_keywords(&args.question)?;
    output_result("Keyword extraction", &result, cli_args)
}

fn analyze(service: &ExamService, args: &AnalyzeArgs, cli_args: &ExamLensArgs) -> Result<()> {
    let text = resolve_text(&args.text)?;
    let result = service.analyze_question_text_match(&args.question, &text)?;
    output_result("Question/passage analysis", &result, cli_args)
}

fn find_matches(service: &ExamService, args: &MatchesArgs, cli_args: &ExamLensArgs) -> Result<()> {
    let text = resolve_text(&args.text)?;
    let matches = service.find_keyword_matches(args.keywords.as_slice(), &text)?;
    let result = MatchesResult::new(args.keywords.clone(), text, matches);
    output_result("Keyword matches", &result, cli_args)
}

fn synonyms(service: &ExamService, args: &SynonymsArgs, cli_args: &ExamLensArgs) -> Result<()> {
    let result = SynonymsResult {
        word: args.word.clone(),
        synonyms: service.get_synonyms(&args.word),
    };
    output_result("Synonyms", &result, cli_args)
}

fn summary(service: &ExamService, args: &SummaryArgs, cli_args: &ExamLensArgs) -> Result<()> {
    let result = SummaryResult {
        question: args.question.clone(),
        summary: service.keyword_summary(&args.question)?,
    };
    output_result("Keyword summary", &result, cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_resolve_literal_text() {
        assert_eq!(resolve_text("The cat sat").unwrap(), "The cat sat");
        assert_eq!(resolve_text("@").unwrap(), "@");
    }

    #[test]
    fn test_resolve_file_text() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Most power in the region").unwrap();

        let arg = format!("@{}", file.path().display());
        assert_eq!(resolve_text(&arg).unwrap(), "Most power in the region");
    }

    #[test]
    fn test_resolve_missing_file() {
        let result = resolve_text("@/nonexistent/passage.txt");
        assert!(matches!(result, Err(ExamLensError::Validation(_))));
    }

    #[test]
    fn test_execute_reports_validation_errors() {
        let args = ExamLensArgs::try_parse_from([
            "examlens",
            "-q",
            "matches",
            "--keywords",
            "energy, ,power",
            "--text",
            "power",
        ])
        .unwrap();

        assert!(matches!(
            execute_command(args),
            Err(ExamLensError::InputShape(_))
        ));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&ExamLensError::validation("text is required")), 2);
        assert_eq!(exit_code(&ExamLensError::input_shape("keyword at index 1 is empty")), 2);
        assert_eq!(exit_code(&ExamLensError::config("context_chars must be positive")), 1);
    }

    #[test]
    fn test_execute_with_config_file() {
        let mut config = NamedTempFile::new().unwrap();
        write!(config, r#"{{"context_chars": 0}}"#).unwrap();
        let config_path = config.path().display().to_string();

        let args = ExamLensArgs::try_parse_from([
            "examlens",
            "-q",
            "-c",
            config_path.as_str(),
            "synonyms",
            "energy",
        ])
        .unwrap();

        assert!(matches!(execute_command(args), Err(ExamLensError::Config(_))));
    }
}
