use std::io::Write;
use std::sync::Arc;

use examlens::analysis::pos::PosTagger;
use examlens::config::ServiceConfig;
use examlens::error::{ExamLensError, Result};
use examlens::keyword::{KeywordExtractor, MatchType, Thesaurus};
use examlens::service::ExamService;
use tempfile::NamedTempFile;

const QUESTION: &str = "The majority of energy was generated by electricity.";

#[test]
fn exam_question_keywords_are_extracted() -> Result<()> {
    let service = ExamService::default();
    let extraction = service.extract_keywords(QUESTION)?;

    assert_eq!(
        extraction.keyword_words(),
        vec!["majority", "energy", "generated", "electricity"]
    );
    for word in ["The", "of", "was", "by"] {
        assert!(extraction.filtered_words.contains(&word.to_string()));
    }

    let synonyms = extraction.synonyms_of("generated").unwrap();
    assert!(synonyms.contains(&"produced".to_string()));
    Ok(())
}

#[test]
fn synonyms_of_majority() {
    let service = ExamService::default();
    let synonyms = service.get_synonyms("majority");

    assert!(synonyms.contains(&"most".to_string()));
    assert!(synonyms.contains(&"bulk".to_string()));
    assert!(!synonyms.contains(&"majority".to_string()));
}

#[test]
fn thesaurus_reverse_lookup_is_derived_not_stored() {
    let thesaurus = Thesaurus::builtin();

    // "power" is only ever listed as a synonym
    assert!(thesaurus.entry("power").is_none());
    let reverse = thesaurus.query("power");
    assert!(reverse.contains(&"energy".to_string()));
    assert!(reverse.contains(&"electricity".to_string()));

    // no transitivity: fuel belongs to energy, not to power
    assert!(!reverse.contains(&"fuel".to_string()));
}

#[test]
fn synonym_match_in_passage() -> Result<()> {
    let service = ExamService::default();
    let matches = service.find_keyword_matches(
        &["energy"],
        "Most power in the region was produced through electrical sources.",
    )?;

    let hits = matches.get("energy").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].match_type, MatchType::Synonym);
    assert_eq!(hits[0].matched_word, "power");
    assert_eq!(hits[0].original_keyword.as_deref(), Some("energy"));
    assert_eq!(hits[0].position, 5);
    Ok(())
}

#[test]
fn analysis_reports_partial_coverage() -> Result<()> {
    let service = ExamService::default();
    let result = service.analyze_question_text_match(
        QUESTION,
        "Most fuel in the region was produced locally.",
    )?;

    let stats = &result.statistics;
    assert_eq!(stats.total_keywords, 4);
    assert_eq!(stats.keywords_with_matches, 3);
    assert_eq!(stats.match_coverage, 75.0);
    assert_eq!(stats.total_matches, 3);
    assert_eq!(result.question, QUESTION);
    Ok(())
}

#[test]
fn analysis_coverage_is_bounded() -> Result<()> {
    let service = ExamService::default();
    let passages = [
        "nothing relevant",
        "Most power in the region was produced through electrical sources and other forms of generation.",
        "energy energy energy",
    ];

    for passage in passages {
        let result = service.analyze_question_text_match(QUESTION, passage)?;
        let coverage = result.statistics.match_coverage;
        assert!((0.0..=100.0).contains(&coverage));
    }
    Ok(())
}

#[test]
fn keyword_summary_lists_keywords_and_filtered_words() -> Result<()> {
    let service = ExamService::default();
    let summary = service.keyword_summary(QUESTION)?;

    assert!(summary.starts_with(&format!("Question: {QUESTION}\n\nKeywords (4):\n1. majority")));
    assert!(summary.contains("(Synonyms: most, largest part, main portion)"));
    assert!(summary.ends_with("Filtered words (4): The, of, was, by"));
    Ok(())
}

#[test]
fn custom_thesaurus_file_replaces_builtin() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, r#"{{"energy": ["juice"], "sun": ["star"]}}"#)?;

    let service = ExamService::new(ServiceConfig::new().thesaurus_path(file.path()))?;
    let matches = service.find_keyword_matches(&["energy"], "power and juice")?;

    let hits = matches.get("energy").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_word, "juice");
    assert_eq!(service.get_synonyms("star"), vec!["sun"]);
    Ok(())
}

struct UppercaseOnlyTagger;

impl PosTagger for UppercaseOnlyTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<String>> {
        Ok(tokens
            .iter()
            .map(|t| {
                if t.chars().next().is_some_and(char::is_uppercase) {
                    "NNP".to_string()
                } else {
                    "IN".to_string()
                }
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "uppercase_only"
    }
}

#[test]
fn pluggable_tagger_drives_extraction() -> Result<()> {
    let extractor =
        KeywordExtractor::new(Thesaurus::builtin()).with_tagger(Arc::new(UppercaseOnlyTagger));
    let service = ExamService::default().with_extractor(extractor);

    let extraction = service.extract_keywords("Where does London get energy")?;
    assert_eq!(extraction.keyword_words(), vec!["Where", "London"]);
    Ok(())
}

#[test]
fn keyword_list_validation() {
    let service = ExamService::default();
    let empty: Vec<String> = Vec::new();

    assert!(matches!(
        service.find_keyword_matches(empty.as_slice(), "passage"),
        Err(ExamLensError::Validation(_))
    ));
    assert!(matches!(
        service.find_keyword_matches(&["", "energy"], "passage"),
        Err(ExamLensError::InputShape(_))
    ));
    assert!(matches!(
        service.extract_keywords("   "),
        Err(ExamLensError::Validation(_))
    ));
}
