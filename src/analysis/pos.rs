//! Part-of-speech tagging.
//!
//! Taggers are collaborators: they speak their own label vocabulary (Penn
//! Treebank for the built-in [`LexiconTagger`]) and return one raw label per
//! token. [`tag_tokens`] runs a tagger, checks the length contract and
//! translates every label into [`PosTag`], so the rest of the crate never
//! inspects a collaborator's native labels.
//!
//! # Examples
//!
//! ```
//! use examlens::analysis::pos::{PosTag, WordClass};
//!
//! let tag = PosTag::from_label("VBN");
//! assert_eq!(tag, PosTag::VerbPastParticiple);
//! assert_eq!(tag.word_class(), WordClass::Verb);
//! assert!(tag.is_content());
//! assert!(!PosTag::from_label("DT").is_content());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::{ExamLensError, Result};

pub mod lexicon;

pub use lexicon::LexiconTagger;

/// Coarse word class of a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
    /// Determiners, prepositions, pronouns, numerals, punctuation, ...
    Function,
}

/// Internal part-of-speech tag set.
///
/// Serialized with the Penn Treebank label of the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    #[serde(rename = "NN")]
    Noun,
    #[serde(rename = "NNS")]
    PluralNoun,
    #[serde(rename = "NNP")]
    ProperNoun,
    #[serde(rename = "NNPS")]
    PluralProperNoun,
    #[serde(rename = "VB")]
    Verb,
    #[serde(rename = "VBD")]
    VerbPast,
    #[serde(rename = "VBG")]
    VerbGerund,
    #[serde(rename = "VBN")]
    VerbPastParticiple,
    #[serde(rename = "VBP")]
    VerbPresent,
    #[serde(rename = "VBZ")]
    VerbThirdPerson,
    #[serde(rename = "JJ")]
    Adjective,
    #[serde(rename = "JJR")]
    AdjectiveComparative,
    #[serde(rename = "JJS")]
    AdjectiveSuperlative,
    #[serde(rename = "RB")]
    Adverb,
    #[serde(rename = "RBR")]
    AdverbComparative,
    #[serde(rename = "RBS")]
    AdverbSuperlative,
    #[serde(rename = "DT")]
    Determiner,
    #[serde(rename = "IN")]
    Preposition,
    #[serde(rename = "PRP")]
    Pronoun,
    #[serde(rename = "PRP$")]
    PossessivePronoun,
    #[serde(rename = "MD")]
    Modal,
    #[serde(rename = "CC")]
    Conjunction,
    #[serde(rename = "CD")]
    Cardinal,
    #[serde(rename = "TO")]
    To,
    #[serde(rename = "WH")]
    WhWord,
    #[serde(rename = "EX")]
    Existential,
    #[serde(rename = "RP")]
    Particle,
    /// Punctuation, symbols and labels the translation layer does not know.
    #[serde(rename = "X")]
    Other,
}

impl PosTag {
    /// Translate a Penn Treebank label into a tag.
    ///
    /// Unknown labels become [`PosTag::Other`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "NN" => PosTag::Noun,
            "NNS" => PosTag::PluralNoun,
            "NNP" => PosTag::ProperNoun,
            "NNPS" => PosTag::PluralProperNoun,
            "VB" => PosTag::Verb,
            "VBD" => PosTag::VerbPast,
            "VBG" => PosTag::VerbGerund,
            "VBN" => PosTag::VerbPastParticiple,
            "VBP" => PosTag::VerbPresent,
            "VBZ" => PosTag::VerbThirdPerson,
            "JJ" => PosTag::Adjective,
            "JJR" => PosTag::AdjectiveComparative,
            "JJS" => PosTag::AdjectiveSuperlative,
            "RB" => PosTag::Adverb,
            "RBR" => PosTag::AdverbComparative,
            "RBS" => PosTag::AdverbSuperlative,
            "DT" | "PDT" => PosTag::Determiner,
            "IN" => PosTag::Preposition,
            "PRP" => PosTag::Pronoun,
            "PRP$" => PosTag::PossessivePronoun,
            "MD" => PosTag::Modal,
            "CC" => PosTag::Conjunction,
            "CD" => PosTag::Cardinal,
            "TO" => PosTag::To,
            "WDT" | "WP" | "WP$" | "WRB" => PosTag::WhWord,
            "EX" => PosTag::Existential,
            "RP" => PosTag::Particle,
            _ => PosTag::Other,
        }
    }

    /// The Penn Treebank label of this tag.
    pub fn label(&self) -> &'static str {
        match self {
            PosTag::Noun => "NN",
            PosTag::PluralNoun => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::PluralProperNoun => "NNPS",
            PosTag::Verb => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbPastParticiple => "VBN",
            PosTag::VerbPresent => "VBP",
            PosTag::VerbThirdPerson => "VBZ",
            PosTag::Adjective => "JJ",
            PosTag::AdjectiveComparative => "JJR",
            PosTag::AdjectiveSuperlative => "JJS",
            PosTag::Adverb => "RB",
            PosTag::AdverbComparative => "RBR",
            PosTag::AdverbSuperlative => "RBS",
            PosTag::Determiner => "DT",
            PosTag::Preposition => "IN",
            PosTag::Pronoun => "PRP",
            PosTag::PossessivePronoun => "PRP$",
            PosTag::Modal => "MD",
            PosTag::Conjunction => "CC",
            PosTag::Cardinal => "CD",
            PosTag::To => "TO",
            PosTag::WhWord => "WH",
            PosTag::Existential => "EX",
            PosTag::Particle => "RP",
            PosTag::Other => "X",
        }
    }

    /// Coarse word class.
    pub fn word_class(&self) -> WordClass {
        match self {
            PosTag::Noun | PosTag::PluralNoun | PosTag::ProperNoun | PosTag::PluralProperNoun => {
                WordClass::Noun
            }
            PosTag::Verb
            | PosTag::VerbPast
            | PosTag::VerbGerund
            | PosTag::VerbPastParticiple
            | PosTag::VerbPresent
            | PosTag::VerbThirdPerson => WordClass::Verb,
            PosTag::Adjective | PosTag::AdjectiveComparative | PosTag::AdjectiveSuperlative => {
                WordClass::Adjective
            }
            PosTag::Adverb | PosTag::AdverbComparative | PosTag::AdverbSuperlative => {
                WordClass::Adverb
            }
            _ => WordClass::Function,
        }
    }

    /// Whether the tag marks a content word (noun, verb, adjective, adverb).
    pub fn is_content(&self) -> bool {
        self.word_class() != WordClass::Function
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A part-of-speech tagger collaborator.
///
/// Implementations return exactly one native label per input token, in
/// input order. Labels are translated with [`PosTag::from_label`].
pub trait PosTagger: Send + Sync {
    /// Tag a token sequence.
    fn tag(&self, tokens: &[String]) -> Result<Vec<String>>;

    /// Get the name of this tagger.
    fn name(&self) -> &'static str;
}

/// Run `tagger` over `tokens` and attach the translated tags.
///
/// Tagger failures propagate unchanged; a label count that differs from the
/// token count is an analysis error.
pub fn tag_tokens(tagger: &dyn PosTagger, tokens: Vec<Token>) -> Result<Vec<Token>> {
    let words: Vec<String> = tokens.iter().map(|t| t.text.clone()).collect();
    let labels = tagger.tag(&words)?;

    if labels.len() != tokens.len() {
        return Err(ExamLensError::analysis(format!(
            "tagger '{}' returned {} tags for {} tokens",
            tagger.name(),
            labels.len(),
            tokens.len()
        )));
    }

    Ok(tokens
        .into_iter()
        .zip(labels)
        .map(|(token, label)| token.with_tag(PosTag::from_label(&label)))
        .collect())
}
