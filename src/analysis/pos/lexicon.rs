//! Rule-based Penn Treebank tagger.
//!
//! Closed-class words come from a fixed lexicon; everything else is tagged by
//! shape: numerals, capitalisation and suffixes, falling back to `NN`.

use std::sync::LazyLock;

use ahash::AHashMap;

use super::PosTagger;
use crate::error::Result;

/// Closed-class lexicon: word → Penn Treebank label.
const CLOSED_CLASS: &[(&str, &str)] = &[
    // determiners
    ("a", "DT"),
    ("an", "DT"),
    ("the", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("every", "DT"),
    ("each", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("all", "DT"),
    ("both", "DT"),
    ("either", "DT"),
    ("neither", "DT"),
    ("another", "DT"),
    // prepositions and subordinators
    ("of", "IN"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("by", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("into", "IN"),
    ("onto", "IN"),
    ("about", "IN"),
    ("above", "IN"),
    ("across", "IN"),
    ("after", "IN"),
    ("against", "IN"),
    ("along", "IN"),
    ("among", "IN"),
    ("around", "IN"),
    ("as", "IN"),
    ("before", "IN"),
    ("behind", "IN"),
    ("below", "IN"),
    ("beside", "IN"),
    ("between", "IN"),
    ("beyond", "IN"),
    ("during", "IN"),
    ("except", "IN"),
    ("inside", "IN"),
    ("like", "IN"),
    ("near", "IN"),
    ("outside", "IN"),
    ("over", "IN"),
    ("since", "IN"),
    ("through", "IN"),
    ("throughout", "IN"),
    ("toward", "IN"),
    ("towards", "IN"),
    ("under", "IN"),
    ("until", "IN"),
    ("upon", "IN"),
    ("via", "IN"),
    ("within", "IN"),
    ("without", "IN"),
    ("than", "IN"),
    ("whether", "IN"),
    ("because", "IN"),
    ("although", "IN"),
    ("though", "IN"),
    ("while", "IN"),
    ("if", "IN"),
    ("unless", "IN"),
    ("to", "TO"),
    // conjunctions
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("yet", "CC"),
    // pronouns
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("her", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("myself", "PRP"),
    ("yourself", "PRP"),
    ("himself", "PRP"),
    ("herself", "PRP"),
    ("itself", "PRP"),
    ("ourselves", "PRP"),
    ("themselves", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    // modals
    ("will", "MD"),
    ("would", "MD"),
    ("could", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("can", "MD"),
    ("cannot", "MD"),
    ("shall", "MD"),
    // be / have / do
    ("be", "VB"),
    ("am", "VBP"),
    ("is", "VBZ"),
    ("are", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("done", "VBN"),
    ("doing", "VBG"),
    // wh-words
    ("which", "WDT"),
    ("who", "WP"),
    ("whom", "WP"),
    ("whose", "WP$"),
    ("what", "WP"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    ("there", "EX"),
    // frequent adverbs the suffix rules miss
    ("not", "RB"),
    ("never", "RB"),
    ("very", "RB"),
    ("also", "RB"),
    ("too", "RB"),
    ("so", "RB"),
    ("just", "RB"),
    ("only", "RB"),
    ("often", "RB"),
    ("always", "RB"),
    ("sometimes", "RB"),
    ("still", "RB"),
    ("already", "RB"),
    ("here", "RB"),
    ("quite", "RB"),
    ("rather", "RB"),
    ("almost", "RB"),
    ("more", "RBR"),
    ("less", "RBR"),
    ("most", "RBS"),
    ("least", "RBS"),
    // -ly nouns and adjectives
    ("family", "NN"),
    ("supply", "NN"),
    ("assembly", "NN"),
    ("reply", "NN"),
    ("likely", "JJ"),
    ("early", "JJ"),
    ("daily", "JJ"),
    ("friendly", "JJ"),
    ("elderly", "JJ"),
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish",
];

static LEXICON: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| CLOSED_CLASS.iter().copied().collect());

/// A deterministic lexicon + suffix tagger emitting Penn Treebank labels.
#[derive(Clone, Debug, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    /// Create a new lexicon tagger.
    pub fn new() -> Self {
        LexiconTagger
    }

    fn tag_word(word: &str, index: usize) -> &'static str {
        let lower = word.to_lowercase();

        if let Some(&label) = LEXICON.get(lower.as_str()) {
            return label;
        }

        if is_numeral(word) {
            return "CD";
        }

        if !word.chars().any(char::is_alphanumeric) {
            return ".";
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        let len = lower.chars().count();

        if capitalized && index > 0 {
            return if len > 3 && is_plural_shape(&lower) {
                "NNPS"
            } else {
                "NNP"
            };
        }

        if len > 4 && lower.ends_with("ly") {
            "RB"
        } else if len > 4 && lower.ends_with("ing") {
            "VBG"
        } else if len > 4 && lower.ends_with("ed") {
            "VBN"
        } else if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            "JJ"
        } else if len > 3 && is_plural_shape(&lower) {
            "NNS"
        } else {
            "NN"
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<String>> {
        Ok(tokens
            .iter()
            .enumerate()
            .map(|(index, word)| Self::tag_word(word, index).to_string())
            .collect())
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

fn is_numeral(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',' || c == '-')
}

fn is_plural_shape(lower: &str) -> bool {
    lower.ends_with('s') && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
}
