//! Question-type tagging.
//!
//! Four rules in fixed priority order, stopping at the first match, so a
//! pair gets at most one tag:
//!
//! 1. polar — the text opens with a finite verb or auxiliary. Matched on
//!    morphological stems so inflected forms collapse ("does", "do" and
//!    "did" all count), which is why the leading token goes through the
//!    English Snowball stemmer first. The other rules see the raw text.
//! 2. wh-question — a WH-word anywhere.
//! 3. alternative — the word "or".
//! 4. conditional — the word "if".
use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use super::annotate::Annotate;
use crate::pipelines::types::{AnnotatedPair, QuestionType};

/// Finite verbs and auxiliaries that open a polar question.
const POLAR_LEADS: [&str; 18] = [
    "do", "does", "did", "is", "are", "was", "were", "has", "have", "had", "can", "could",
    "should", "would", "will", "may", "might", "must",
];

lazy_static! {
    static ref WH_WORD: Regex =
        Regex::new(r"\b(?:who|what|which|where|when|why|how|whose|whom)\b").unwrap();
    static ref ALTERNATIVE: Regex = Regex::new(r"\bor\b").unwrap();
    static ref CONDITIONAL: Regex = Regex::new(r"\bif\b").unwrap();
}

/// Assigns the syntactic question type of English question text.
pub struct QuestionTyper {
    stemmer: Stemmer,
    /// Stems of [POLAR_LEADS], produced by the same stemmer that stems the
    /// input, so both sides of the comparison collapse identically.
    polar_stems: HashSet<String>,
}

impl Default for QuestionTyper {
    fn default() -> Self {
        let stemmer = Stemmer::create(Algorithm::English);
        let polar_stems = POLAR_LEADS
            .iter()
            .map(|lead| stemmer.stem(lead).into_owned())
            .collect();
        Self {
            stemmer,
            polar_stems,
        }
    }
}

impl QuestionTyper {
    /// At most one tag, first matching rule wins.
    pub fn tag(&self, text: &str) -> Option<QuestionType> {
        let lower = text.to_lowercase();

        if self.starts_with_polar_lead(&lower) {
            Some(QuestionType::Polar)
        } else if WH_WORD.is_match(&lower) {
            Some(QuestionType::WhQuestion)
        } else if ALTERNATIVE.is_match(&lower) {
            Some(QuestionType::Alternative)
        } else if CONDITIONAL.is_match(&lower) {
            Some(QuestionType::Conditional)
        } else {
            None
        }
    }

    /// Stems the leading token and looks it up in the stemmed lead set.
    ///
    /// Contracted leads keep their auxiliary part: "can't ..." counts as
    /// "can", while "couldn't" does not reduce to "could" and falls through
    /// to the later rules.
    fn starts_with_polar_lead(&self, lower: &str) -> bool {
        let first = match lower.split_whitespace().next() {
            Some(token) => token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''),
            None => return false,
        };
        if first.is_empty() {
            return false;
        }

        if self.is_polar_stem(first) {
            return true;
        }

        // token-boundary behavior for contractions: match the part before
        // the apostrophe on its own
        match first.split('\'').next() {
            Some(head) if head != first && !head.is_empty() => self.is_polar_stem(head),
            _ => false,
        }
    }

    fn is_polar_stem(&self, token: &str) -> bool {
        self.polar_stems
            .contains(self.stemmer.stem(token).as_ref())
    }
}

impl Annotate for QuestionTyper {
    fn annotate(&self, pair: &mut AnnotatedPair) {
        pair.feature2 = self.tag(&pair.target).into_iter().collect();
    }
}
