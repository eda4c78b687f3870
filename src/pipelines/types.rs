//! Pair records and feature tags.
use serde::{Deserialize, Serialize};

use crate::lang::Lang;

/// Information-type tags: semantic properties of a question's phrasing.
///
/// Not mutually exclusive; a pair can carry up to all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoType {
    Modality,
    Quantification,
    Comparison,
    CleftThat,
    CleftWh,
    Negation,
}

impl InfoType {
    pub fn label(&self) -> &'static str {
        match self {
            InfoType::Modality => "modality",
            InfoType::Quantification => "quantification",
            InfoType::Comparison => "comparison",
            InfoType::CleftThat => "cleft_that",
            InfoType::CleftWh => "cleft_wh",
            InfoType::Negation => "negation",
        }
    }
}

/// Question-type tags: the syntactic form of the question.
///
/// Mutually exclusive; the typer assigns at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Polar,
    #[serde(rename = "wh-question")]
    WhQuestion,
    Alternative,
    Conditional,
}

impl QuestionType {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Polar => "polar",
            QuestionType::WhQuestion => "wh-question",
            QuestionType::Alternative => "alternative",
            QuestionType::Conditional => "conditional",
        }
    }
}

/// A detected source-language question and its aligned English line.
///
/// `index` is the ordinal position in the original corpus file and is the
/// join key between the two sides; it survives every downstream stage
/// untouched. `target` may be empty when the reference line at that index
/// is blank (data quality, not an error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPair {
    pub index: usize,
    pub source: String,
    pub target: String,
    pub lang: Lang,
}

/// A [QuestionPair] plus its two feature sets.
///
/// Empty feature vectors mean "no rule matched", which is a terminal state:
/// pairs are annotated exactly once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedPair {
    pub index: usize,
    pub source: String,
    pub target: String,
    pub lang: Lang,
    #[serde(default)]
    pub feature1: Vec<InfoType>,
    #[serde(default)]
    pub feature2: Vec<QuestionType>,
}

impl From<QuestionPair> for AnnotatedPair {
    fn from(p: QuestionPair) -> Self {
        Self {
            index: p.index,
            source: p.source,
            target: p.target,
            lang: p.lang,
            feature1: Vec::new(),
            feature2: Vec::new(),
        }
    }
}

impl AnnotatedPair {
    /// Composite deduplication key: source and target text concatenated.
    pub fn combined_key(&self) -> String {
        let mut key = String::with_capacity(self.source.len() + self.target.len());
        key.push_str(&self.source);
        key.push_str(&self.target);
        key
    }

    /// Fully tagged on both feature axes.
    pub fn fully_annotated(&self) -> bool {
        !self.feature1.is_empty() && !self.feature2.is_empty()
    }
}
