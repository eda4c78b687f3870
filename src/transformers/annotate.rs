//! Annotate trait
use rayon::prelude::*;

use super::information_type::InformationTyper;
use super::question_type::QuestionTyper;
use crate::pipelines::types::AnnotatedPair;

/// Annotations provide linguistic information about a pair's target text.
pub trait Annotate {
    fn annotate(&self, pair: &mut AnnotatedPair);
}

/// Annotator enables annotation chaining, adding multiple annotators and
/// doing the annotation process in one step.
#[derive(Default)]
pub struct Annotator(Vec<Box<dyn Annotate + Sync>>);

impl Annotator {
    pub fn add(&mut self, annotator: Box<dyn Annotate + Sync>) -> &mut Annotator {
        self.0.push(annotator);
        self
    }

    /// Both feature axes: information types then question type.
    pub fn with_defaults() -> Self {
        let mut annotator = Self::default();
        annotator
            .add(Box::new(InformationTyper::default()))
            .add(Box::new(QuestionTyper::default()));
        annotator
    }

    /// Annotates every pair in place.
    ///
    /// Each pair is annotated independently of the others, so the work is
    /// fanned out; positions in the slice (and thus output order) are
    /// untouched.
    pub fn annotate_all(&self, pairs: &mut [AnnotatedPair]) {
        pairs.par_iter_mut().for_each(|pair| self.annotate(pair));
    }
}

impl Annotate for Annotator {
    fn annotate(&self, pair: &mut AnnotatedPair) {
        for annotator in &self.0 {
            annotator.annotate(pair);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;
    use crate::pipelines::types::{InfoType, QuestionPair, QuestionType};

    fn pair(target: &str) -> AnnotatedPair {
        AnnotatedPair::from(QuestionPair {
            index: 0,
            source: "x?".to_string(),
            target: target.to_string(),
            lang: Lang::Af,
        })
    }

    #[test]
    fn test_chain_fills_both_features() {
        let annotator = Annotator::with_defaults();
        let mut p = pair("Could you tell me how many apples there are?");
        annotator.annotate(&mut p);

        assert!(p.feature1.contains(&InfoType::Modality));
        assert!(p.feature1.contains(&InfoType::Quantification));
        // "could" leads, so the stem-based polar rule fires before the
        // wh-word rule ever gets a look
        assert_eq!(p.feature2, vec![QuestionType::Polar]);
    }

    #[test]
    fn test_annotate_all_keeps_order() {
        let annotator = Annotator::with_defaults();
        let mut pairs = vec![pair("Who is there?"), pair("Is it raining?")];
        annotator.annotate_all(&mut pairs);

        assert_eq!(pairs[0].feature2, vec![QuestionType::WhQuestion]);
        assert_eq!(pairs[1].feature2, vec![QuestionType::Polar]);
    }

    #[test]
    fn test_no_rule_matched_is_empty() {
        let annotator = Annotator::with_defaults();
        let mut p = pair("the weather today.");
        annotator.annotate(&mut p);

        assert!(p.feature1.is_empty());
        assert!(p.feature2.is_empty());
    }
}
