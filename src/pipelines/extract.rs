//! Question-pair extraction over index-aligned line sequences.
use log::debug;

use crate::error::{AlignmentError, Error};
use crate::filtering::QuestionDetector;
use crate::lang::Lang;
use crate::pipelines::types::QuestionPair;

/// Scans a source-language corpus against its index-aligned English
/// reference and keeps the lines the detector flags as questions.
pub struct PairExtractor<'a> {
    detector: &'a QuestionDetector,
}

impl<'a> PairExtractor<'a> {
    pub fn new(detector: &'a QuestionDetector) -> Self {
        Self { detector }
    }

    /// Emits one [QuestionPair] per detected question, in ascending index
    /// order. At most `limit` leading lines of each side are inspected.
    ///
    /// A question whose index has no line on the target side is an
    /// [AlignmentError]: substituting an empty string there would corrupt
    /// the pair's semantics, so the run fails instead.
    pub fn extract(
        &self,
        source_lines: &[String],
        target_lines: &[String],
        lang: Lang,
        limit: usize,
    ) -> Result<Vec<QuestionPair>, Error> {
        let source = &source_lines[..source_lines.len().min(limit)];
        let target = &target_lines[..target_lines.len().min(limit)];

        let mut pairs = Vec::new();
        for (index, line) in source.iter().enumerate() {
            if !self.detector.is_question(line, lang) {
                continue;
            }

            let aligned = target.get(index).ok_or_else(|| {
                Error::Alignment(AlignmentError {
                    lang,
                    index,
                    source_len: source.len(),
                    target_len: target.len(),
                })
            })?;

            pairs.push(QuestionPair {
                index,
                source: line.clone(),
                target: aligned.clone(),
                lang,
            });
        }

        debug!(
            "[{}] {} questions in {} lines",
            lang,
            pairs.len(),
            source.len()
        );
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_extract_keeps_indices() {
        let detector = QuestionDetector::default();
        let extractor = PairExtractor::new(&detector);

        let source = lines(&[
            "Ek is moeg.",
            "Wat is jou naam?",
            "Die son skyn.",
            "Waar woon jy?",
        ]);
        let target = lines(&[
            "I am tired.",
            "What is your name?",
            "The sun is shining.",
            "Where do you live?",
        ]);

        let pairs = extractor
            .extract(&source, &target, Lang::Af, 1000)
            .unwrap();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].index, 1);
        assert_eq!(pairs[0].target, "What is your name?");
        assert_eq!(pairs[1].index, 3);
        assert_eq!(pairs[1].source, "Waar woon jy?");
    }

    #[test]
    fn test_extract_respects_limit() {
        let detector = QuestionDetector::default();
        let extractor = PairExtractor::new(&detector);

        let source = lines(&["Wat is dit?", "Waar is dit?"]);
        let target = lines(&["What is this?", "Where is this?"]);

        let pairs = extractor.extract(&source, &target, Lang::Af, 1).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].index, 0);
    }

    #[test]
    fn test_extract_alignment_error() {
        let detector = QuestionDetector::default();
        let extractor = PairExtractor::new(&detector);

        let source = lines(&["Ek is moeg.", "Wat is jou naam?"]);
        let target = lines(&["I am tired."]);

        let err = extractor
            .extract(&source, &target, Lang::Af, 1000)
            .unwrap_err();
        match err {
            Error::Alignment(e) => {
                assert_eq!(e.index, 1);
                assert_eq!(e.source_len, 2);
                assert_eq!(e.target_len, 1);
            }
            other => panic!("expected alignment error, got {:?}", other),
        }
    }

    #[test]
    fn test_short_target_outside_question_indices() {
        let detector = QuestionDetector::default();
        let extractor = PairExtractor::new(&detector);

        // the target is shorter, but only at indices that hold no question
        let source = lines(&["Wat is dit?", "Ek is moeg."]);
        let target = lines(&["What is this?"]);

        let pairs = extractor
            .extract(&source, &target, Lang::Af, 1000)
            .unwrap();
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_empty_target_line_is_kept() {
        let detector = QuestionDetector::default();
        let extractor = PairExtractor::new(&detector);

        let source = lines(&["Wat is dit?"]);
        let target = lines(&[""]);

        let pairs = extractor
            .extract(&source, &target, Lang::Af, 1000)
            .unwrap();
        assert_eq!(pairs[0].target, "");
    }
}
