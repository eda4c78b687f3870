//! Information-type tagging.
//!
//! Six independent boolean rules over the lowercased English target text.
//! Rules do not short-circuit each other: a pair collects every tag that
//! matches, so the result holds 0 to 6 tags.
use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::annotate::Annotate;
use crate::pipelines::types::{AnnotatedPair, InfoType};

lazy_static! {
    static ref MODALITY: Regex =
        Regex::new(r"\b(?:can|could|should|would|will|may|might|must)\b").unwrap();
    static ref QUANTIFICATION: Regex =
        Regex::new(r"\b(?:how much|how many|some|all|any|few|many|several|most|none)\b").unwrap();
    static ref COMPARISON: Regex = Regex::new(
        r"\b(?:more|less|better|worse|bigger|smaller|than|as|equal|similar|different)\b"
    )
    .unwrap();
    /// An "it('s) ..." span later followed by a cleft connector. Overlaps
    /// with the that-cleft scan on purpose: both tags can fire on one text.
    static ref CLEFT_WH: Regex =
        Regex::new(r"\bit'?s?\b.*\b(?:that|who|which|where|when|why|how)\b").unwrap();
    static ref NEGATION: Regex =
        Regex::new(r"\b(?:not|no|never|nobody|nothing|nowhere|neither|nor)\b|n't\b").unwrap();
}

/// Upper bound on the clefted constituent length, in words.
const CLEFT_SPAN: usize = 5;

/// "It is X that ..." with a short constituent X.
///
/// The constituent must not start with "not", may start with "the", and
/// must not itself contain the pivot word. Needs a lookahead to express as
/// a single pattern, so it is a token scan instead.
fn has_that_cleft(lower: &str) -> bool {
    let words: Vec<&str> = lower.unicode_words().collect();

    let start = match words.as_slice() {
        ["it's", ..] => 1,
        ["it", copula, ..] if matches!(*copula, "is" | "was" | "were") => 2,
        _ => return false,
    };

    if words.get(start) == Some(&"not") {
        return false;
    }

    let constituent = if words.get(start) == Some(&"the") {
        start + 1
    } else {
        start
    };

    // at least one constituent word, at most CLEFT_SPAN, then the pivot
    for (span, word) in words.iter().skip(constituent).enumerate() {
        if *word == "that" {
            return span >= 1;
        }
        if span + 1 > CLEFT_SPAN {
            return false;
        }
    }
    false
}

/// Tags the semantic phrasing properties of English question text.
#[derive(Default)]
pub struct InformationTyper;

impl InformationTyper {
    pub fn tags(&self, text: &str) -> Vec<InfoType> {
        let lower = text.to_lowercase();
        let mut tags = Vec::new();

        if MODALITY.is_match(&lower) {
            tags.push(InfoType::Modality);
        }
        if QUANTIFICATION.is_match(&lower) {
            tags.push(InfoType::Quantification);
        }
        if COMPARISON.is_match(&lower) {
            tags.push(InfoType::Comparison);
        }
        if has_that_cleft(&lower) {
            tags.push(InfoType::CleftThat);
        }
        if CLEFT_WH.is_match(&lower) {
            tags.push(InfoType::CleftWh);
        }
        if NEGATION.is_match(&lower) {
            tags.push(InfoType::Negation);
        }

        tags
    }
}

impl Annotate for InformationTyper {
    fn annotate(&self, pair: &mut AnnotatedPair) {
        pair.feature1 = self.tags(&pair.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<InfoType> {
        InformationTyper::default().tags(text)
    }

    #[test]
    fn test_modality() {
        assert_eq!(tags("Could he come?"), vec![InfoType::Modality]);
        assert!(tags("Must we leave now?").contains(&InfoType::Modality));
    }

    #[test]
    fn test_quantification() {
        assert!(tags("How many people were there?").contains(&InfoType::Quantification));
        assert!(tags("Did you eat some bread?").contains(&InfoType::Quantification));
        // "none" but not "nonetheless"
        assert!(!tags("He came nonetheless?").contains(&InfoType::Quantification));
    }

    #[test]
    fn test_comparison() {
        assert!(tags("Is this bigger than that one?").contains(&InfoType::Comparison));
        assert!(tags("Is it similar?").contains(&InfoType::Comparison));
    }

    #[test]
    fn test_negation_whole_word() {
        assert!(tags("Why did nobody come?").contains(&InfoType::Negation));
        assert!(tags("Don't you agree?").contains(&InfoType::Negation));
        // "no" must not fire inside "november"
        assert!(!tags("Is november cold?").contains(&InfoType::Negation));
    }

    #[test]
    fn test_that_cleft() {
        assert!(tags("It is John that broke the window?").contains(&InfoType::CleftThat));
        assert!(tags("It was the dog that barked?").contains(&InfoType::CleftThat));
        assert!(tags("It's money that matters?").contains(&InfoType::CleftThat));
    }

    #[test]
    fn test_that_cleft_rejections() {
        // negated copula
        assert!(!tags("It is not John that broke it?").contains(&InfoType::CleftThat));
        // pivot immediately after the copula: empty constituent
        assert!(!tags("It is that simple?").contains(&InfoType::CleftThat));
        // constituent longer than the window
        assert!(!tags("It is the very old man from the village that spoke?")
            .contains(&InfoType::CleftThat));
        // no leading "it is"
        assert!(!tags("She said that it works?").contains(&InfoType::CleftThat));
    }

    #[test]
    fn test_wh_cleft() {
        assert!(tags("It's hard to see who did this?").contains(&InfoType::CleftWh));
        assert!(tags("Is it clear which one you want?").contains(&InfoType::CleftWh));
    }

    #[test]
    fn test_both_clefts_can_fire() {
        let t = tags("It is John that broke the window?");
        assert!(t.contains(&InfoType::CleftThat));
        assert!(t.contains(&InfoType::CleftWh));
    }

    #[test]
    fn test_multiple_tags() {
        let t = tags("Could you tell me how many apples there are?");
        assert_eq!(t, vec![InfoType::Modality, InfoType::Quantification]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(tags("the weather today.").is_empty());
    }
}
