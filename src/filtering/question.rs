//! Per-language question detection.
//!
//! Each language gets an ordered list of [Rule]s, evaluated first-match-wins.
//! A rule match only yields a *candidate*: for most languages the candidate
//! is confirmed by terminal question punctuation, while Marathi accepts any
//! candidate as-is since Marathi questions are frequently written without a
//! question mark. That policy lives in the rule table ([RuleSet::confirm]),
//! not in control flow, so adding a language means adding a table entry.
use std::collections::HashMap;

use lazy_static::lazy_static;

use super::Filter;
use crate::error::Error;
use crate::lang::Lang;

/// Latin and Arabic question marks.
const QUESTION_MARKS: [char; 2] = ['?', '؟'];

/// A single pattern predicate over a line of text.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Line starts with one of the tokens (case-insensitive, token-bounded).
    /// Tokens may span several words ("yang mana", "aan wie").
    LeadWord(&'static [&'static str]),
    /// Line ends with one of the particles (no boundary check).
    TrailingParticle(&'static [&'static str]),
    /// Line ends with `?` or `؟`.
    TerminalPunctuation,
}

impl Rule {
    fn matches(&self, text: &str) -> bool {
        match self {
            Rule::LeadWord(words) => words.iter().any(|w| starts_with_token(text, w)),
            Rule::TrailingParticle(particles) => {
                let trimmed = text.trim_end();
                particles.iter().any(|p| trimmed.ends_with(p))
            }
            Rule::TerminalPunctuation => ends_with_question_mark(text),
        }
    }
}

/// Case-insensitive "starts with `token` followed by a non-alphanumeric
/// character or end of line".
fn starts_with_token(text: &str, token: &str) -> bool {
    let mut text_chars = text.chars().flat_map(char::to_lowercase);
    for expected in token.chars().flat_map(char::to_lowercase) {
        match text_chars.next() {
            Some(c) if c == expected => continue,
            _ => return false,
        }
    }
    match text_chars.next() {
        Some(c) => !c.is_alphanumeric(),
        None => true,
    }
}

fn ends_with_question_mark(text: &str) -> bool {
    text.trim_end()
        .chars()
        .last()
        .map(|c| QUESTION_MARKS.contains(&c))
        .unwrap_or(false)
}

/// Ordered rules plus the candidate-confirmation policy for one language.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    /// When false, any candidate counts as a question even without
    /// terminal punctuation (the Marathi case).
    confirm: bool,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>, confirm: bool) -> Self {
        Self { rules, confirm }
    }
}

impl Filter<&str> for RuleSet {
    fn detect(&self, line: &str) -> bool {
        if line.is_empty() {
            return false;
        }

        // candidate step: first matching rule wins
        let candidate = self.rules.iter().any(|rule| rule.matches(line));

        // confirmation step
        match (candidate, self.confirm) {
            (false, _) => false,
            (true, false) => true,
            (true, true) => ends_with_question_mark(line),
        }
    }
}

lazy_static! {
    /// Per-language rule tables. Lead-word vocabularies follow the
    /// interrogatives and sentence-initial auxiliaries of each language.
    static ref RULES: HashMap<Lang, RuleSet> = {
        let mut m = HashMap::new();

        m.insert(
            Lang::En,
            RuleSet::new(
                vec![
                    Rule::LeadWord(&[
                        "who", "what", "where", "when", "why", "how", "which", "whose", "whom",
                    ]),
                    Rule::LeadWord(&[
                        "do", "does", "did", "is", "are", "was", "were", "have", "has", "had",
                        "can", "could", "should", "would", "will",
                    ]),
                    Rule::TerminalPunctuation,
                ],
                true,
            ),
        );

        m.insert(
            Lang::Mr,
            RuleSet::new(
                vec![
                    Rule::LeadWord(&[
                        "कोण", "काय", "कुठे", "केव्हा", "का", "कसे", "कोणता", "कोणाचे", "कोणाला",
                    ]),
                    Rule::TerminalPunctuation,
                    Rule::TrailingParticle(&["का", "काय"]),
                ],
                false,
            ),
        );

        m.insert(
            Lang::Ar,
            RuleSet::new(
                vec![
                    Rule::LeadWord(&[
                        "من", "ما", "ماذا", "أين", "متى", "لماذا", "كيف", "أي", "لمن", "هل",
                    ]),
                    Rule::TerminalPunctuation,
                ],
                true,
            ),
        );

        m.insert(
            Lang::Id,
            RuleSet::new(
                vec![
                    Rule::LeadWord(&[
                        "siapa", "apa", "dimana", "kapan", "mengapa", "bagaimana", "yang mana",
                        "kepada siapa",
                    ]),
                    Rule::LeadWord(&["apakah"]),
                    Rule::TerminalPunctuation,
                ],
                true,
            ),
        );

        m.insert(
            Lang::Af,
            RuleSet::new(
                vec![
                    Rule::LeadWord(&[
                        "wie", "wat", "waar", "wanneer", "hoekom", "hoe", "watter", "aan wie",
                    ]),
                    Rule::LeadWord(&["is", "het", "sal", "kan", "moet", "wil", "mag"]),
                    Rule::TerminalPunctuation,
                ],
                true,
            ),
        );

        m
    };
}

/// Classifies single lines as question/non-question per language.
///
/// Pure: no side effects, no state beyond the rule tables.
pub struct QuestionDetector {
    rules: HashMap<Lang, RuleSet>,
}

impl QuestionDetector {
    /// Detector over a custom rule table. Languages absent from the table
    /// are simply never detected as questions.
    pub fn new(rules: HashMap<Lang, RuleSet>) -> Self {
        Self { rules }
    }

    /// Rule set for `lang`, as an error when the language is mandatory.
    pub fn rules_for(&self, lang: Lang) -> Result<&RuleSet, Error> {
        self.rules
            .get(&lang)
            .ok_or_else(|| Error::UnknownLang(lang.code().to_string()))
    }

    /// `true` if `line` reads as a question in `lang`.
    ///
    /// Empty lines and languages without a rule table yield `false`,
    /// never an error.
    pub fn is_question(&self, line: &str, lang: Lang) -> bool {
        match self.rules.get(&lang) {
            Some(ruleset) => ruleset.detect(line),
            None => false,
        }
    }
}

impl Default for QuestionDetector {
    fn default() -> Self {
        Self {
            rules: RULES.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_always_false() {
        let d = QuestionDetector::default();
        for lang in Lang::all() {
            assert_eq!(d.is_question("", lang), false);
        }
    }

    #[test]
    fn test_lead_word_with_punctuation() {
        let d = QuestionDetector::default();
        assert_eq!(d.is_question("Wat is jou naam?", Lang::Af), true);
    }

    #[test]
    fn test_lead_word_without_punctuation() {
        let d = QuestionDetector::default();
        assert_eq!(d.is_question("Wat is jou naam", Lang::Af), false);
    }

    #[test]
    fn test_lead_word_case_insensitive() {
        let d = QuestionDetector::default();
        assert_eq!(d.is_question("wat is jou naam?", Lang::Af), true);
        assert_eq!(d.is_question("APAKAH ini benar?", Lang::Id), true);
    }

    #[test]
    fn test_lead_word_is_token_bounded() {
        let d = QuestionDetector::default();
        // "Watter" is a lead word itself, but "Waterval" must not match "Wat"
        assert_eq!(d.is_question("Waterval is mooi?", Lang::Af), true); // punctuation rule
        assert_eq!(d.is_question("Waterval is mooi", Lang::Af), false);
    }

    #[test]
    fn test_punctuation_only() {
        let d = QuestionDetector::default();
        assert_eq!(d.is_question("Jy is moeg?", Lang::Af), true);
        assert_eq!(d.is_question("هذا صحيح؟", Lang::Ar), true);
    }

    #[test]
    fn test_marathi_without_punctuation() {
        let d = QuestionDetector::default();
        // leading interrogative, no question mark: still a question in Marathi
        assert_eq!(d.is_question("काय झाले", Lang::Mr), true);
        // trailing particle, no question mark
        assert_eq!(d.is_question("तू येणार का", Lang::Mr), true);
    }

    #[test]
    fn test_marathi_asymmetry() {
        let d = QuestionDetector::default();
        // the same leading-interrogative-no-punctuation shape is rejected
        // everywhere else
        assert_eq!(d.is_question("Wat is dit", Lang::Af), false);
        assert_eq!(d.is_question("Apakah ini benar", Lang::Id), false);
    }

    #[test]
    fn test_arabic_question_mark() {
        let d = QuestionDetector::default();
        assert_eq!(d.is_question("هل أنت بخير؟", Lang::Ar), true);
        assert_eq!(d.is_question("هل أنت بخير", Lang::Ar), false);
    }

    #[test]
    fn test_non_question() {
        let d = QuestionDetector::default();
        assert_eq!(d.is_question("Ek is baie moeg vandag.", Lang::Af), false);
        assert_eq!(d.is_question("Saya pergi ke pasar.", Lang::Id), false);
    }

    #[test]
    fn test_multiword_lead() {
        let d = QuestionDetector::default();
        assert_eq!(d.is_question("Yang mana yang benar?", Lang::Id), true);
        assert_eq!(d.is_question("Aan wie behoort dit?", Lang::Af), true);
    }

    #[test]
    fn test_rules_for() {
        let d = QuestionDetector::default();
        assert!(d.rules_for(Lang::Mr).is_ok());
    }

    #[test]
    fn test_language_without_rules_is_never_a_question() {
        let mut rules = HashMap::new();
        rules.insert(
            Lang::Af,
            RuleSet::new(vec![Rule::TerminalPunctuation], true),
        );
        let d = QuestionDetector::new(rules);

        assert_eq!(d.is_question("Apakah ini benar?", Lang::Id), false);
        assert!(d.rules_for(Lang::Id).is_err());
    }
}
