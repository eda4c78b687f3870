//! Line-level filtering: question detection rules per language.
mod filter;
pub mod question;

pub use filter::{Filter, FilterMut};
pub use question::{QuestionDetector, Rule, RuleSet};
