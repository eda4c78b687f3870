/*! Pair annotators.

Transforms pairs by computing linguistic features from the target text.

!*/
mod annotate;
mod information_type;
mod question_type;

pub use annotate::{Annotate, Annotator};
pub use information_type::InformationTyper;
pub use question_type::QuestionTyper;
