//! Pipelines.
//!
//! The mining pipeline turns raw corpus snapshots into question pairs;
//! the module provides a light [pipeline::Pipeline] trait that enables easy
//! and flexible pipeline creation.
pub mod extract;
pub mod mine;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod types;

pub use extract::PairExtractor;
pub use mine::MinePipeline;
pub use pipeline::Pipeline;
pub use types::{AnnotatedPair, InfoType, QuestionPair, QuestionType};
