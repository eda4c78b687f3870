/*!
# IO utilities

Corpus line reading and pipeline-artifact saving/loading.
!*/
pub mod reader;
pub mod writer;
