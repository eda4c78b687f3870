//! Error enum
use std::fmt;

use crate::lang::Lang;

/// Index-aligned read that fell off the end of the reference corpus.
///
/// Carries both effective lengths so that the mismatch is diagnosable
/// from the error alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentError {
    pub lang: Lang,
    pub index: usize,
    pub source_len: usize,
    pub target_len: usize,
}

impl fmt::Display for AlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] no aligned line at index {} (source has {} lines, target has {})",
            self.lang, self.index, self.source_len, self.target_len
        )
    }
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    UnknownLang(String),
    Alignment(AlignmentError),
    Custom(String),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Request(reqwest::Error),
    Pdf(lopdf::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<AlignmentError> for Error {
    fn from(e: AlignmentError) -> Error {
        Error::Alignment(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Request(e)
    }
}

impl From<lopdf::Error> for Error {
    fn from(e: lopdf::Error) -> Error {
        Error::Pdf(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::UnknownLang(l) => write!(f, "unknown language code: {}", l),
            Error::Alignment(e) => write!(f, "{}", e),
            Error::Custom(s) => write!(f, "{}", s),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Request(e) => write!(f, "request error: {}", e),
            Error::Pdf(e) => write!(f, "pdf error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
