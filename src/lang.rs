//! Language codes.
//!
//! The corpus covers a closed set of languages: four mined source languages
//! and English, which only ever appears on the reference side of a pair.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Two-letter language codes of the supported corpora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Afrikaans
    Af,
    /// Arabic
    Ar,
    /// Indonesian
    Id,
    /// Marathi
    Mr,
    /// English (reference side only)
    En,
}

/// Languages that get mined for questions.
/// English is excluded: it is the reference side of every pair.
pub const SOURCE_LANGS: [Lang; 4] = [Lang::Af, Lang::Ar, Lang::Id, Lang::Mr];

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Af => "af",
            Lang::Ar => "ar",
            Lang::Id => "id",
            Lang::Mr => "mr",
            Lang::En => "en",
        }
    }

    /// All supported languages, reference side included.
    pub fn all() -> [Lang; 5] {
        [Lang::Af, Lang::Ar, Lang::Id, Lang::Mr, Lang::En]
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "af" => Ok(Lang::Af),
            "ar" => Ok(Lang::Ar),
            "id" => Ok(Lang::Id),
            "mr" => Ok(Lang::Mr),
            "en" => Ok(Lang::En),
            other => Err(Error::UnknownLang(other.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
