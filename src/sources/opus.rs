/*! OPUS NLLB corpus access.

Knows where the monolingual dumps live, how aligned pair files are named,
and how to pull a bounded, index-preserving snapshot of a dump: lines are
streamed through a gzip decoder straight off the response body, and each
non-empty line is stored under its original ordinal. Snapshots are cached
as one JSON map per language.
!*/
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use log::{error, info};
use serde::Serialize;

use crate::error::Error;
use crate::io::writer::write_json;
use crate::lang::Lang;

const NLLB_BASE_URL: &str = "https://object.pouta.csc.fi/OPUS-NLLB/v1/mono";

/// URL of the gzipped monolingual dump for `lang`.
pub fn mono_url(lang: Lang) -> String {
    format!("{}/{}.txt.gz", NLLB_BASE_URL, lang.code())
}

/// Basename of the aligned pair files for a mined language
/// (`<basename>.<lang>` / `<basename>.en`).
pub fn pair_basename(lang: Lang) -> Result<&'static str, Error> {
    match lang {
        Lang::Af => Ok("NLLB.af-en"),
        Lang::Ar => Ok("NLLB.ar-en"),
        Lang::Id => Ok("NLLB.en-id"),
        Lang::Mr => Ok("NLLB.en-mr"),
        // English is the reference side of every pair file
        Lang::En => Err(Error::UnknownLang("en".to_string())),
    }
}

/// Cache file name of a language snapshot.
pub fn snapshot_filename(lang: Lang) -> String {
    format!("indexed_lines_{}.json", lang.code())
}

/// Holds the http client that will make the requests
/// and the per-dump line budget.
pub struct Downloader {
    client: reqwest::blocking::Client,
    num_lines: usize,
}

impl Downloader {
    pub fn new(num_lines: usize) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            num_lines,
        }
    }

    /// Streams the dump for `lang`, keeping at most `num_lines` leading
    /// lines. Empty lines keep their ordinal but are not stored.
    pub fn fetch_indexed(&self, lang: Lang) -> Result<BTreeMap<usize, String>, Error> {
        let url = mono_url(lang);
        info!("[{}] downloading {}", lang, url);

        let response = self.client.get(&url).send()?.error_for_status()?;
        let reader = BufReader::new(GzDecoder::new(response));

        let mut indexed = BTreeMap::new();
        for (index, line) in reader.lines().take(self.num_lines).enumerate() {
            let line = line?;
            let text = line.trim();
            if !text.is_empty() {
                indexed.insert(index, text.to_owned());
            }
        }

        info!("[{}] kept {} non-empty lines", lang, indexed.len());
        Ok(indexed)
    }

    /// Downloads and caches a snapshot per language, sequentially.
    /// A failing language is logged and does not stop the rest.
    pub fn download_all(&self, dst: &Path, langs: &[Lang]) -> Vec<Result<PathBuf, Error>> {
        langs
            .iter()
            .map(|lang| self.download_one(dst, *lang))
            .inspect(|result| {
                if let Err(e) = result {
                    error!("download failed: {}", e);
                }
            })
            .collect()
    }

    fn download_one(&self, dst: &Path, lang: Lang) -> Result<PathBuf, Error> {
        let indexed = self.fetch_indexed(lang)?;
        let path = dst.join(snapshot_filename(lang));
        write_json(&path, &indexed)?;
        info!("[{}] saved snapshot to {:?}", lang, path);
        Ok(path)
    }
}

/// A question located inside a raw alignment file.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct QuestionLocation {
    pub question: String,
    pub indices: Vec<usize>,
}

/// Every line index of `path` whose line contains `needle`.
pub fn find_line_indices(needle: &str, path: &Path) -> Result<Vec<usize>, Error> {
    let file = std::fs::File::open(path)?;
    let mut indices = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        if line?.contains(needle) {
            indices.push(index);
        }
    }
    Ok(indices)
}

/// Looks up every question of an extraction map inside an alignment file.
/// Questions that never occur are left out of the result.
pub fn locate_questions(
    questions: &BTreeMap<usize, String>,
    alignment: &Path,
) -> Result<BTreeMap<usize, QuestionLocation>, Error> {
    let mut located = BTreeMap::new();
    for (id, question) in questions {
        let indices = find_line_indices(question, alignment)?;
        if !indices.is_empty() {
            located.insert(
                *id,
                QuestionLocation {
                    question: question.clone(),
                    indices,
                },
            );
        }
    }
    Ok(located)
}
