/*! Writing and loading of pipeline artifacts.

Two interchange formats:

- extraction output: a JSON map from corpus line index to `{source, target}`,
  one file per language plus a combined per-language map;
- the annotated dataset: a flat CSV table where the two feature columns hold
  JSON-encoded tag arrays, so the empty set round-trips as `[]` instead of
  vanishing.

Loading the CSV is lenient about feature cells: an unparseable cell is
logged and read as "no tags" rather than failing the batch, and the caller
gets the count of such rows.
!*/
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::lang::Lang;
use crate::pipelines::types::{AnnotatedPair, InfoType, QuestionPair, QuestionType};

/// `{source, target}` entry of the index-keyed extraction map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairEntry {
    pub source: String,
    pub target: String,
}

pub type PairMap = BTreeMap<usize, PairEntry>;

pub fn pairs_to_map(pairs: &[QuestionPair]) -> PairMap {
    pairs
        .iter()
        .map(|p| {
            (
                p.index,
                PairEntry {
                    source: p.source.clone(),
                    target: p.target.clone(),
                },
            )
        })
        .collect()
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}

/// Loads a per-language extraction map back into pairs, ascending by index.
pub fn read_pairs_json(path: &Path, lang: Lang) -> Result<Vec<QuestionPair>, Error> {
    let file = File::open(path)?;
    let map: PairMap = serde_json::from_reader(BufReader::new(file))?;
    Ok(map
        .into_iter()
        .map(|(index, entry)| QuestionPair {
            index,
            source: entry.source,
            target: entry.target,
            lang,
        })
        .collect())
}

/// CSV row of the annotated dataset.
#[derive(Debug, Serialize, Deserialize)]
struct DatasetRecord {
    index: usize,
    source: String,
    target: String,
    language: Lang,
    feature1: String,
    feature2: String,
}

impl From<&AnnotatedPair> for DatasetRecord {
    fn from(pair: &AnnotatedPair) -> Self {
        Self {
            index: pair.index,
            source: pair.source.clone(),
            target: pair.target.clone(),
            language: pair.lang,
            // infallible: tag enums serialize to plain strings
            feature1: serde_json::to_string(&pair.feature1).unwrap_or_default(),
            feature2: serde_json::to_string(&pair.feature2).unwrap_or_default(),
        }
    }
}

pub fn write_dataset(path: &Path, pairs: &[AnnotatedPair]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for pair in pairs {
        writer.serialize(DatasetRecord::from(pair))?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads the dataset back. Returns the pairs and how many rows had
/// feature cells that would not parse (read as empty, kept in the data).
pub fn read_dataset(path: &Path) -> Result<(Vec<AnnotatedPair>, usize), Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut pairs = Vec::new();
    let mut malformed = 0;

    for record in reader.deserialize() {
        let record: DatasetRecord = record?;

        let feature1: Vec<InfoType> = match serde_json::from_str(&record.feature1) {
            Ok(tags) => tags,
            Err(e) => {
                warn!(
                    "[{}] row {}: unreadable feature1 cell ({}), treating as untagged",
                    record.language, record.index, e
                );
                malformed += 1;
                Vec::new()
            }
        };
        let feature2: Vec<QuestionType> = match serde_json::from_str(&record.feature2) {
            Ok(tags) => tags,
            Err(e) => {
                warn!(
                    "[{}] row {}: unreadable feature2 cell ({}), treating as untagged",
                    record.language, record.index, e
                );
                malformed += 1;
                Vec::new()
            }
        };

        pairs.push(AnnotatedPair {
            index: record.index,
            source: record.source,
            target: record.target,
            lang: record.language,
            feature1,
            feature2,
        });
    }

    Ok((pairs, malformed))
}
