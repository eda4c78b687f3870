//! Question-pair mining over a pre-downloaded corpus snapshot.
//!
//! One run scans every source language of the snapshot concurrently:
//! for each language, the aligned `<basename>.<lang>` / `<basename>.en`
//! files are read up to the line limit, questions are detected and paired,
//! and the pairs are written as a per-language JSON map. A combined map
//! over all successful languages is written at the end.
//!
//! A language failing (missing file, misaligned corpus) is logged and does
//! not abort its siblings.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{error, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::filtering::QuestionDetector;
use crate::io::reader::read_lines;
use crate::io::writer::{pairs_to_map, write_json, PairMap};
use crate::lang::{Lang, SOURCE_LANGS};
use crate::pipelines::pipeline::Pipeline;
use crate::pipelines::types::QuestionPair;
use crate::pipelines::PairExtractor;
use crate::sources::opus::pair_basename;

pub struct MinePipeline {
    src: PathBuf,
    dst: PathBuf,
    limit: usize,
}

impl MinePipeline {
    pub fn new(src: PathBuf, dst: PathBuf, limit: usize) -> Self {
        Self { src, dst, limit }
    }

    fn mine_lang(&self, lang: Lang) -> Result<Vec<QuestionPair>, Error> {
        let base = pair_basename(lang)?;
        let source_path = self.src.join(format!("{}.{}", base, lang.code()));
        let target_path = self.src.join(format!("{}.en", base));

        info!("[{}] reading {:?}", lang, source_path);
        let source_lines = read_lines(&source_path, self.limit)?;
        let target_lines = read_lines(&target_path, self.limit)?;

        let detector = QuestionDetector::default();
        let extractor = PairExtractor::new(&detector);
        let pairs = extractor.extract(&source_lines, &target_lines, lang, self.limit)?;

        info!(
            "[{}] {} question pairs from {} lines",
            lang,
            pairs.len(),
            source_lines.len()
        );
        Ok(pairs)
    }
}

impl Pipeline<Vec<QuestionPair>> for MinePipeline {
    /// Mines every source language, writes the per-language and combined
    /// JSON maps, and returns all pairs ordered by language then index.
    fn run(&self) -> Result<Vec<QuestionPair>, Error> {
        std::fs::create_dir_all(&self.dst)?;

        let results: Vec<(Lang, Result<Vec<QuestionPair>, Error>)> = SOURCE_LANGS
            .par_iter()
            .map(|lang| (*lang, self.mine_lang(*lang)))
            .collect();

        let mut combined: BTreeMap<Lang, PairMap> = BTreeMap::new();
        let mut all_pairs = Vec::new();
        for (lang, result) in results {
            match result {
                Ok(pairs) => {
                    let map = pairs_to_map(&pairs);
                    let path = self.dst.join(question_pairs_filename(lang));
                    write_json(&path, &map)?;
                    info!("[{}] saved {} pairs to {:?}", lang, map.len(), path);
                    combined.insert(lang, map);
                    all_pairs.extend(pairs);
                }
                Err(e) => {
                    // one language failing must not sink the others
                    error!("[{}] mining failed: {}", lang, e);
                }
            }
        }

        let combined_path = self.dst.join("all_question_pairs.json");
        write_json(&combined_path, &combined)?;
        info!(
            "saved {} languages ({} pairs) to {:?}",
            combined.len(),
            all_pairs.len(),
            combined_path
        );

        Ok(all_pairs)
    }
}

/// Per-language artifact name.
pub fn question_pairs_filename(lang: Lang) -> String {
    format!("question_pairs_{}.json", lang.code())
}

/// Convenience used by the `annotate` subcommand: load every per-language
/// pair file present under `src`, skipping (with a log line) the missing
/// ones.
pub fn load_mined_pairs(src: &Path) -> Result<Vec<QuestionPair>, Error> {
    let mut pairs = Vec::new();
    for lang in SOURCE_LANGS {
        let path = src.join(question_pairs_filename(lang));
        if !path.exists() {
            error!("[{}] no pair file at {:?}, skipping", lang, path);
            continue;
        }
        pairs.extend(crate::io::writer::read_pairs_json(&path, lang)?);
    }
    Ok(pairs)
}
