//! Dataset statistics.
//!
//! Counts pairs and annotation coverage per language, plus how often every
//! tag fires, overall and per language. Diagnostic output only.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::lang::Lang;
use crate::pipelines::types::AnnotatedPair;

#[derive(Debug, Default, Serialize)]
pub struct LangStats {
    pub pairs: usize,
    pub fully_annotated: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct TagCount {
    pub total: usize,
    pub per_lang: BTreeMap<Lang, usize>,
}

#[derive(Debug, Default, Serialize)]
pub struct CorpusReport {
    pub languages: BTreeMap<Lang, LangStats>,
    pub overall: LangStats,
    pub tags: BTreeMap<&'static str, TagCount>,
}

impl CorpusReport {
    pub fn from_pairs(pairs: &[AnnotatedPair]) -> Self {
        let mut report = CorpusReport::default();

        for pair in pairs {
            let lang_stats = report.languages.entry(pair.lang).or_default();
            lang_stats.pairs += 1;
            report.overall.pairs += 1;

            if pair.fully_annotated() {
                lang_stats.fully_annotated += 1;
                report.overall.fully_annotated += 1;
            }

            let labels = pair
                .feature1
                .iter()
                .map(|t| t.label())
                .chain(pair.feature2.iter().map(|t| t.label()));
            for label in labels {
                let count = report.tags.entry(label).or_default();
                count.total += 1;
                *count.per_lang.entry(pair.lang).or_insert(0) += 1;
            }
        }

        report
    }
}
