/*! Dataset balancing

Three stages over the annotated table:

1. quality filter — keep rows that carry both feature sets and a question
   mark on both sides,
2. class balancing — down-sample one over-represented language to a target
   fraction of its partition, seeded for reproducibility,
3. deduplication — first occurrence wins on the source+target composite key.

Selection only: rows are kept or dropped whole, never edited.
!*/
use std::collections::BTreeMap;

use itertools::Itertools;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use runiq::filters::{DigestFilter, Filter as UniqueFilter};
use serde::Serialize;

use crate::filtering::FilterMut;
use crate::lang::Lang;
use crate::pipelines::types::AnnotatedPair;

/// Balancing parameters. Defaults match the published dataset runs:
/// Indonesian halved with seed 42.
#[derive(Debug, Clone)]
pub struct BalanceConfig {
    /// Language whose partition gets down-sampled.
    pub downsample: Lang,
    /// Fraction of that partition to keep.
    pub fraction: f64,
    pub seed: u64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            downsample: Lang::Id,
            fraction: 0.5,
            seed: 42,
        }
    }
}

/// Per-stage counts, reported but never fed back into the data path.
#[derive(Debug, Default, Serialize)]
pub struct BalanceReport {
    pub input: usize,
    pub after_filter: usize,
    pub sample_size: usize,
    pub output: usize,
    pub per_lang_in: BTreeMap<Lang, usize>,
    pub per_lang_out: BTreeMap<Lang, usize>,
}

/// First-occurrence-wins filter over the composite text key.
#[derive(Default)]
struct CombinedKeyFilter {
    inner: DigestFilter,
}

impl FilterMut<&AnnotatedPair> for CombinedKeyFilter {
    fn detect_mut(&mut self, pair: &AnnotatedPair) -> bool {
        self.inner.detect(pair.combined_key().as_bytes())
    }
}

fn contains_question_mark(text: &str) -> bool {
    text.chars().any(|c| c == '?' || c == '؟')
}

/// Fully annotated and genuinely interrogative on both sides.
fn well_formed(pair: &AnnotatedPair) -> bool {
    pair.fully_annotated()
        && contains_question_mark(&pair.source)
        && contains_question_mark(&pair.target)
}

fn count_langs(pairs: &[AnnotatedPair]) -> BTreeMap<Lang, usize> {
    pairs.iter().map(|pair| pair.lang).counts().into_iter().collect()
}

/// Runs the three stages and returns the balanced set plus its report.
///
/// Deterministic: identical input and seed reproduce the output
/// bit-identically. A different seed changes which down-sampled rows
/// survive, never how many.
pub fn balance(
    pairs: Vec<AnnotatedPair>,
    config: &BalanceConfig,
) -> (Vec<AnnotatedPair>, BalanceReport) {
    let mut report = BalanceReport {
        input: pairs.len(),
        per_lang_in: count_langs(&pairs),
        ..Default::default()
    };

    // stage 1: quality filter
    let filtered: Vec<AnnotatedPair> = pairs.into_iter().filter(well_formed).collect();
    report.after_filter = filtered.len();
    info!(
        "quality filter kept {}/{} pairs",
        report.after_filter, report.input
    );

    // stage 2: down-sample the over-represented partition
    let (partition, rest): (Vec<_>, Vec<_>) = filtered
        .into_iter()
        .partition(|pair| pair.lang == config.downsample);

    let sample_size =
        ((partition.len() as f64 * config.fraction).floor() as usize).min(partition.len());
    report.sample_size = sample_size;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut kept = rand::seq::index::sample(&mut rng, partition.len(), sample_size).into_vec();
    // surviving rows keep their relative corpus order
    kept.sort_unstable();

    let mut kept = kept.into_iter().peekable();
    let sampled: Vec<AnnotatedPair> = partition
        .into_iter()
        .enumerate()
        .filter(|(i, _)| {
            if kept.peek() == Some(i) {
                kept.next();
                true
            } else {
                false
            }
        })
        .map(|(_, pair)| pair)
        .collect();

    info!(
        "[{}] down-sampled to {} pairs (fraction {})",
        config.downsample, sample_size, config.fraction
    );

    let mut balanced = sampled;
    balanced.extend(rest);

    // stage 3: dedup on the composite key, first occurrence wins
    let mut unique = CombinedKeyFilter::default();
    let deduped: Vec<AnnotatedPair> = balanced
        .into_iter()
        .filter(|pair| unique.detect_mut(pair))
        .collect();

    report.output = deduped.len();
    report.per_lang_out = count_langs(&deduped);
    for (lang, count) in &report.per_lang_out {
        info!("[{}] {} pairs in final dataset", lang, count);
    }

    (deduped, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipelines::types::{InfoType, QuestionType};

    fn tagged(index: usize, lang: Lang, source: &str, target: &str) -> AnnotatedPair {
        AnnotatedPair {
            index,
            source: source.to_string(),
            target: target.to_string(),
            lang,
            feature1: vec![InfoType::Modality],
            feature2: vec![QuestionType::Polar],
        }
    }

    fn corpus(n_id: usize, n_af: usize) -> Vec<AnnotatedPair> {
        let mut pairs = Vec::new();
        for i in 0..n_id {
            pairs.push(tagged(i, Lang::Id, &format!("Apakah {}?", i), &format!("Is it {}?", i)));
        }
        for i in 0..n_af {
            pairs.push(tagged(i, Lang::Af, &format!("Is dit {}?", i), &format!("Is this {}?", i)));
        }
        pairs
    }

    #[test]
    fn test_downsample_counts() {
        let (out, report) = balance(corpus(100, 50), &BalanceConfig::default());

        assert_eq!(report.per_lang_out[&Lang::Id], 50);
        assert_eq!(report.per_lang_out[&Lang::Af], 50);
        assert_eq!(out.len(), 100);
    }

    #[test]
    fn test_quality_filter_drops_untagged() {
        let mut pairs = corpus(0, 2);
        pairs[1].feature1.clear();
        let (out, report) = balance(pairs, &BalanceConfig::default());

        assert_eq!(report.after_filter, 1);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_quality_filter_needs_question_marks() {
        let mut pairs = corpus(0, 2);
        pairs[0].source = "Geen vraag nie".to_string();
        let (out, _) = balance(pairs, &BalanceConfig::default());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_arabic_question_mark_accepted() {
        let pairs = vec![tagged(0, Lang::Ar, "هل أنت بخير؟", "Are you ok?")];
        let (out, _) = balance(pairs, &BalanceConfig::default());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_deterministic_under_same_seed() {
        let (a, _) = balance(corpus(40, 10), &BalanceConfig::default());
        let (b, _) = balance(corpus(40, 10), &BalanceConfig::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_changes_rows_not_counts() {
        let config_a = BalanceConfig::default();
        let config_b = BalanceConfig {
            seed: 7,
            ..BalanceConfig::default()
        };
        let (a, report_a) = balance(corpus(40, 10), &config_a);
        let (b, report_b) = balance(corpus(40, 10), &config_b);

        assert_eq!(a.len(), b.len());
        assert_eq!(report_a.sample_size, report_b.sample_size);
        assert_ne!(a, b); // 20-of-40 draws under different seeds
    }

    #[test]
    fn test_dedup_first_wins() {
        let mut pairs = corpus(0, 3);
        pairs[1].source = pairs[0].source.clone();
        pairs[1].target = pairs[0].target.clone();
        let (out, _) = balance(pairs, &BalanceConfig::default());

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].index, 0);
    }

    #[test]
    fn test_no_fabricated_pairs() {
        let input = corpus(10, 10);
        let (out, _) = balance(input.clone(), &BalanceConfig::default());
        for pair in &out {
            assert!(input.contains(pair));
        }
    }

    #[test]
    fn test_order_preserved_within_partitions() {
        let (out, _) = balance(corpus(10, 5), &BalanceConfig::default());
        let id_indices: Vec<usize> = out
            .iter()
            .filter(|p| p.lang == Lang::Id)
            .map(|p| p.index)
            .collect();
        let mut sorted = id_indices.clone();
        sorted.sort_unstable();
        assert_eq!(id_indices, sorted);
    }
}
