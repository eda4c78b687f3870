//! # qopus
//!
//! qopus mines question/translation pairs out of OPUS NLLB parallel
//! corpora: it detects questions per language, pairs them with their
//! aligned English lines, annotates each pair with information-type and
//! question-type tags, and balances the result into a deduplicated
//! dataset.
//!
//! This project can be used both as a tool to download corpora and build
//! datasets, or as a lib to integrate detection and annotation into other
//! projects.
//!
//! ## Getting started
//!
//! ```sh
//! qopus 0.2.0
//! question-pair mining tool.
//!
//! USAGE:
//!     qopus <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     download      Download OPUS NLLB monolingual snapshots
//!     extract       Mine question pairs from aligned corpus files
//!     annotate      Annotate mined pairs with linguistic features
//!     balance       Filter, balance and deduplicate the annotated dataset
//!     analyze       Per-language and per-tag dataset statistics
//!     locate        Locate questions inside a raw alignment file
//!     export-pdf    Export the dataset as a table PDF
//!     pipeline      Run extract, annotate and balance in one go
//! ```
use std::str::FromStr;

use log::{debug, info, warn};
use structopt::StructOpt;

use qopus::cli;
use qopus::error::Error;
use qopus::export::export_pdf;
use qopus::io::writer::{read_dataset, write_dataset, write_json};
use qopus::lang::{Lang, SOURCE_LANGS};
use qopus::pipelines::mine::load_mined_pairs;
use qopus::pipelines::types::AnnotatedPair;
use qopus::pipelines::{MinePipeline, Pipeline};
use qopus::processing::analysis::CorpusReport;
use qopus::processing::{balance, BalanceConfig};
use qopus::sources::opus;
use qopus::transformers::Annotator;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Qopus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Qopus::Download(d) => {
            std::fs::create_dir_all(&d.dst)?;
            let langs = match d.lang {
                Some(code) => vec![Lang::from_str(&code)?],
                None => Lang::all().to_vec(),
            };
            let downloader = opus::Downloader::new(d.num_lines);
            let results = downloader.download_all(&d.dst, &langs);
            let failures = results.iter().filter(|r| r.is_err()).count();
            if failures > 0 {
                warn!("{}/{} downloads failed", failures, results.len());
            }
        }

        cli::Qopus::Extract(e) => {
            let pipeline = MinePipeline::new(e.src, e.dst, e.limit);
            pipeline.run()?;
        }

        cli::Qopus::Annotate(a) => {
            let mut pairs: Vec<AnnotatedPair> = load_mined_pairs(&a.src)?
                .into_iter()
                .map(AnnotatedPair::from)
                .collect();
            Annotator::with_defaults().annotate_all(&mut pairs);
            write_dataset(&a.dst, &pairs)?;
            info!("annotated {} pairs into {:?}", pairs.len(), a.dst);
        }

        cli::Qopus::Balance(b) => {
            let (pairs, malformed) = read_dataset(&b.src)?;
            if malformed > 0 {
                warn!("{} rows had unreadable feature cells", malformed);
            }
            let config = BalanceConfig {
                downsample: Lang::from_str(&b.lang)?,
                fraction: b.fraction,
                seed: b.seed,
            };
            let (balanced, report) = balance(pairs, &config);
            write_dataset(&b.dst, &balanced)?;
            info!(
                "balanced {} -> {} pairs into {:?}",
                report.input, report.output, b.dst
            );
        }

        cli::Qopus::Analyze(a) => {
            let (pairs, _) = read_dataset(&a.src)?;
            let report = CorpusReport::from_pairs(&pairs);
            match a.dst {
                Some(path) => write_json(&path, &report)?,
                None => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }

        cli::Qopus::Locate(l) => {
            let file = std::fs::File::open(&l.questions)?;
            let questions = serde_json::from_reader(std::io::BufReader::new(file))?;
            let located = opus::locate_questions(&questions, &l.alignment)?;
            write_json(&l.dst, &located)?;
            info!("located {} questions into {:?}", located.len(), l.dst);
        }

        cli::Qopus::ExportPdf(e) => {
            let (pairs, _) = read_dataset(&e.src)?;
            export_pdf(&pairs, &e.dst)?;
            info!("exported {} pairs to {:?}", pairs.len(), e.dst);
        }

        cli::Qopus::Pipeline(p) => {
            let miner = MinePipeline::new(p.src, p.dst.clone(), p.limit);
            let mut pairs: Vec<AnnotatedPair> = miner
                .run()?
                .into_iter()
                .map(AnnotatedPair::from)
                .collect();

            Annotator::with_defaults().annotate_all(&mut pairs);
            let annotated_path = p.dst.join("annotated_question_pairs.csv");
            write_dataset(&annotated_path, &pairs)?;

            let config = BalanceConfig {
                downsample: Lang::from_str(&p.lang)?,
                fraction: p.fraction,
                seed: p.seed,
            };
            let (balanced, report) = balance(pairs, &config);
            let dataset_path = p.dst.join("filtered_questions.csv");
            write_dataset(&dataset_path, &balanced)?;
            write_json(&p.dst.join("balance_report.json"), &report)?;

            for lang in SOURCE_LANGS {
                info!(
                    "[{}] {} -> {} pairs",
                    lang,
                    report.per_lang_in.get(&lang).unwrap_or(&0),
                    report.per_lang_out.get(&lang).unwrap_or(&0)
                );
            }
            info!("final dataset: {} pairs in {:?}", report.output, dataset_path);
        }
    };
    Ok(())
}
