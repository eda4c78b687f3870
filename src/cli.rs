//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "qopus", about = "question-pair mining tool.")]
/// Holds every command that is callable by the `qopus` command.
pub enum Qopus {
    #[structopt(about = "Download OPUS NLLB monolingual snapshots")]
    Download(Download),
    #[structopt(about = "Mine question pairs from aligned corpus files")]
    Extract(Extract),
    #[structopt(about = "Annotate mined pairs with linguistic features")]
    Annotate(Annotate),
    #[structopt(about = "Filter, balance and deduplicate the annotated dataset")]
    Balance(Balance),
    #[structopt(about = "Per-language and per-tag dataset statistics")]
    Analyze(Analyze),
    #[structopt(about = "Locate questions inside a raw alignment file")]
    Locate(Locate),
    #[structopt(about = "Export the dataset as a table PDF")]
    ExportPdf(ExportPdf),
    #[structopt(about = "Run extract, annotate and balance in one go")]
    Pipeline(Pipeline),
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
pub struct Download {
    #[structopt(parse(from_os_str), help = "snapshot destination")]
    pub dst: PathBuf,
    #[structopt(
        short = "n",
        long = "num-lines",
        default_value = "100",
        help = "number of leading lines to keep per dump"
    )]
    pub num_lines: usize,
    #[structopt(
        short = "l",
        long = "lang",
        help = "restrict to one language code (default: all)"
    )]
    pub lang: Option<String>,
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
pub struct Extract {
    #[structopt(parse(from_os_str), help = "source (contains NLLB.*-* files)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "extraction result destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "limit",
        default_value = "1000",
        help = "number of leading lines to inspect per corpus"
    )]
    pub limit: usize,
}

#[derive(Debug, StructOpt)]
pub struct Annotate {
    #[structopt(parse(from_os_str), help = "directory holding question_pairs_<lang>.json")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "annotated dataset (csv) destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Balance {
    #[structopt(parse(from_os_str), help = "annotated dataset (csv) location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "balanced dataset (csv) destination")]
    pub dst: PathBuf,
    #[structopt(
        short = "f",
        long = "fraction",
        default_value = "0.5",
        help = "fraction of the down-sampled language to keep"
    )]
    pub fraction: f64,
    #[structopt(short = "s", long = "seed", default_value = "42")]
    pub seed: u64,
    #[structopt(
        short = "l",
        long = "lang",
        default_value = "id",
        help = "language code to down-sample"
    )]
    pub lang: String,
}

#[derive(Debug, StructOpt)]
pub struct Analyze {
    #[structopt(parse(from_os_str), help = "annotated dataset (csv) location")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "report (json) destination. Leave blank for stdout."
    )]
    pub dst: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Locate {
    #[structopt(parse(from_os_str), help = "indexed questions (json) location")]
    pub questions: PathBuf,
    #[structopt(parse(from_os_str), help = "raw alignment file")]
    pub alignment: PathBuf,
    #[structopt(parse(from_os_str), help = "located indices (json) destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct ExportPdf {
    #[structopt(parse(from_os_str), help = "dataset (csv) location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "pdf destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
pub struct Pipeline {
    #[structopt(parse(from_os_str), help = "source (contains NLLB.*-* files)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "pipeline result destination")]
    pub dst: PathBuf,
    #[structopt(long = "limit", default_value = "1000")]
    pub limit: usize,
    #[structopt(short = "f", long = "fraction", default_value = "0.5")]
    pub fraction: f64,
    #[structopt(short = "s", long = "seed", default_value = "42")]
    pub seed: u64,
    #[structopt(short = "l", long = "lang", default_value = "id")]
    pub lang: String,
}
