/*! Reading facilities

Corpus files are one sentence per line; the ordinal position of a line is
its identity, so lines are read in order and never skipped or renumbered.
Gzipped files are decompressed on the fly based on their extension.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::Error;

/// Reads up to `limit` leading lines of a corpus file, trimmed.
pub fn read_lines(path: &Path, limit: usize) -> Result<Vec<String>, Error> {
    let file = File::open(path)?;
    let reader: Box<dyn Read> = match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => Box::new(GzDecoder::new(file)),
        _ => Box::new(file),
    };

    BufReader::new(reader)
        .lines()
        .take(limit)
        .map(|line| line.map(|l| l.trim().to_owned()).map_err(Error::Io))
        .collect()
}
