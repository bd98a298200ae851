//! Word-list loading.
//!
//! A word list is UTF-8 text with one `word<TAB>frequency` entry per line.
//! Blank lines are skipped, as are comment lines: lines that start with `#`
//! and contain no tab. A tab-separated line is always an entry, so words such
//! as `#hashtag` can still be loaded.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;

use crate::PrefixTree;

/// Failure while reading a word list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A line had no tab-separated frequency.
    #[error("line {line}: expected `word<TAB>frequency`")]
    MissingFrequency {
        /// 1-based line number.
        line: usize,
    },
    /// The frequency column was not an integer.
    #[error("line {line}: invalid frequency: {source}")]
    InvalidFrequency {
        /// 1-based line number.
        line: usize,
        /// Parse failure.
        source: ParseIntError,
    },
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Entries stored as new keys.
    pub inserted: usize,
    /// Entries skipped because the key was already present.
    pub duplicates: usize,
}

fn parse_line(line: &str, number: usize) -> Result<Option<(&str, i64)>, LoadError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let Some((word, frequency)) = line.rsplit_once('\t') else {
        if line.starts_with('#') {
            return Ok(None);
        }
        return Err(LoadError::MissingFrequency { line: number });
    };
    let frequency = frequency
        .trim()
        .parse()
        .map_err(|source| LoadError::InvalidFrequency {
            line: number,
            source,
        })?;
    Ok(Some((word, frequency)))
}

/// Inserts every entry read from `reader` into `tree`.
///
/// Stops at the first malformed line; entries before it stay inserted.
pub fn load_from_reader<R: BufRead>(
    reader: R,
    tree: &mut PrefixTree,
) -> Result<LoadStats, LoadError> {
    let mut stats = LoadStats::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some((word, frequency)) = parse_line(&line, idx + 1)? else {
            continue;
        };
        if tree.insert(word, frequency) {
            stats.inserted += 1;
        } else {
            log::warn!("line {}: duplicate word {:?} skipped", idx + 1, word);
            stats.duplicates += 1;
        }
    }
    log::debug!(
        "loaded {} entries ({} duplicates)",
        stats.inserted,
        stats.duplicates
    );
    Ok(stats)
}

/// Opens `path` and loads it with [`load_from_reader`].
pub fn load_file(path: &Path, tree: &mut PrefixTree) -> Result<LoadStats, LoadError> {
    log::info!("loading word list from {} ...", path.display());
    let file = File::open(path)?;
    let stats = load_from_reader(BufReader::new(file), tree)?;
    log::info!(
        "loaded {} words from {} ({} duplicates)",
        stats.inserted,
        path.display(),
        stats.duplicates
    );
    Ok(stats)
}
