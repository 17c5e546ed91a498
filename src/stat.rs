//! Types to track the number of reads, pairs and hits during a run
use std::collections::HashSet;
use std::io;

use counter::Counter;
use serde::Serialize;

use crate::errors::Result;
use crate::match_type::{Match, Pattern};

/// General information collected during parsing and splicing
///
/// Usage: mutably borrowed by `reads::ReadParser` and `pipeline::process`
#[derive(Default, Debug, PartialEq)]
pub struct RunningStats {
    pub total_reads: u64,
    pub malformed_dropped: u64,
    pub patterns: usize,
    /// Grows with reads x patterns
    pub pairs: u64,
    pub found: u64,
    pub not_found: u64,
    pub emitted: u64,
}

/// Hits and misses per motif text
///
/// Duplicate motifs in the pattern file share one entry.
pub struct PatternStats {
    hits: Counter<String>,
    misses: Counter<String>,
}

#[derive(Serialize)]
struct PatternRow<'a> {
    pattern: &'a str,
    hits: usize,
    misses: usize,
}

impl PatternStats {
    pub fn new() -> Self {
        PatternStats {
            hits: Counter::new(),
            misses: Counter::new(),
        }
    }

    pub fn append(&mut self, mat: &Match) {
        let counter = match mat.located.span() {
            Some(_) => &mut self.hits,
            None => &mut self.misses,
        };
        *counter.entry(mat.pattern.text.clone()).or_insert(0) += 1;
    }

    pub fn hits(&self, pattern: &str) -> usize {
        self.hits.get(pattern).copied().unwrap_or(0)
    }

    pub fn misses(&self, pattern: &str) -> usize {
        self.misses.get(pattern).copied().unwrap_or(0)
    }

    /// Motifs ordered by decreasing hit count, ties alphabetically
    pub fn most_common(&self) -> Vec<(String, usize)> {
        self.hits.most_common_ordered()
    }

    /// Write the per-pattern table as a .tsv in pattern file order
    pub fn write_to_buf<T: io::Write>(&self, buf: T, patterns: &[Pattern]) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().delimiter(b'\t').from_writer(buf);
        let mut seen = HashSet::new();
        for pat in patterns.iter().filter(|p| seen.insert(p.text.as_str())) {
            wtr.serialize(PatternRow {
                pattern: &pat.text,
                hits: self.hits(&pat.text),
                misses: self.misses(&pat.text),
            })?;
        }
        wtr.flush()?;
        Ok(())
    }
}
