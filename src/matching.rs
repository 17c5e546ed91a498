use bio::pattern_matching::horspool::Horspool;

use crate::match_type::{Located, Match, Pattern, Read, Span};

/// Leftmost exact occurrence of `pattern` in `seq` as a half-open span
pub fn locate(seq: &[u8], pattern: &[u8]) -> Located {
    // Horspool needs a non-empty pattern no longer than the text
    if pattern.is_empty() || pattern.len() > seq.len() {
        return Located::NotFound;
    }
    match Horspool::new(pattern).find_all(seq).next() {
        Some(start) => Located::Found(Span {
            start,
            end: start + pattern.len(),
        }),
        None => Located::NotFound,
    }
}

/// Iterates the full cross product of reads and patterns,
/// read-major with patterns in file order, one `Match` per pair.
pub struct MotifLocator<'a> {
    reads: &'a [Read],
    patterns: &'a [Pattern],
    read_idx: usize,
    pat_idx: usize,
}

impl<'a> MotifLocator<'a> {
    pub fn new(reads: &'a [Read], patterns: &'a [Pattern]) -> Self {
        MotifLocator {
            reads,
            patterns,
            read_idx: 0,
            pat_idx: 0,
        }
    }

    /// Number of pairs the iterator yields in total
    pub fn pair_count(&self) -> usize {
        self.reads.len() * self.patterns.len()
    }
}

impl<'a> Iterator for MotifLocator<'a> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let read = self.reads.get(self.read_idx)?;
        let pattern = self.patterns.get(self.pat_idx)?;
        self.pat_idx += 1;
        if self.pat_idx == self.patterns.len() {
            self.pat_idx = 0;
            self.read_idx += 1;
        }
        Some(Match {
            read,
            pattern,
            located: locate(&read.seq, pattern.as_bytes()),
        })
    }
}
