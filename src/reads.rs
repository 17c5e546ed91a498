//! Line based parser for long read files (FASTQ or header/sequence pairs)
use std::io::BufRead;

use log::{trace, warn};

use crate::errors::{Error, Result};
use crate::input::chomp;
use crate::match_type::Read;
use crate::stat::RunningStats;

pub const HEADER_SENTINEL: char = '@';
const QUAL_SEPARATOR: char = '+';

pub fn is_sequence_line(line: &str) -> bool {
    matches!(line.as_bytes().first(), Some(b'A' | b'T' | b'G' | b'C'))
}

/// Read currently being assembled
struct OpenRecord {
    id: String,
    seq: Vec<u8>,
    header_line: usize,
    /// Bytes of every body line, used to skip a following quality block
    raw_len: usize,
    /// Already rejected, swallow the rest of the record
    broken: bool,
}

/// Turns a line stream into `Read`s.
///
/// Sequence lines are attached to the header that precedes them. A `+` line
/// inside a record always starts a quality block which is skipped by the
/// length of the record body, so quality strings starting with `@` or a
/// nucleotide never leak into records.
///
/// Malformed entries are dropped and counted, or fail the run when `strict`
/// is set: orphan sequence lines, headers without sequence, and records with
/// a body line not starting with A/T/G/C (joining around it would shift
/// every coordinate behind it).
pub struct ReadParser {
    origin: String,
    strict: bool,
}

impl ReadParser {
    pub fn new<S: Into<String>>(origin: S, strict: bool) -> Self {
        ReadParser {
            origin: origin.into(),
            strict,
        }
    }

    pub fn parse<R: BufRead>(&self, reader: R, stats: &mut RunningStats) -> Result<Vec<Read>> {
        let mut reads = Vec::new();
        let mut open: Option<OpenRecord> = None;
        // Some while inside a quality block, holding the bytes still expected
        let mut qual_left: Option<usize> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| Error::read(&self.origin, line_no, e))?;
            let line = chomp(&line);

            if let Some(left) = qual_left {
                let left = left.saturating_sub(line.len());
                qual_left = if left == 0 { None } else { Some(left) };
                continue;
            }

            if line.starts_with(HEADER_SENTINEL) {
                if let Some(rec) = open.take() {
                    self.close(rec, &mut reads, stats)?;
                }
                let id = line[1..].split_whitespace().next().unwrap_or("");
                if id.is_empty() {
                    self.reject(line_no, "header without identifier", stats)?;
                    continue;
                }
                open = Some(OpenRecord {
                    id: id.to_string(),
                    seq: Vec::new(),
                    header_line: line_no,
                    raw_len: 0,
                    broken: false,
                });
            } else if line.starts_with(QUAL_SEPARATOR) {
                match open.take() {
                    Some(rec) => {
                        qual_left = Some(rec.raw_len);
                        self.close(rec, &mut reads, stats)?;
                    }
                    None => trace!(
                        "{}:{} quality separator outside a record",
                        self.origin,
                        line_no
                    ),
                }
            } else if let Some(rec) = open.as_mut() {
                rec.raw_len += line.len();
                if rec.broken || line.is_empty() {
                    continue;
                }
                if is_sequence_line(line) {
                    rec.seq.extend_from_slice(line.as_bytes());
                } else {
                    rec.broken = true;
                    self.reject(line_no, "record line does not start with A/T/G/C", stats)?;
                }
            } else if is_sequence_line(line) {
                self.reject(line_no, "sequence line without preceding header", stats)?;
            } else {
                trace!("{}:{} ignored", self.origin, line_no);
            }
        }
        if let Some(rec) = open.take() {
            self.close(rec, &mut reads, stats)?;
        }
        Ok(reads)
    }

    fn close(
        &self,
        rec: OpenRecord,
        reads: &mut Vec<Read>,
        stats: &mut RunningStats,
    ) -> Result<()> {
        if rec.broken {
            return Ok(());
        }
        if rec.seq.is_empty() {
            return self.reject(rec.header_line, "header without sequence", stats);
        }
        stats.total_reads += 1;
        reads.push(Read::new(rec.id, rec.seq));
        Ok(())
    }

    fn reject(&self, line: usize, reason: &'static str, stats: &mut RunningStats) -> Result<()> {
        if self.strict {
            return Err(Error::MalformedInput { line, reason });
        }
        warn!("{}:{}: {}, dropped", self.origin, line, reason);
        stats.malformed_dropped += 1;
        Ok(())
    }
}
