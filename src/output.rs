//! Helpers to write output to buffers

use std::io;

use bio::io::fasta;

use crate::config::ProgConfig;
use crate::match_type::{ExtractedMotif, JoinedRead};
use crate::splice::Spliced;
use crate::stat::RunningStats;

/// Terminal stage of the pipeline
pub trait RecordSink {
    fn write_joined(&mut self, rec: &JoinedRead) -> io::Result<()>;
    fn write_extracted(&mut self, rec: &ExtractedMotif) -> io::Result<()>;

    fn write_spliced(&mut self, rec: &Spliced) -> io::Result<()> {
        match rec {
            Spliced::Joined(j) => self.write_joined(j),
            Spliced::Extracted(e) => self.write_extracted(e),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes one FASTA record per spliced pair
///
/// Header: `>{read_id} pattern={pattern} span={start}-{end}`, `span=none` for a pass-through miss.
pub struct FastaSink<W: io::Write> {
    writer: fasta::Writer<W>,
}

impl<W: io::Write> FastaSink<W> {
    pub fn new(writer: W) -> Self {
        FastaSink {
            writer: fasta::Writer::new(writer),
        }
    }
}

impl<W: io::Write> RecordSink for FastaSink<W> {
    fn write_joined(&mut self, rec: &JoinedRead) -> io::Result<()> {
        let desc = match rec.span {
            Some(span) => format!("pattern={} span={}", rec.pattern, span),
            None => format!("pattern={} span=none", rec.pattern),
        };
        self.writer.write(&rec.read_id, Some(desc.as_str()), &rec.joined)
    }

    fn write_extracted(&mut self, rec: &ExtractedMotif) -> io::Result<()> {
        let desc = format!("pattern={} span={}", rec.pattern, rec.span);
        self.writer.write(&rec.read_id, Some(desc.as_str()), &rec.motif)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

pub fn write_stats_header<T: io::Write>(buf: &mut T, stats: &RunningStats) -> io::Result<()> {
    write!(
        buf,
        "# total_reads: {total_reads}\n\
            # malformed_dropped: {malformed}\n\
            # patterns: {patterns}\n\
            # pairs: {pairs}\n\
            # found: {found}\n\
            # not_found: {not_found}\n\
            # emitted_records: {emitted}\n",
        total_reads = stats.total_reads,
        malformed = stats.malformed_dropped,
        patterns = stats.patterns,
        pairs = stats.pairs,
        found = stats.found,
        not_found = stats.not_found,
        emitted = stats.emitted,
    )
}

pub fn write_config_header<T: io::Write>(buf: &mut T, cfg: &ProgConfig) -> io::Result<()> {
    write!(
        buf,
        "# longread: {longread}\n\
            # patterns: {patterns}\n\
            # mode: {mode}\n\
            # not_found: {not_found}\n\
            # strict: {strict}\n",
        longread = cfg.longread_path,
        patterns = cfg.pattern_path,
        mode = cfg.mode,
        not_found = cfg.not_found,
        strict = cfg.strict,
    )
}
