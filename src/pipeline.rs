//! One linear batch pass: parse, locate, splice, emit
use std::fs::File;
use std::io::{self, BufWriter};

use log::{debug, info};

use crate::config::{Mode, NotFoundPolicy, ProgConfig};
use crate::errors::{Error, Result};
use crate::input::open_input;
use crate::match_type::{Pattern, Read};
use crate::matching::MotifLocator;
use crate::output::{write_config_header, write_stats_header, FastaSink, RecordSink};
use crate::patterns::load_patterns;
use crate::reads::ReadParser;
use crate::splice::reconstruct;
use crate::stat::{PatternStats, RunningStats};

/// Check every read against every pattern and hand the results to `sink`
pub fn process<S: RecordSink>(
    reads: &[Read],
    patterns: &[Pattern],
    mode: Mode,
    policy: NotFoundPolicy,
    sink: &mut S,
    stats: &mut RunningStats,
    pattern_stats: &mut PatternStats,
) -> io::Result<()> {
    stats.patterns = patterns.len();
    for mat in MotifLocator::new(reads, patterns) {
        stats.pairs += 1;
        match mat.located.span() {
            Some(_) => stats.found += 1,
            None => {
                stats.not_found += 1;
                debug!("{}", mat);
            }
        }
        pattern_stats.append(&mat);
        if let Some(rec) = reconstruct(&mat, mode, policy) {
            sink.write_spliced(&rec)?;
            stats.emitted += 1;
        }
    }
    sink.flush()
}

pub fn run(cfg: &ProgConfig) -> Result<RunningStats> {
    let mut header = Vec::new();
    write_config_header(&mut header, cfg)?;
    log_lines(&header);

    let mut stats = RunningStats::default();
    let reads = ReadParser::new(cfg.longread_path.as_str(), cfg.strict)
        .parse(open_input(&cfg.longread_path)?, &mut stats)?;
    let patterns = load_patterns(open_input(&cfg.pattern_path)?, &cfg.pattern_path)?;
    info!(
        "Loaded {} reads and {} patterns",
        reads.len(),
        patterns.len()
    );

    let mut pattern_stats = PatternStats::new();
    match &cfg.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::io(path, e))?;
            let mut sink = FastaSink::new(BufWriter::new(file));
            process(
                &reads,
                &patterns,
                cfg.mode,
                cfg.not_found,
                &mut sink,
                &mut stats,
                &mut pattern_stats,
            )?;
        }
        None => {
            let stdout = io::stdout();
            let mut sink = FastaSink::new(stdout.lock());
            process(
                &reads,
                &patterns,
                cfg.mode,
                cfg.not_found,
                &mut sink,
                &mut stats,
                &mut pattern_stats,
            )?;
        }
    }

    if let Some(path) = &cfg.pattern_report {
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        pattern_stats.write_to_buf(BufWriter::new(file), &patterns)?;
    }
    for (pattern, hits) in pattern_stats.most_common().iter().take(5) {
        debug!("{}: {} hits", pattern, hits);
    }

    let mut summary = Vec::new();
    write_stats_header(&mut summary, &stats)?;
    log_lines(&summary);
    Ok(stats)
}

fn log_lines(buf: &[u8]) {
    for line in String::from_utf8_lossy(buf).lines() {
        info!("{}", line);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::match_type::{ExtractedMotif, JoinedRead};

    #[derive(Default)]
    struct CollectSink {
        joined: Vec<JoinedRead>,
        extracted: Vec<ExtractedMotif>,
    }

    impl RecordSink for CollectSink {
        fn write_joined(&mut self, rec: &JoinedRead) -> io::Result<()> {
            self.joined.push(rec.clone());
            Ok(())
        }
        fn write_extracted(&mut self, rec: &ExtractedMotif) -> io::Result<()> {
            self.extracted.push(rec.clone());
            Ok(())
        }
    }

    fn fixture() -> (Vec<Read>, Vec<Pattern>) {
        (
            vec![Read::new("read1", "ATCGGGATCC"), Read::new("read2", "TTTTGGGA")],
            vec![Pattern::new("GGG"), Pattern::new("TTTT")],
        )
    }

    #[test]
    fn trim_pass_through_emits_every_pair() {
        let (reads, patterns) = fixture();
        let mut sink = CollectSink::default();
        let mut stats = RunningStats::default();
        let mut pstats = PatternStats::new();
        process(
            &reads,
            &patterns,
            Mode::Trim,
            NotFoundPolicy::Pass,
            &mut sink,
            &mut stats,
            &mut pstats,
        )
        .unwrap();

        let got: Vec<(&str, &str, &[u8])> = sink
            .joined
            .iter()
            .map(|j| (j.read_id.as_str(), j.pattern.as_str(), j.joined.as_slice()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("read1", "GGG", &b"ATCATCC"[..]),
                ("read1", "TTTT", &b"ATCGGGATCC"[..]),
                ("read2", "GGG", &b"TTTTA"[..]),
                ("read2", "TTTT", &b"GGGA"[..]),
            ]
        );
        assert_eq!(stats.pairs, 4);
        assert_eq!(stats.found, 3);
        assert_eq!(stats.not_found, 1);
        assert_eq!(stats.emitted, 4);
        assert_eq!(pstats.hits("GGG"), 2);
        assert_eq!(pstats.misses("TTTT"), 1);
    }

    #[test]
    fn skip_and_extract_emit_hits_only() {
        let (reads, patterns) = fixture();
        let mut sink = CollectSink::default();
        let mut stats = RunningStats::default();
        process(
            &reads,
            &patterns,
            Mode::Trim,
            NotFoundPolicy::Skip,
            &mut sink,
            &mut stats,
            &mut PatternStats::new(),
        )
        .unwrap();
        assert_eq!(sink.joined.len(), 3);
        assert_eq!(stats.emitted, 3);

        let mut sink = CollectSink::default();
        let mut stats = RunningStats::default();
        process(
            &reads,
            &patterns,
            Mode::Extract,
            NotFoundPolicy::Pass,
            &mut sink,
            &mut stats,
            &mut PatternStats::new(),
        )
        .unwrap();
        assert!(sink.joined.is_empty());
        let motifs: Vec<&[u8]> = sink.extracted.iter().map(|e| e.motif.as_slice()).collect();
        assert_eq!(motifs, vec![&b"GGG"[..], &b"GGG"[..], &b"TTTT"[..]]);
        assert_eq!(stats.not_found, 1);
    }

    #[test]
    fn pair_counters_go_past_u32() {
        let (reads, patterns) = fixture();
        let start = u64::from(u32::MAX);
        let mut stats = RunningStats {
            pairs: start,
            found: start,
            emitted: start,
            ..Default::default()
        };
        process(
            &reads,
            &patterns,
            Mode::Trim,
            NotFoundPolicy::Pass,
            &mut CollectSink::default(),
            &mut stats,
            &mut PatternStats::new(),
        )
        .unwrap();
        assert_eq!(stats.pairs, start + 4);
        assert_eq!(stats.found, start + 3);
        assert_eq!(stats.emitted, start + 4);
        assert_eq!(stats.patterns, 2);
    }
}
