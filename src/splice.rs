//! Rebuilding sequences from a located motif span
use crate::config::{Mode, NotFoundPolicy};
use crate::match_type::{ExtractedMotif, JoinedRead, Located, Match, Span, SplicedRead};

/// Split `seq` into the flanks before and after `span`
pub fn splice(seq: &[u8], span: Span) -> (&[u8], &[u8]) {
    (&seq[..span.start], &seq[span.end..])
}

/// `prefix + suffix`, i.e. `seq` with `span` excised
pub fn join(seq: &[u8], span: Span) -> Vec<u8> {
    let (prefix, suffix) = splice(seq, span);
    let mut joined = Vec::with_capacity(prefix.len() + suffix.len());
    joined.extend_from_slice(prefix);
    joined.extend_from_slice(suffix);
    joined
}

impl<'a> SplicedRead<'a> {
    pub fn new(read_id: &'a str, seq: &'a [u8], span: Span) -> Self {
        let (prefix, suffix) = splice(seq, span);
        SplicedRead {
            read_id,
            seq,
            prefix,
            suffix,
        }
    }

    /// Consumes self to produce an owned `JoinedRead`
    pub fn join(self, pattern: &str, span: Span) -> JoinedRead {
        JoinedRead {
            read_id: self.read_id.to_string(),
            pattern: pattern.to_string(),
            seq: self.seq.to_vec(),
            span: Some(span),
            joined: [self.prefix, self.suffix].concat(),
        }
    }
}

/// Result of reconstructing one pair
#[derive(Debug, PartialEq)]
pub enum Spliced {
    Joined(JoinedRead),
    Extracted(ExtractedMotif),
}

/// Trim mode: excise the motif. A miss passes the read through unchanged
/// or yields nothing depending on `policy`.
pub fn trim(mat: &Match, policy: NotFoundPolicy) -> Option<JoinedRead> {
    match mat.located {
        Located::Found(span) => {
            Some(SplicedRead::new(mat.read_id(), mat.seq(), span).join(&mat.pattern.text, span))
        }
        Located::NotFound => match policy {
            NotFoundPolicy::Pass => Some(JoinedRead {
                read_id: mat.read.id.clone(),
                pattern: mat.pattern.text.clone(),
                seq: mat.read.seq.clone(),
                span: None,
                joined: mat.read.seq.clone(),
            }),
            NotFoundPolicy::Skip => None,
        },
    }
}

/// Extract mode: keep only the motif occurrence. Misses never yield a record.
pub fn extract(mat: &Match) -> Option<ExtractedMotif> {
    let span = mat.located.span()?;
    Some(ExtractedMotif {
        read_id: mat.read.id.clone(),
        pattern: mat.pattern.text.clone(),
        span,
        motif: mat.seq()[span.start..span.end].to_vec(),
    })
}

pub fn reconstruct(mat: &Match, mode: Mode, policy: NotFoundPolicy) -> Option<Spliced> {
    match mode {
        Mode::Trim => trim(mat, policy).map(Spliced::Joined),
        Mode::Extract => extract(mat).map(Spliced::Extracted),
    }
}
