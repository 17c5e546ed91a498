//! Types holding reads, motifs and the outcome of locating one in the other
use std::fmt;
use std::fmt::Display;

/// A single long read
///
/// `id` is the first whitespace delimited token of the header without the leading `@`.
#[derive(Debug, Clone, PartialEq)]
pub struct Read {
    pub id: String,
    /// Sequence as bytes, concatenated over all sequence lines
    pub seq: Vec<u8>,
}

impl Read {
    pub fn new<S: Into<String>, T: Into<Vec<u8>>>(id: S, seq: T) -> Self {
        Read {
            id: id.into(),
            seq: seq.into(),
        }
    }
}

/// One motif as given in the pattern file. Case sensitive, never normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub text: String,
}

impl Pattern {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Pattern { text: text.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Half-open `[start, end)` range into a read sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Outcome of searching a motif in a read. A miss is an ordinary result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Located {
    Found(Span),
    NotFound,
}

impl Located {
    pub fn span(&self) -> Option<Span> {
        match *self {
            Located::Found(span) => Some(span),
            Located::NotFound => None,
        }
    }
}

/// Zero-copy result for one `(read, pattern)` pair
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    pub read: &'a Read,
    pub pattern: &'a Pattern,
    pub located: Located,
}

impl<'a> Match<'a> {
    pub fn read_id(&self) -> &'a str {
        &self.read.id
    }

    pub fn seq(&self) -> &'a [u8] {
        &self.read.seq
    }
}

impl<'a> Display for Match<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.located {
            Located::Found(span) => write!(
                f,
                "{id} [{pat}]: {span}",
                id = self.read.id,
                pat = self.pattern.text,
                span = span
            ),
            Located::NotFound => write!(
                f,
                "{id} [{pat}]: not found",
                id = self.read.id,
                pat = self.pattern.text
            ),
        }
    }
}

/// Flanks of a read around a located span, borrowed from the read
#[derive(Debug, PartialEq)]
pub struct SplicedRead<'a> {
    pub read_id: &'a str,
    pub seq: &'a [u8],
    pub prefix: &'a [u8],
    pub suffix: &'a [u8],
}

/// Owned read with a motif excised. `span` is `None` for a pass-through miss.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRead {
    pub read_id: String,
    pub pattern: String,
    pub seq: Vec<u8>,
    pub span: Option<Span>,
    pub joined: Vec<u8>,
}

/// Owned copy of the motif occurrence itself
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedMotif {
    pub read_id: String,
    pub pattern: String,
    pub span: Span,
    pub motif: Vec<u8>,
}
