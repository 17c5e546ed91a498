//! Fatal error kinds of a splicing run
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not open \"{path}\": {source}")]
    Io { path: String, source: io::Error },

    #[error("Could not read \"{path}\" at line {line}: {source}")]
    Read {
        path: String,
        line: usize,
        source: io::Error,
    },

    #[error("Malformed read input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Could not parse run file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error writing output: {0}")]
    Write(#[from] io::Error),

    #[error("Error writing pattern report: {0}")]
    Report(#[from] csv::Error),
}

impl Error {
    pub fn io<P: AsRef<std::path::Path>>(path: P, source: io::Error) -> Self {
        Error::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Failure while consuming an already opened stream
    pub fn read<P: AsRef<std::path::Path>>(path: P, line: usize, source: io::Error) -> Self {
        Error::Read {
            path: path.as_ref().display().to_string(),
            line,
            source,
        }
    }
}
