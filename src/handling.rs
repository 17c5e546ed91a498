//! Turn a fatal error into a deliberate process exit with code 1.
//! Calls std::process::exit, so pending destructors of the caller do not run.
use std::error::Error;
use std::process;

pub const FAILURE_CODE: i32 = 1;

/// Render `err` followed by its chain of causes, `: ` separated
pub fn error_chain(err: &dyn Error) -> String {
    let mut msg = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        // thiserror variants usually already embed their source
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        cause = inner.source();
    }
    msg
}

/// Exit with `FAILURE_CODE` on `Err`, reporting the error chain to stderr
pub trait GracefulResult<T> {
    fn unwrap_graceful(self) -> T;
    fn unwrap_formatful(self, context: &str) -> T;
}

impl<T, E: Error> GracefulResult<T> for Result<T, E> {
    fn unwrap_graceful(self) -> T {
        self.unwrap_or_else(|e| {
            eprintln!("{}", error_chain(&e));
            process::exit(FAILURE_CODE)
        })
    }

    /// If Err(e) print "{context}: {e}" to stderr and exit.
    fn unwrap_formatful(self, context: &str) -> T {
        self.unwrap_or_else(|e| {
            eprintln!("{}: {}", context, error_chain(&e));
            process::exit(FAILURE_CODE)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::Error as SpliceError;
    use std::io;

    #[test]
    fn chain_does_not_repeat_embedded_source() {
        let err = SpliceError::io(
            "reads.fq",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            error_chain(&err),
            "Could not open \"reads.fq\": no such file"
        );
    }
}
