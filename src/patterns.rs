//! Loading of the motif file: one motif per non-empty line
use std::io::BufRead;

use crate::errors::{Error, Result};
use crate::input::chomp;
use crate::match_type::Pattern;

/// Patterns in file order. No deduplication, no case folding, only the line ending is removed.
pub fn load_patterns<R: BufRead>(reader: R, origin: &str) -> Result<Vec<Pattern>> {
    let mut patterns = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::read(origin, idx + 1, e))?;
        let text = chomp(&line);
        if !text.is_empty() {
            patterns.push(Pattern::new(text));
        }
    }
    Ok(patterns)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_order_duplicates_and_case() {
        let pats = load_patterns("GGG\n\nacgt\r\nGGG\n TT \n".as_bytes(), "test").unwrap();
        let texts: Vec<&str> = pats.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["GGG", "acgt", "GGG", " TT "]);
    }

    #[test]
    fn invalid_utf8_reports_line() {
        let res = load_patterns(&b"GGG\nAC\xffGT\n"[..], "motifs.txt");
        match res {
            Err(Error::Read { path, line, .. }) => {
                assert_eq!(path, "motifs.txt");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
