//! Opening of the two input streams
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::errors::{Error, Result};

/// Anything shorter cannot hold a compressed container
const MIN_SNIFF_LEN: u64 = 5;

/// Open `path` as a buffered line source, transparently decompressing gzip/bzip2/xz.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let len = file.metadata().map_err(|e| Error::io(path, e))?.len();
    if len < MIN_SNIFF_LEN {
        return Ok(Box::new(BufReader::new(file)));
    }
    let (reader, format) = niffler::get_reader(Box::new(file)).map_err(|e| {
        Error::io(path, io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    })?;
    debug!("Opened {} ({:?})", path.display(), format);
    Ok(Box::new(BufReader::new(reader)))
}

/// Strip a trailing carriage return left over from CRLF files
pub(crate) fn chomp(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_io_error() {
        let res = open_input("/definitely/not/here.fq");
        assert!(matches!(res, Err(Error::Io { .. })));
    }

    #[test]
    fn reads_plain_text() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "@r1\nACGTACGT\n").unwrap();
        let lines: Vec<String> = open_input(tmp.path())
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["@r1", "ACGTACGT"]);
    }

    #[test]
    fn reads_gzip_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reads.fq.gz");
        {
            let mut writer = niffler::to_path(
                &path,
                niffler::compression::Format::Gzip,
                niffler::Level::One,
            )
            .unwrap();
            writer.write_all(b"@r1\nACGT\n").unwrap();
        }
        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);

        let lines: Vec<String> = open_input(&path)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["@r1", "ACGT"]);
    }

    #[test]
    fn chomp_crlf() {
        assert_eq!(chomp("ACGT\r"), "ACGT");
        assert_eq!(chomp("ACGT"), "ACGT");
    }
}
