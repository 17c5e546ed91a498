//! Utilities for loading user config from the command line and json run files
use std::fmt;
use std::fs::File;
use std::str::FromStr;

use clap::{App, ArgMatches};
use log::LevelFilter;
use serde::Deserialize;

use crate::errors::{Error, Result};

/// What to emit for a located motif
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Excise the motif and join the flanks
    Trim,
    /// Keep only the motif occurrence
    Extract,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Trim
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "trim" => Ok(Mode::Trim),
            "extract" => Ok(Mode::Extract),
            _ => Err(Error::Config(format!(
                "unknown mode \"{}\", expected trim or extract",
                s
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Trim => write!(f, "trim"),
            Mode::Extract => write!(f, "extract"),
        }
    }
}

/// What to do with a `(read, pattern)` pair whose motif is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotFoundPolicy {
    /// Emit the read unchanged (trim mode only)
    Pass,
    /// Emit nothing
    Skip,
}

impl Default for NotFoundPolicy {
    fn default() -> Self {
        NotFoundPolicy::Pass
    }
}

impl FromStr for NotFoundPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pass" => Ok(NotFoundPolicy::Pass),
            "skip" => Ok(NotFoundPolicy::Skip),
            _ => Err(Error::Config(format!(
                "unknown not-found policy \"{}\", expected pass or skip",
                s
            ))),
        }
    }
}

impl fmt::Display for NotFoundPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundPolicy::Pass => write!(f, "pass"),
            NotFoundPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// JSON run file for motif_splice. Every key is optional, flags on the command line win.
/// ## Example
/// ``` json
/// {
///     "mode": "extract",
///     "not_found": "skip",
///     "strict": true
/// }
/// ```
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct RunConf {
    pub mode: Option<Mode>,
    pub not_found: Option<NotFoundPolicy>,
    pub strict: Option<bool>,
}

pub fn load_json_config<P: AsRef<std::path::Path>>(json_path: P) -> Result<RunConf> {
    let json_path = json_path.as_ref();
    let reader = File::open(json_path).map_err(|e| Error::io(json_path, e))?;
    let res: RunConf = serde_json::from_reader(reader)?;
    Ok(res)
}

/// Summarized config used by different parts of the program
#[derive(Debug, Clone, PartialEq)]
pub struct ProgConfig {
    pub longread_path: String,
    pub pattern_path: String,
    pub output: Option<String>,
    pub pattern_report: Option<String>,
    pub mode: Mode,
    pub not_found: NotFoundPolicy,
    pub strict: bool,
    pub verbosity: u64,
}

pub fn cli_app() -> App<'static, 'static> {
    clap_app!(motif_splice =>
        (version: crate_version!())
        (author: "Stefan Holderbach")
        (about: "Locate motifs in long reads and excise (trim) or extract them")
        (@arg longread: -L --longread +takes_value +required "Long read file to be scanned (FASTQ, optionally compressed)")
        (@arg pattern: -P --pattern +takes_value +required "File with one motif per line")
        (@arg output: -o --output +takes_value "Write FASTA output to this file instead of stdout")
        (@arg mode: -m --mode +takes_value "trim (default) removes the motif, extract keeps only the motif")
        (@arg not_found: -n --("not-found") +takes_value "pass (default) emits reads without the motif unchanged, skip drops them")
        (@arg strict: -s --strict "Abort on malformed read records instead of dropping them")
        (@arg config: -c --config +takes_value "JSON run file with mode, not_found and strict")
        (@arg pattern_report: -r --("pattern-report") +takes_value "Also write a table with hits and misses per pattern")
        (@arg debug: -d ... "Sets the level of debugging information")
    )
}

impl ProgConfig {
    pub fn from_cli() -> Result<ProgConfig> {
        let matches = cli_app().get_matches();
        ProgConfig::from_matches(&matches)
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<ProgConfig> {
        // Both are required by clap
        let longread_path = matches.value_of("longread").unwrap_or_default();
        let pattern_path = matches.value_of("pattern").unwrap_or_default();

        let run_conf = match matches.value_of("config") {
            Some(path) => load_json_config(path)?,
            None => RunConf::default(),
        };
        let mode = match matches.value_of("mode") {
            Some(s) => s.parse()?,
            None => run_conf.mode.unwrap_or_default(),
        };
        let not_found = match matches.value_of("not_found") {
            Some(s) => s.parse()?,
            None => run_conf.not_found.unwrap_or_default(),
        };
        let strict = matches.is_present("strict") || run_conf.strict.unwrap_or(false);

        Ok(ProgConfig {
            longread_path: longread_path.to_string(),
            pattern_path: pattern_path.to_string(),
            output: matches.value_of("output").map(str::to_string),
            pattern_report: matches.value_of("pattern_report").map(str::to_string),
            mode,
            not_found,
            strict,
            verbosity: matches.occurrences_of("debug"),
        })
    }
}

/// Set up `env_logger` from the number of `-d` flags; `RUST_LOG` still takes precedence
pub fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Result<ProgConfig> {
        let matches = cli_app().get_matches_from_safe(args).unwrap();
        ProgConfig::from_matches(&matches)
    }

    #[test]
    fn test_json_type() {
        let js_str: &'static str = r#"{
      "mode": "extract",
      "not_found": "skip"
  }"#;

        let result: RunConf = serde_json::from_str(js_str).unwrap();
        assert_eq!(result.mode, Some(Mode::Extract));
        assert_eq!(result.not_found, Some(NotFoundPolicy::Skip));
        assert_eq!(result.strict, None);
        assert!(serde_json::from_str::<RunConf>(r#"{"tolerance": 3}"#).is_err());
    }

    #[test]
    fn defaults() {
        let cfg = parse(&["motif_splice", "-L", "reads.fq", "-P", "pats.txt"]).unwrap();
        assert_eq!(
            cfg,
            ProgConfig {
                longread_path: "reads.fq".into(),
                pattern_path: "pats.txt".into(),
                output: None,
                pattern_report: None,
                mode: Mode::Trim,
                not_found: NotFoundPolicy::Pass,
                strict: false,
                verbosity: 0,
            }
        );
    }

    #[test]
    fn cli_overrides_run_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, r#"{{"mode": "extract", "not_found": "skip", "strict": true}}"#).unwrap();
        let conf_path = tmp.path().to_str().unwrap();
        let cfg = parse(&[
            "motif_splice", "-L", "r.fq", "-P", "p.txt", "-c", conf_path, "-m", "trim", "-dd",
        ])
        .unwrap();
        assert_eq!(cfg.mode, Mode::Trim);
        assert_eq!(cfg.not_found, NotFoundPolicy::Skip);
        assert!(cfg.strict);
        assert_eq!(cfg.verbosity, 2);
    }

    #[test]
    fn rejects_unknown_mode() {
        let res = parse(&["motif_splice", "-L", "r.fq", "-P", "p.txt", "--mode", "cut"]);
        assert!(matches!(res, Err(Error::Config(_))));
    }

    #[test]
    fn missing_required_paths() {
        assert!(cli_app()
            .get_matches_from_safe(&["motif_splice", "-L", "r.fq"])
            .is_err());
    }
}
