use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::ErrorRateSeries;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error-rate file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{}:{line}: '{content}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        content: String,
    },

    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an error-rate file: one float per line, in file order.
///
/// Surrounding whitespace (including the newline and a `\r` from CRLF files)
/// is stripped before parsing. Blank lines are skipped. The first line that
/// does not parse aborts the whole load.
pub fn load(path: &Path) -> Result<ErrorRateSeries, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    parse_lines(BufReader::new(file), path)
}

fn parse_lines<R: BufRead>(reader: R, path: &Path) -> Result<ErrorRateSeries, LoadError> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| LoadError::io(path, e))?;
        let content = line.trim();
        if content.is_empty() {
            continue;
        }

        let value = content.parse::<f64>().map_err(|_| LoadError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            content: content.to_string(),
        })?;
        values.push(value);
    }

    Ok(ErrorRateSeries::new(values))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn loads_values_in_file_order() {
        let f = write_temp("0.5\n0.3\n0.1\n");
        let series = load(f.path()).unwrap();
        assert_eq!(series.values(), &[0.5, 0.3, 0.1]);
    }

    #[test]
    fn last_line_without_newline() {
        let f = write_temp("1\n2.5\n-3e-2");
        let series = load(f.path()).unwrap();
        assert_eq!(series.values(), &[1.0, 2.5, -0.03]);
    }

    #[test]
    fn duplicates_and_non_monotonic_values_are_kept() {
        let f = write_temp("0.2\n0.4\n0.2\n0.2\n0.1\n");
        let series = load(f.path()).unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(series.values(), &[0.2, 0.4, 0.2, 0.2, 0.1]);
    }

    #[test]
    fn written_sequence_reloads_exactly() {
        let expected = [0.104_345_678_901_234_5, 0.1, 1e-9, 12345.678, 0.0, 0.099_999];
        let text: String = expected.iter().map(|v| format!("{v}\n")).collect();
        let f = write_temp(&text);

        let series = load(f.path()).unwrap();
        assert_eq!(series.values(), &expected);
    }

    #[test]
    fn crlf_and_blank_lines() {
        let f = write_temp("0.5\r\n\r\n0.4\r\n  \n0.3\n\n");
        let series = load(f.path()).unwrap();
        assert_eq!(series.values(), &[0.5, 0.4, 0.3]);
    }

    #[test]
    fn empty_file_gives_empty_series() {
        let f = write_temp("");
        assert!(load(f.path()).unwrap().is_empty());
    }

    #[test]
    fn unparsable_line_aborts_load() {
        let f = write_temp("0.5\n0.4\nabc\n0.3\n");
        match load(f.path()) {
            Err(LoadError::Parse { line, content, path }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "abc");
                assert_eq!(path, f.path());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("errors.txt");
        match load(&path) {
            Err(LoadError::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(&[0x30, 0x2e, 0x35, 0x0a, 0xff, 0xfe, 0x0a]).unwrap();
        f.flush().unwrap();
        assert!(matches!(load(f.path()), Err(LoadError::Io { .. })));
    }

    #[test]
    fn error_messages_name_the_file() {
        let err = LoadError::Parse {
            path: PathBuf::from("blunder/errors.txt"),
            line: 7,
            content: "x".into(),
        };
        assert_eq!(err.to_string(), "blunder/errors.txt:7: 'x' is not a number");
    }
}
