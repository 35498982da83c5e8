//! Daily value ingest.
//!
//! Sources are plain text with one decimal number per line, oldest day first.
//! Lines that do not parse (blank, malformed, not UTF-8, non-finite) are
//! skipped without being reported. Only failing to open or read the source is
//! an error.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::ReportError;

/// Parse one value per line from `reader`.
///
/// `origin` is only used for error context.
pub fn parse_values<R: Read>(reader: R, origin: &Path) -> Result<Vec<f64>, ReportError> {
    let mut values = Vec::new();
    let mut skipped = 0usize;

    for line in BufReader::new(reader).split(b'\n') {
        let line = line.map_err(|source| ReportError::Read {
            path: origin.to_path_buf(),
            parsed: values.len(),
            source,
        })?;
        match parse_line(&line) {
            Some(v) => values.push(v),
            None => skipped += 1,
        }
    }

    debug!(
        path = %origin.display(),
        parsed = values.len(),
        skipped,
        "parsed daily values"
    );
    Ok(values)
}

/// Open `path` and parse its values.
pub fn load_values(path: &Path) -> Result<Vec<f64>, ReportError> {
    let file = File::open(path).map_err(|source| ReportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_values(file, path)
}

/// Write values one per line, in the given order.
pub fn write_values(path: &Path, values: &[f64]) -> Result<(), ReportError> {
    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    for v in values {
        writeln!(out, "{v}").map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;
    Ok(())
}

fn parse_line(raw: &[u8]) -> Option<f64> {
    let text = std::str::from_utf8(raw).ok()?;
    let v = text.trim().parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};
    use std::path::PathBuf;

    /// Yields `data` and then fails.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            Ok(n)
        }
    }

    #[test]
    fn unparsable_lines_are_skipped() {
        let input = "5.0\n\nabc\n3.2\n";
        let values = parse_values(Cursor::new(input), Path::new("mem")).unwrap();
        assert_eq!(values, vec![5.0, 3.2]);
    }

    #[test]
    fn lines_with_trailing_text_are_skipped_whole() {
        let input = "12 units\n8\n3.5kg\n";
        let values = parse_values(Cursor::new(input), Path::new("mem")).unwrap();
        assert_eq!(values, vec![8.0]);
    }

    #[test]
    fn whitespace_crlf_and_missing_trailing_newline_are_tolerated() {
        let input = "  7\r\n\t1e2 \r\n-4.5";
        let values = parse_values(Cursor::new(input), Path::new("mem")).unwrap();
        assert_eq!(values, vec![7.0, 100.0, -4.5]);
    }

    #[test]
    fn non_finite_and_non_utf8_lines_are_skipped() {
        let mut input = b"inf\nNaN\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"2\n");
        let values = parse_values(Cursor::new(input), Path::new("mem")).unwrap();
        assert_eq!(values, vec![2.0]);
    }

    #[test]
    fn read_failure_is_fatal_and_reports_progress() {
        let reader = FailingReader {
            data: Cursor::new(b"1\n2\n".to_vec()),
        };
        let err = parse_values(reader, Path::new("broken.txt")).unwrap_err();
        match err {
            ReportError::Read { path, parsed, .. } => {
                assert_eq!(path, PathBuf::from("broken.txt"));
                assert_eq!(parsed, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_values(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ReportError::Open { .. }));
    }

    #[test]
    fn written_values_load_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("basic.txt");
        write_values(&path, &[3.0, 14.5, 0.0]).unwrap();
        assert_eq!(load_values(&path).unwrap(), vec![3.0, 14.5, 0.0]);
    }
}
