use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Longest line, in code points, that is kept as a candidate by default.
pub const DEFAULT_MAX_LINE_CHARS: usize = 4096;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read candidates: {0}")]
    Read(#[from] io::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// Lines with more code points than this are skipped.
    pub max_line_chars: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_line_chars: DEFAULT_MAX_LINE_CHARS,
        }
    }
}

/// Open `path` for reading, or stdin when `path` is `None` or `-`.
///
/// Files ending in `.gz` are decompressed on the fly.
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>, SourceError> {
    let path = match path {
        None => return Ok(Box::new(io::stdin().lock())),
        Some(p) if p == Path::new("-") => return Ok(Box::new(io::stdin().lock())),
        Some(p) => p,
    };
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        debug!(path = %path.display(), "reading gzip compressed candidates");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read one candidate per line.
///
/// Line endings (`\n` or `\r\n`) are dropped, blank lines are skipped and
/// invalid UTF-8 is replaced rather than rejected.
pub fn read_candidates<R: BufRead>(
    mut reader: R,
    options: &ReadOptions,
) -> Result<Vec<String>, SourceError> {
    let mut candidates = Vec::new();
    let mut buf = Vec::new();
    let mut line_number: usize = 0;
    let mut skipped: usize = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        if buf.is_empty() {
            continue;
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        let chars = line.chars().count();
        if chars > options.max_line_chars {
            warn!(
                line = line_number,
                chars,
                max = options.max_line_chars,
                "skipping over-long candidate"
            );
            skipped += 1;
            continue;
        }
        candidates.push(line);
    }

    debug!(read = candidates.len(), skipped, "candidates loaded");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::env::temp_dir;
    use std::io::{Cursor, Write};
    use uuid::Uuid;

    fn read(input: &[u8], options: &ReadOptions) -> Vec<String> {
        read_candidates(Cursor::new(input.to_vec()), options).unwrap()
    }

    #[test]
    fn test_line_endings_and_blank_lines() {
        let lines = read(b"alpha\r\nbeta\n\n\ngamma", &ReadOptions::default());
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let lines = read(b"ok\nbad\xffbyte\n", &ReadOptions::default());
        assert_eq!(lines, vec!["ok".to_string(), "bad\u{fffd}byte".to_string()]);
    }

    #[test]
    fn test_max_line_chars_counts_code_points() {
        let options = ReadOptions { max_line_chars: 3 };
        let lines = read("日本語\n日本語の\nabc\nabcd\n".as_bytes(), &options);
        assert_eq!(lines, vec!["日本語", "abc"]);
    }

    #[test]
    fn test_open_plain_and_gzip_files() {
        let mut plain = temp_dir();
        plain.push(format!("{}.txt", Uuid::new_v4()));
        std::fs::write(&plain, "src/main.rs\nsrc/lib.rs\n").unwrap();

        let mut gz = temp_dir();
        gz.push(format!("{}.txt.gz", Uuid::new_v4()));
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(b"src/main.rs\nsrc/lib.rs\n").unwrap();
        encoder.finish().unwrap();

        for path in [&plain, &gz] {
            let reader = open(Some(path.as_path())).unwrap();
            let lines = read_candidates(reader, &ReadOptions::default()).unwrap();
            assert_eq!(lines, vec!["src/main.rs", "src/lib.rs"]);
        }

        std::fs::remove_file(plain).unwrap();
        std::fs::remove_file(gz).unwrap();
    }

    #[test]
    fn test_open_missing_file() {
        let mut missing = temp_dir();
        missing.push(format!("{}.txt", Uuid::new_v4()));
        match open(Some(missing.as_path())) {
            Err(SourceError::Open { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected open error, got {:?}", other.map(|_| ())),
        }
    }
}
