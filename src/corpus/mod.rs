//! Fixture loading.
//!
//! The corpus is read once at startup and borrowed, unchanged, by every
//! benchmark. Decoded forms are produced with `serde_json` so every library
//! encodes exactly the same values.

pub mod fixtures;

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{BenchError, FixtureFault, Result};

/// The fixed input data every library is measured against
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Raw text of the large document
    pub large_document_raw: String,
    /// Large document decoded by the reference decoder
    pub large_document_decoded: Value,
    /// Raw text of each small document, one per line
    pub small_documents_raw: Vec<String>,
    /// Small documents decoded by the reference decoder
    pub small_documents_decoded: Vec<Value>,
}

impl Corpus {
    /// Load both fixtures. Either file being unreadable or holding invalid
    /// JSON (on any line, for the line file) is fatal.
    pub fn load(large_path: &Path, small_path: &Path) -> Result<Self> {
        let large_document_raw = read_fixture(large_path)?;
        let large_document_decoded = serde_json::from_str(&large_document_raw).map_err(|source| {
            BenchError::resource_missing(large_path, FixtureFault::Syntax { line: source.line(), source })
        })?;

        let small_text = read_fixture(small_path)?;
        let small_documents_raw: Vec<String> = small_text.lines().map(str::to_owned).collect();
        let small_documents_decoded = small_documents_raw
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|source| {
                    BenchError::resource_missing(small_path, FixtureFault::Syntax { line: idx + 1, source })
                })
            })
            .collect::<Result<Vec<Value>>>()?;

        info!(
            "Loaded corpus: large document {} bytes, {} small documents",
            large_document_raw.len(),
            small_documents_raw.len()
        );

        Ok(Self {
            large_document_raw,
            large_document_decoded,
            small_documents_raw,
            small_documents_decoded,
        })
    }

    /// Number of small documents
    pub fn small_document_count(&self) -> usize {
        self.small_documents_raw.len()
    }
}

fn read_fixture(path: &Path) -> Result<String> {
    debug!("Reading fixture {}", path.display());
    fs::read_to_string(path).map_err(|e| BenchError::resource_missing(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("create fixture");
        file.write_all(contents.as_bytes()).expect("write fixture");
        path
    }

    #[test]
    fn loads_raw_and_decoded_forms() {
        let dir = tempfile::tempdir().unwrap();
        let large = write(dir.path(), "large.json", r#"{"statuses": [1, 2, 3]}"#);
        let small = write(dir.path(), "small.txt", "{\"a\": 1}\n[true, null]\n");

        let corpus = Corpus::load(&large, &small).unwrap();

        assert_eq!(corpus.large_document_decoded["statuses"][2], 3);
        assert_eq!(corpus.small_documents_raw, vec!["{\"a\": 1}", "[true, null]"]);
        assert_eq!(corpus.small_documents_decoded.len(), 2);
        assert_eq!(corpus.small_documents_decoded[1][0], true);
    }

    #[test]
    fn empty_line_file_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let large = write(dir.path(), "large.json", "{}");
        let small = write(dir.path(), "small.txt", "");

        let corpus = Corpus::load(&large, &small).unwrap();
        assert_eq!(corpus.small_document_count(), 0);
        assert!(corpus.small_documents_decoded.is_empty());
    }

    #[test]
    fn missing_file_is_resource_missing() {
        let dir = tempfile::tempdir().unwrap();
        let small = write(dir.path(), "small.txt", "1\n");

        let err = Corpus::load(&dir.path().join("absent.json"), &small).unwrap_err();
        match err {
            BenchError::ResourceMissing { path, source: FixtureFault::Io(_) } => {
                assert!(path.ends_with("absent.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn corrupt_line_reports_its_number() {
        let dir = tempfile::tempdir().unwrap();
        let large = write(dir.path(), "large.json", "{}");
        let small = write(dir.path(), "small.txt", "{\"ok\": 1}\n{\"broken\": \n[]\n");

        let err = Corpus::load(&large, &small).unwrap_err();
        match err {
            BenchError::ResourceMissing { path, source: FixtureFault::Syntax { line, .. } } => {
                assert!(path.ends_with("small.txt"));
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn corrupt_large_document_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let large = write(dir.path(), "large.json", "{\"statuses\": [");
        let small = write(dir.path(), "small.txt", "1\n");

        assert!(matches!(
            Corpus::load(&large, &small),
            Err(BenchError::ResourceMissing { .. })
        ));
    }
}
