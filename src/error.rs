//! Error types for the harness.
//!
//! Everything here is fatal for a run. Recoverable conditions (a library or
//! the chart backend not being compiled in) never become errors; they are
//! logged and skipped where they are detected.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a fixture file could not be used
#[derive(Debug, Error)]
pub enum FixtureFault {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid JSON on line {line}")]
    Syntax {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("fixture {} is missing or invalid", path.display())]
    ResourceMissing {
        path: PathBuf,
        #[source]
        source: FixtureFault,
    },

    #[error("{library} failed during '{benchmark}': {message}")]
    Library {
        library: String,
        benchmark: String,
        message: String,
    },

    #[error("failed to write {}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to render chart: {0}")]
    Chart(String),
}

impl BenchError {
    pub(crate) fn resource_missing(path: impl Into<PathBuf>, source: impl Into<FixtureFault>) -> Self {
        Self::ResourceMissing {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T, E = BenchError> = std::result::Result<T, E>;
