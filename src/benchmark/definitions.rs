//! The four fixed benchmark definitions.

use std::hint::black_box;

use crate::corpus::Corpus;
use crate::libraries::{JsonLibrary, LibraryError};

/// One (operation, workload) pair timed for every library
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BenchmarkKind {
    LoadsLarge,
    DumpsLarge,
    LoadsSmall,
    DumpsSmall,
}

impl BenchmarkKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadsLarge => "loads (large obj)",
            Self::DumpsLarge => "dumps (large obj)",
            Self::LoadsSmall => "loads (small objs)",
            Self::DumpsSmall => "dumps (small objs)",
        }
    }

    pub fn all() -> &'static [BenchmarkKind] {
        &[
            Self::LoadsLarge,
            Self::DumpsLarge,
            Self::LoadsSmall,
            Self::DumpsSmall,
        ]
    }

    /// Run one repetition of this benchmark's operation
    pub fn execute(&self, library: &dyn JsonLibrary, corpus: &Corpus) -> Result<(), LibraryError> {
        match self {
            Self::LoadsLarge => {
                black_box(library.decode(black_box(&corpus.large_document_raw))?);
            }
            Self::DumpsLarge => {
                black_box(library.encode(black_box(&corpus.large_document_decoded))?);
            }
            Self::LoadsSmall => {
                for line in &corpus.small_documents_raw {
                    black_box(library.decode(black_box(line))?);
                }
            }
            Self::DumpsSmall => {
                for value in &corpus.small_documents_decoded {
                    black_box(library.encode(black_box(value))?);
                }
            }
        }
        Ok(())
    }
}
