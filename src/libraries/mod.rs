//! Candidate JSON libraries and the registry that resolves them.
//!
//! A candidate is "installed" when its cargo feature was enabled at build
//! time. Resolution happens once, in candidate order, so reports list
//! libraries in the same order on every run of a given build.

mod serde_json_lib;
#[cfg(feature = "simd-json")]
mod simd_json_lib;
#[cfg(feature = "sonic-rs")]
mod sonic_rs_lib;

use serde_json::Value;
use tracing::{debug, warn};

pub use serde_json_lib::SerdeJson;
#[cfg(feature = "simd-json")]
pub use simd_json_lib::SimdJson;
#[cfg(feature = "sonic-rs")]
pub use sonic_rs_lib::SonicRs;

/// Failure reported by a library while it is being measured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryError(pub String);

impl LibraryError {
    pub fn new(err: impl std::fmt::Display) -> Self {
        Self(err.to_string())
    }
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for LibraryError {}

/// An encode/decode pair under measurement.
///
/// Implementations return their output so the runner can keep it opaque to
/// the optimizer; callers never inspect it.
pub trait JsonLibrary {
    /// Name used in every report
    fn name(&self) -> &'static str;

    /// Decode one document, returning the number of bytes consumed
    fn decode(&self, raw: &str) -> Result<usize, LibraryError>;

    /// Encode one value to text
    fn encode(&self, value: &Value) -> Result<String, LibraryError>;
}

/// Resolve a single candidate by name
pub fn resolve(name: &str) -> Option<Box<dyn JsonLibrary>> {
    match name {
        "serde_json" => Some(Box::new(SerdeJson)),
        #[cfg(feature = "simd-json")]
        "simd-json" => Some(Box::new(SimdJson)),
        #[cfg(feature = "sonic-rs")]
        "sonic-rs" => Some(Box::new(SonicRs)),
        _ => None,
    }
}

/// The libraries that resolved, in candidate order
#[derive(Default)]
pub struct Registry {
    libraries: Vec<Box<dyn JsonLibrary>>,
}

impl Registry {
    /// Resolve every candidate, warning about and skipping the absent ones
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = &'a str>) -> Self {
        Self::resolve_with(candidates, resolve)
    }

    /// Resolve with a caller-supplied lookup
    pub fn resolve_with<'a, F>(candidates: impl IntoIterator<Item = &'a str>, mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<Box<dyn JsonLibrary>>,
    {
        let mut libraries = Vec::new();
        for name in candidates {
            match lookup(name) {
                Some(library) => {
                    debug!("Resolved {}", name);
                    libraries.push(library);
                }
                None => warn!("Unable to load {}", name),
            }
        }
        Self { libraries }
    }

    /// Build directly from handles
    pub fn from_libraries(libraries: Vec<Box<dyn JsonLibrary>>) -> Self {
        Self { libraries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn JsonLibrary> {
        self.libraries.iter().map(|lib| &**lib)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|lib| lib.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}
