use serde_json::Value;

use super::{JsonLibrary, LibraryError};

/// `simd-json` decoding into its owned value tree.
///
/// simd-json parses in place, so every decode works on a fresh copy of the
/// input; the copy is part of the measured cost.
pub struct SimdJson;

impl JsonLibrary for SimdJson {
    fn name(&self) -> &'static str {
        "simd-json"
    }

    fn decode(&self, raw: &str) -> Result<usize, LibraryError> {
        let mut bytes = raw.as_bytes().to_vec();
        let value = simd_json::to_owned_value(&mut bytes).map_err(LibraryError::new)?;
        std::hint::black_box(&value);
        Ok(raw.len())
    }

    fn encode(&self, value: &Value) -> Result<String, LibraryError> {
        simd_json::to_string(value).map_err(LibraryError::new)
    }
}
