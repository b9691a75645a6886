use serde_json::Value;

use super::{JsonLibrary, LibraryError};

/// `sonic-rs` decoding into its dynamic `Value`
pub struct SonicRs;

impl JsonLibrary for SonicRs {
    fn name(&self) -> &'static str {
        "sonic-rs"
    }

    fn decode(&self, raw: &str) -> Result<usize, LibraryError> {
        let value: sonic_rs::Value = sonic_rs::from_str(raw).map_err(LibraryError::new)?;
        std::hint::black_box(&value);
        Ok(raw.len())
    }

    fn encode(&self, value: &Value) -> Result<String, LibraryError> {
        sonic_rs::to_string(value).map_err(LibraryError::new)
    }
}
