use serde_json::Value;

use super::{JsonLibrary, LibraryError};

/// `serde_json` decoding into its dynamic `Value`
pub struct SerdeJson;

impl JsonLibrary for SerdeJson {
    fn name(&self) -> &'static str {
        "serde_json"
    }

    fn decode(&self, raw: &str) -> Result<usize, LibraryError> {
        let value: Value = serde_json::from_str(raw).map_err(LibraryError::new)?;
        std::hint::black_box(&value);
        Ok(raw.len())
    }

    fn encode(&self, value: &Value) -> Result<String, LibraryError> {
        serde_json::to_string(value).map_err(LibraryError::new)
    }
}
