use crate::domain::debug::DebugError;

impl From<serde_wasm_bindgen::Error> for DebugError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        DebugError::serialization_error(err.to_string())
    }
}
