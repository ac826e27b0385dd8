use crate::domain::ConsoleValue;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

impl ConsoleValue for JsValue {
    fn from_text(text: String) -> Self {
        JsValue::from(text)
    }

    /// Same conversion as a JS template literal: `String(value)`.
    fn to_text(&self) -> String {
        self.as_string().unwrap_or_else(|| js_string(self))
    }

    fn undefined() -> Self {
        JsValue::UNDEFINED
    }
}
