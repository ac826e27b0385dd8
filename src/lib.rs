#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

#[cfg(target_arch = "wasm32")]
pub mod global;

pub use domain::data::DataMap;
pub use domain::debug::{Configuration, DebugError, DebugOptions, DebugWeb, ErrorArg};
pub use domain::level::{LevelGate, LogLevel};
pub use domain::style::{StyleMap, StyleUpdate};
pub use domain::ConsoleValue;
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
