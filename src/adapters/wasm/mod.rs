/// WASM adapters - implementations using browser APIs.

pub mod console;
pub mod error_conversions;
pub mod global_scope;
pub mod value;

pub use console::JsConsole;
pub use global_scope::JsGlobalScope;
