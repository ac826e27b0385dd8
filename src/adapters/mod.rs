/// Adapters module - platform-specific implementations of ports.

pub mod shared;

#[cfg(not(target_arch = "wasm32"))]
pub mod global_clock;
#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

pub use shared::{ConsoleCall, DetachedGlobal, MemoryGlobal, RecordingConsole};

#[cfg(target_arch = "wasm32")]
pub use wasm::{JsConsole, JsGlobalScope};
#[cfg(not(target_arch = "wasm32"))]
pub use native::TerminalConsole;

#[cfg(not(target_arch = "wasm32"))]
pub use global_clock::clock;
