/// Native adapters - implementations for native Rust (non-WASM).

pub mod clock;
pub mod terminal_console;

pub use clock::Clock;
pub use terminal_console::{Line, Stream, TerminalConsole};
