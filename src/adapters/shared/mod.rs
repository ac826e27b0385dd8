/// Target-independent adapters.

pub mod detached_global;
pub mod memory_global;
pub mod recording_console;

pub use detached_global::DetachedGlobal;
pub use memory_global::MemoryGlobal;
pub use recording_console::{ConsoleCall, RecordingConsole};
