pub mod gate;
pub mod types;

pub use gate::{LevelGate, LEVEL_ERROR, LEVEL_INFO};
pub use types::LogLevel;
