pub mod error;
pub mod operations;
pub mod types;

pub use error::DebugError;
pub use operations::DebugWeb;
pub use types::{Configuration, DebugOptions, ErrorArg, DEFAULT_APP, DEFAULT_PROP};
