pub mod operations;
pub mod types;

pub use operations::{build_marker, css, decorate_first, default_styles};
pub use types::{StyleMap, StyleUpdate};
