pub mod debug;

pub use debug::*;
