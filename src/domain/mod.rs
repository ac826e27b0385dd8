pub mod data;
pub mod debug;
pub mod level;
pub mod style;
pub mod value;

pub use value::ConsoleValue;
