pub mod converters;
pub mod debug;
