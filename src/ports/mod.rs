/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The facade only talks to the host through these traits: the console it
/// writes to, the global object it exposes data on, and a clock for hosts
/// whose console has no native timers.

pub mod clock;
pub mod console;
pub mod global_scope;

pub use clock::ClockPort;
pub use console::{ConsoleMethod, ConsolePort};
pub use global_scope::GlobalScopePort;
