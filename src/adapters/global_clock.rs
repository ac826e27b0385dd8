use crate::adapters::native::Clock;
use crate::ports::clock::ClockPort;
use once_cell::sync::Lazy;

static CLOCK: Lazy<Clock> = Lazy::new(Clock::new);

/// Returns a reference to the global clock instance
pub fn clock() -> &'static dyn ClockPort {
    &*CLOCK
}
