use crate::ports::clock::ClockPort;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, Default)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_now_returns_valid_unix_timestamp() {
        let clock = Clock::new();
        let timestamp = clock.now();

        assert!(
            timestamp > 1_577_836_800_000.0,
            "Timestamp should be after 2020: {}",
            timestamp
        );
    }

    #[test]
    fn test_clock_advances() {
        let clock = Clock::new();
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let t2 = clock.now();

        assert!(t2 - t1 >= 5.0, "Should have elapsed at least 5ms, got: {}ms", t2 - t1);
    }
}
