use super::types::LogLevel;

/// Priority of `info`, also used for every level without its own entry.
pub const LEVEL_INFO: u8 = 2;
pub const LEVEL_ERROR: u8 = 4;

/// Priority threshold deciding which calls reach the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelGate {
    threshold: u8,
}

impl LevelGate {
    /// A gate with every level enabled.
    pub fn new() -> Self {
        Self { threshold: 0 }
    }

    pub fn priority_of(level: &LogLevel) -> u8 {
        match level {
            LogLevel::Debug => 0,
            LogLevel::Log => 1,
            LogLevel::Info => LEVEL_INFO,
            LogLevel::Warn => 3,
            LogLevel::Error => LEVEL_ERROR,
            LogLevel::Success | LogLevel::Custom(_) => LEVEL_INFO,
        }
    }

    pub fn set_threshold(&mut self, level: &LogLevel) {
        self.threshold = Self::priority_of(level);
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn is_enabled(&self, level: &LogLevel) -> bool {
        Self::priority_of(level) >= self.threshold
    }

    pub fn reset(&mut self) {
        self.threshold = 0;
    }
}
