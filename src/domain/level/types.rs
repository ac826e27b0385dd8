use std::fmt;

/// Logging level name.
///
/// Any name outside the built-in set is kept as `Custom` and accepted
/// everywhere a level is expected. Build levels from strings with `From`
/// so that known names never end up wrapped in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogLevel {
    Debug,
    Log,
    Info,
    Success,
    Warn,
    Error,
    Custom(String),
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Log => "log",
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Custom(name) => name,
        }
    }

    fn known(name: &str) -> Option<Self> {
        match name {
            "debug" => Some(LogLevel::Debug),
            "log" => Some(LogLevel::Log),
            "info" => Some(LogLevel::Info),
            "success" => Some(LogLevel::Success),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl From<&str> for LogLevel {
    fn from(name: &str) -> Self {
        LogLevel::known(name).unwrap_or_else(|| LogLevel::Custom(name.to_string()))
    }
}

impl From<String> for LogLevel {
    fn from(name: String) -> Self {
        LogLevel::known(&name).unwrap_or(LogLevel::Custom(name))
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_parse_to_variants() {
        assert_eq!(LogLevel::from("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from("success"), LogLevel::Success);
        assert_eq!(LogLevel::from("error".to_string()), LogLevel::Error);
    }

    #[test]
    fn test_unknown_names_are_custom() {
        assert_eq!(
            LogLevel::from("verbose"),
            LogLevel::Custom("verbose".to_string())
        );
        assert_eq!(LogLevel::from("INFO"), LogLevel::Custom("INFO".to_string()));
    }

    #[test]
    fn test_serde_uses_plain_names() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");

        let level: LogLevel = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(level, LogLevel::Custom("custom".to_string()));
        assert_eq!(level.to_string(), "custom");
    }
}
