use crate::domain::data::DataMap;
use crate::domain::level::{LevelGate, LogLevel};
use crate::domain::style::{default_styles, StyleMap};
use serde::{Deserialize, Deserializer};

pub const DEFAULT_APP: &str = "__web_debug__";
pub const DEFAULT_PROP: &str = "info";

/// Options accepted by `DebugWeb::init`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DebugOptions {
    /// Application name separating the data of apps sharing a global object.
    /// Blank names are ignored.
    #[serde(default)]
    pub app: Option<String>,

    /// Threshold level. Unknown names count as `info`.
    #[serde(default)]
    pub level: Option<LogLevel>,

    /// Name of the exposed global property. `Some(None)` disables it.
    #[serde(default, deserialize_with = "present")]
    pub prop: Option<Option<String>>,

    #[serde(default)]
    pub data: Option<DataMap>,

    /// Replaces the whole style table.
    #[serde(default)]
    pub style: Option<StyleMap>,
}

// Distinguishes an explicit `null` from a missing field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl DebugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app(mut self, app: impl Into<String>) -> Self {
        self.app = Some(app.into());
        self
    }

    pub fn level(mut self, level: impl Into<LogLevel>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn prop(mut self, prop: Option<&str>) -> Self {
        self.prop = Some(prop.map(str::to_string));
        self
    }

    pub fn data(mut self, data: DataMap) -> Self {
        self.data = Some(data);
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }
}

/// Process-wide logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub app_name: String,
    pub exposed_property: Option<String>,
    pub gate: LevelGate,
    pub styles: StyleMap,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP.to_string(),
            exposed_property: Some(DEFAULT_PROP.to_string()),
            gate: LevelGate::new(),
            styles: default_styles(),
        }
    }
}

/// First argument of an `error` call.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorArg<V> {
    /// An error object: its message, plus the stack trace when the host has one.
    Error {
        message: String,
        stack: Option<String>,
    },
    /// Anything else, printed as-is.
    Value(V),
}

impl<V> ErrorArg<V> {
    pub fn message(message: impl Into<String>) -> Self {
        ErrorArg::Error {
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(message: impl Into<String>, stack: impl Into<String>) -> Self {
        ErrorArg::Error {
            message: message.into(),
            stack: Some(stack.into()),
        }
    }

    /// Wraps a Rust error, capturing a backtrace when `RUST_BACKTRACE` enables one.
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        let backtrace = std::backtrace::Backtrace::capture();
        let stack = match backtrace.status() {
            std::backtrace::BacktraceStatus::Captured => Some(backtrace.to_string()),
            _ => None,
        };
        ErrorArg::Error {
            message: error.to_string(),
            stack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.app_name, DEFAULT_APP);
        assert_eq!(config.exposed_property.as_deref(), Some(DEFAULT_PROP));
        assert_eq!(config.gate.threshold(), 0);
        assert_eq!(config.styles, default_styles());
    }

    #[test]
    fn test_options_distinguish_null_prop_from_missing() {
        let missing: DebugOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.prop, None);

        let null: DebugOptions = serde_json::from_str(r#"{"prop": null}"#).unwrap();
        assert_eq!(null.prop, Some(None));

        let named: DebugOptions = serde_json::from_str(r#"{"prop": "dbg"}"#).unwrap();
        assert_eq!(named.prop, Some(Some("dbg".to_string())));
    }

    #[test]
    fn test_options_full_shape() {
        let options: DebugOptions = serde_json::from_str(
            r#"{"app": "shop", "level": "warn", "data": {"a": 1}, "style": {"info": "color: blue"}}"#,
        )
        .unwrap();

        assert_eq!(options.app.as_deref(), Some("shop"));
        assert_eq!(options.level, Some(LogLevel::Warn));
        assert_eq!(options.data.unwrap().get("a"), Some(&serde_json::json!(1)));
        assert_eq!(options.style.unwrap().get(&LogLevel::Info), Some("color: blue"));
    }

    #[test]
    fn test_options_builder() {
        let options = DebugOptions::new().app("shop").level("error").prop(None);
        assert_eq!(options.app.as_deref(), Some("shop"));
        assert_eq!(options.level, Some(LogLevel::Error));
        assert_eq!(options.prop, Some(None));
    }

    #[test]
    fn test_error_arg_from_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        match ErrorArg::<()>::from_error(&io) {
            ErrorArg::Error { message, .. } => assert_eq!(message, "disk full"),
            ErrorArg::Value(_) => panic!("expected an error"),
        }
    }
}
