use serde_json::Value;

/// A value that can travel through a console call.
///
/// The styling path needs to turn the first argument into text and to
/// produce new text arguments (the `%c` marker and the CSS string), so every
/// console backend's value type implements this.
pub trait ConsoleValue: Clone + 'static {
    /// Wraps a piece of text as a console argument.
    fn from_text(text: String) -> Self;

    /// Renders the value the way the host would stringify it.
    fn to_text(&self) -> String;

    /// The host's "missing argument" value, used as a positional placeholder.
    fn undefined() -> Self;
}

impl ConsoleValue for Value {
    fn from_text(text: String) -> Self {
        Value::String(text)
    }

    fn to_text(&self) -> String {
        match self {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    fn undefined() -> Self {
        Value::Null
    }
}
