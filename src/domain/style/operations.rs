use super::types::StyleMap;
use crate::domain::level::LogLevel;
use crate::domain::value::ConsoleValue;

/// Builds the `%c` marker for `value` and pairs it with `style`.
///
/// Background styles get a space on each side so the colored block does not
/// hug the text.
pub fn build_marker<V: ConsoleValue>(value: &V, style: &str) -> (String, String) {
    let text = value.to_text();
    let marker = if style.contains("background") {
        format!("%c {text} ")
    } else {
        format!("%c{text}")
    };
    (marker, style.to_string())
}

/// Applies `style` to the first argument only.
pub fn decorate_first<V: ConsoleValue>(args: Vec<V>, style: Option<&str>) -> Vec<V> {
    let style = match style {
        Some(style) if !style.is_empty() => style,
        _ => return args,
    };

    let mut rest = args.into_iter();
    let Some(first) = rest.next() else {
        return Vec::new();
    };

    let (marker, style) = build_marker(&first, style);
    let mut decorated = Vec::with_capacity(rest.len() + 2);
    decorated.push(V::from_text(marker));
    decorated.push(V::from_text(style));
    decorated.extend(rest);
    decorated
}

pub fn css(background: &str, color: &str) -> String {
    format!("background-color: {background}; color: {color}; padding: 2px; border-radius: 3px;")
}

pub fn default_styles() -> StyleMap {
    [
        (LogLevel::Info, Some(css("#155adc", "#fff"))),
        (LogLevel::Success, Some(css("#13a10e", "#fff"))),
        (LogLevel::Warn, Some(css("#ffa500", "#fff"))),
        (LogLevel::Error, Some(css("#dc143c", "#fff"))),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_build_marker_pads_background_styles() {
        let (marker, style) = build_marker(&json!("Test"), "background-color: red");
        assert_eq!(marker, "%c Test ");
        assert_eq!(style, "background-color: red");
    }

    #[test]
    fn test_build_marker_without_background() {
        let (marker, style) = build_marker(&json!("Test"), "color: red");
        assert_eq!(marker, "%cTest");
        assert_eq!(style, "color: red");
    }

    #[test]
    fn test_build_marker_stringifies_non_text() {
        let (marker, _) = build_marker(&json!(123), "color: red");
        assert_eq!(marker, "%c123");
    }

    #[test]
    fn test_decorate_first_adds_one_argument() {
        let args = vec![json!("Hello"), json!("World"), json!(1)];
        let decorated = decorate_first(args.clone(), Some("color: red"));

        assert_eq!(decorated.len(), args.len() + 1);
        assert_eq!(
            decorated,
            vec![json!("%cHello"), json!("color: red"), json!("World"), json!(1)]
        );
    }

    #[test]
    fn test_decorate_first_without_style_is_identity() {
        let args = vec![json!("Hello"), json!("World")];
        assert_eq!(decorate_first(args.clone(), None), args);
        assert_eq!(decorate_first(args.clone(), Some("")), args);
    }

    #[test]
    fn test_decorate_first_empty_args() {
        let args: Vec<Value> = Vec::new();
        assert!(decorate_first(args, Some("color: red")).is_empty());
    }

    #[test]
    fn test_css_template() {
        assert_eq!(
            css("#000", "#fff"),
            "background-color: #000; color: #fff; padding: 2px; border-radius: 3px;"
        );
    }

    #[test]
    fn test_default_styles() {
        let styles = default_styles();
        assert_eq!(styles.len(), 4);
        assert!(styles.get(&LogLevel::Info).unwrap().contains("#155adc"));
        assert!(styles.get(&LogLevel::Success).unwrap().contains("#13a10e"));
        assert!(styles.get(&LogLevel::Warn).unwrap().contains("#ffa500"));
        assert!(styles.get(&LogLevel::Error).unwrap().contains("#dc143c"));
        assert_eq!(styles.get(&LogLevel::Debug), None);
        assert_eq!(styles.get(&LogLevel::Log), None);
    }
}
