use crate::domain::debug::{DebugError, DebugOptions, ErrorArg};
use crate::domain::level::LogLevel;
use crate::domain::style::StyleUpdate;
use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

fn is_missing(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

fn is_plain_object(value: &JsValue) -> bool {
    value.is_object() && !Array::is_array(value)
}

/// `undefined` and `null` become `None`.
pub fn optional(value: JsValue) -> Option<JsValue> {
    if is_missing(&value) {
        None
    } else {
        Some(value)
    }
}

/// `debugInit` options. `data` stays a JS value so it can hold anything.
#[derive(Debug, Default)]
pub struct JsOptions {
    pub options: DebugOptions,
    pub data: Option<JsValue>,
}

// Reads and removes `key` from `object`.
fn take(object: &Object, key: &str) -> JsValue {
    let key = JsValue::from_str(key);
    let value = Reflect::get(object, &key).unwrap_or(JsValue::UNDEFINED);
    let _ = Reflect::delete_property(object, &key);
    value
}

/// `app` and `style` go through serde. `level`, `prop` and `data` are read
/// by hand: an `undefined` field is left alone, a `null` or non-string level
/// means `info`, a `null` or non-string prop disables the property.
pub fn js_to_options(value: JsValue) -> Result<JsOptions, DebugError> {
    if is_missing(&value) {
        return Ok(JsOptions::default());
    }
    if !is_plain_object(&value) {
        return Err(DebugError::invalid_options("options must be an object"));
    }

    let rest = Object::assign(&Object::new(), value.unchecked_ref());
    let data = optional(take(&rest, "data"));
    let level = take(&rest, "level");
    let prop = take(&rest, "prop");

    let mut options: DebugOptions = from_value(rest.into())?;
    if !level.is_undefined() {
        options.level = Some(level.as_string().map_or(LogLevel::Info, LogLevel::from));
    }
    if !prop.is_undefined() {
        options.prop = Some(prop.as_string());
    }

    Ok(JsOptions { options, data })
}

/// Any non-array object is accepted; its values are not inspected.
pub fn js_to_data(value: JsValue) -> Result<Object, DebugError> {
    if !is_plain_object(&value) {
        return Err(DebugError::invalid_options("data must be an object"));
    }
    Ok(value.unchecked_into())
}

/// Picks the `setStyle` form from the shape of the first argument.
pub fn js_to_style_update(level_or_map: JsValue, style: JsValue) -> Result<StyleUpdate, DebugError> {
    if let Some(level) = level_or_map.as_string() {
        let style = match optional(style) {
            None => None,
            Some(style) => Some(
                style
                    .as_string()
                    .ok_or_else(|| DebugError::invalid_options("style must be a string or null"))?,
            ),
        };
        return Ok(StyleUpdate::Single {
            level: LogLevel::from(level),
            style,
        });
    }

    if is_plain_object(&level_or_map) {
        return Ok(StyleUpdate::ReplaceAll(from_value(level_or_map)?));
    }

    Err(DebugError::invalid_options(
        "expected a level name or a styles map",
    ))
}

/// `Error` instances become message and stack; anything else is kept as-is.
pub fn js_to_error_arg(value: JsValue) -> ErrorArg<JsValue> {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let stack = Reflect::get(error, &JsValue::from_str("stack"))
            .ok()
            .and_then(|stack| stack.as_string());
        return ErrorArg::Error {
            message: String::from(error.message()),
            stack,
        };
    }
    ErrorArg::Value(value)
}

pub fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, DebugError> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}
