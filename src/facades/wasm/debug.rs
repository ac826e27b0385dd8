//! JS API over the process-wide `DebugWeb` instance.
//!
//! Variadic console arguments are passed as arrays. Malformed options, data
//! or styles are reported with `console.warn` and otherwise ignored.

use super::converters::{self, JsOptions};
use crate::adapters::wasm::JsGlobalScope;
use crate::domain::debug::{DebugError, DebugWeb};
use crate::domain::level::LogLevel;
use crate::platform::Platform;
use crate::ports::ConsoleMethod;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static DEBUG: RefCell<DebugWeb<JsValue>> = RefCell::new(DebugWeb::new(Platform::new()));
}

// Exports run on a copy of the instance: a patched `console` method may call
// back into these exports while we are writing to it.
fn current() -> Option<DebugWeb<JsValue>> {
    DEBUG.with(|cell| cell.try_borrow().ok().map(|debug| debug.clone()))
}

fn with_debug<R>(f: impl FnOnce(&DebugWeb<JsValue>) -> R) -> Option<R> {
    current().map(|debug| f(&debug))
}

// Changes made re-entrantly while `f` runs are overwritten.
fn update(f: impl FnOnce(&mut DebugWeb<JsValue>)) {
    let Some(mut debug) = current() else {
        return;
    };
    f(&mut debug);
    DEBUG.with(|cell| {
        if let Ok(mut slot) = cell.try_borrow_mut() {
            *slot = debug;
        }
    });
}

fn report(error: DebugError) {
    with_debug(|debug| {
        debug.platform().console().write(
            ConsoleMethod::Warn,
            vec![JsValue::from_str(&format!("webdebug: {error}"))],
        )
    });
}

/// Configures the logger. Called once at the application entry point.
#[wasm_bindgen(js_name = debugInit)]
pub fn debug_init(options: JsValue) {
    match converters::js_to_options(options) {
        Ok(JsOptions { options, data }) => {
            update(|debug| debug.init(options));
            if let Some(data) = data {
                debug_data(data);
            }
        }
        Err(error) => report(error),
    }
}

/// Installs the exposed global property again.
#[wasm_bindgen(js_name = debugAttach)]
pub fn debug_attach() {
    with_debug(|debug| debug.attach());
}

#[wasm_bindgen]
pub fn log(attrs: Vec<JsValue>) {
    with_debug(|debug| debug.log(attrs));
}

#[wasm_bindgen(js_name = logAt)]
pub fn log_at(level: String, attrs: Vec<JsValue>) {
    with_debug(|debug| debug.log_at(&LogLevel::from(level), attrs));
}

#[wasm_bindgen]
pub fn info(attrs: Vec<JsValue>) {
    with_debug(|debug| debug.info(attrs));
}

#[wasm_bindgen]
pub fn success(attrs: Vec<JsValue>) {
    with_debug(|debug| debug.success(attrs));
}

#[wasm_bindgen]
pub fn warn(attrs: Vec<JsValue>) {
    with_debug(|debug| debug.warn(attrs));
}

#[wasm_bindgen]
pub fn error(error: JsValue, attrs: Vec<JsValue>) {
    let error = converters::js_to_error_arg(error);
    with_debug(|debug| debug.error(error, attrs));
}

#[wasm_bindgen]
pub fn debug(attrs: Vec<JsValue>) {
    with_debug(|debug| debug.debug(attrs));
}

/// `level` only selects the style of the label.
#[wasm_bindgen]
pub fn group(collapsed: Option<bool>, level: Option<String>, attrs: Vec<JsValue>) {
    let level = level.map(LogLevel::from);
    with_debug(|debug| debug.group(collapsed.unwrap_or(false), level.as_ref(), attrs));
}

#[wasm_bindgen(js_name = groupEnd)]
pub fn group_end() {
    with_debug(|debug| debug.group_end());
}

#[wasm_bindgen]
pub fn dir(value: JsValue, options: JsValue) {
    with_debug(|debug| debug.dir(value, converters::optional(options)));
}

#[wasm_bindgen]
pub fn dirxml(attrs: Vec<JsValue>) {
    with_debug(|debug| debug.dirxml(attrs));
}

#[wasm_bindgen]
pub fn count(label: Option<String>) {
    with_debug(|debug| debug.count(label.as_deref()));
}

#[wasm_bindgen(js_name = countReset)]
pub fn count_reset(label: Option<String>) {
    with_debug(|debug| debug.count_reset(label.as_deref()));
}

#[wasm_bindgen]
pub fn table(data: JsValue, properties: JsValue) {
    with_debug(|debug| debug.table(data, converters::optional(properties)));
}

#[wasm_bindgen]
pub fn time(label: Option<String>) {
    with_debug(|debug| debug.time(label.as_deref()));
}

#[wasm_bindgen(js_name = timeLog)]
pub fn time_log(label: Option<String>, attrs: Vec<JsValue>) {
    with_debug(|debug| debug.time_log(label.as_deref(), attrs));
}

#[wasm_bindgen(js_name = timeEnd)]
pub fn time_end(label: Option<String>) {
    with_debug(|debug| debug.time_end(label.as_deref()));
}

#[wasm_bindgen]
pub fn trace(attrs: Vec<JsValue>) {
    with_debug(|debug| debug.trace(attrs));
}

/// Merges `data` into the debugging data of the current app with
/// `Object.assign`. Values are stored as they are.
#[wasm_bindgen(js_name = debugData)]
pub fn debug_data(data: JsValue) {
    match converters::js_to_data(data) {
        Ok(data) => {
            with_debug(|debug| JsGlobalScope::assign(&debug.config().app_name, &data));
        }
        Err(error) => report(error),
    }
}

/// The live data object, the same one the exposed property returns.
/// `undefined` when there is none.
#[wasm_bindgen(js_name = debugGetData)]
pub fn debug_get_data() -> JsValue {
    with_debug(|debug| JsGlobalScope::raw_data(&debug.config().app_name))
        .unwrap_or(JsValue::UNDEFINED)
}

/// `debugSetStyle('info', 'color: #155adc')` updates one level,
/// `debugSetStyle({ info: '...' })` replaces the whole table.
#[wasm_bindgen(js_name = debugSetStyle)]
pub fn debug_set_style(level_or_map: JsValue, style: JsValue) {
    match converters::js_to_style_update(level_or_map, style) {
        Ok(style) => update(|debug| debug.set_style(style)),
        Err(error) => report(error),
    }
}

/// Copy of the style table as a plain object. Changing it has no effect;
/// use `debugSetStyle`.
#[wasm_bindgen(js_name = debugGetStyle)]
pub fn debug_get_style() -> JsValue {
    with_debug(|debug| converters::to_js_value(debug.styles()).ok())
        .flatten()
        .unwrap_or(JsValue::UNDEFINED)
}

/// Clears the debugging data and removes the global references.
#[wasm_bindgen(js_name = debugReset)]
pub fn debug_reset() {
    update(|debug| debug.reset());
}
