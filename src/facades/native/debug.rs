//! Native Rust facade over the thread's `DebugWeb` instance.
//!
//! Mirrors the JS exports for Rust callers. The default instance writes to
//! the terminal and keeps its data in an in-memory global namespace; use
//! `install` to swap in other ports.

use crate::domain::data::DataMap;
use crate::domain::debug::{DebugOptions, DebugWeb, ErrorArg};
use crate::domain::level::LogLevel;
use crate::domain::style::{StyleMap, StyleUpdate};
use crate::platform::Platform;
use serde_json::Value;
use std::cell::RefCell;

thread_local! {
    static DEBUG: RefCell<DebugWeb<Value>> = RefCell::new(DebugWeb::new(Platform::new()));
}

/// Replaces the instance, returning the previous one.
pub fn install(debug: DebugWeb<Value>) -> DebugWeb<Value> {
    DEBUG.with(|cell| cell.replace(debug))
}

// Calls run on a copy of the instance so a console that calls back into this
// module never meets an outstanding borrow.
fn current() -> Option<DebugWeb<Value>> {
    DEBUG.with(|cell| cell.try_borrow().ok().map(|debug| debug.clone()))
}

/// Runs `f` against the instance. Returns `None` while the instance is
/// mutably borrowed by `with_debug_mut`.
pub fn with_debug<R>(f: impl FnOnce(&DebugWeb<Value>) -> R) -> Option<R> {
    current().map(|debug| f(&debug))
}

/// Live mutable access, e.g. `with_debug_mut(|d| d.styles_mut().set(..))`.
///
/// The instance stays borrowed while `f` runs: facade calls made from inside
/// `f` (or from a console it writes to) are dropped.
pub fn with_debug_mut<R>(f: impl FnOnce(&mut DebugWeb<Value>) -> R) -> Option<R> {
    DEBUG.with(|cell| cell.try_borrow_mut().ok().map(|mut debug| f(&mut debug)))
}

// Mutates a copy and stores it back. Changes made re-entrantly while `f`
// runs are overwritten.
fn update(f: impl FnOnce(&mut DebugWeb<Value>)) {
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

pub fn init(options: DebugOptions) {
    update(|debug| debug.init(options));
}

pub fn attach() {
    with_debug(|debug| debug.attach());
}

pub fn log(args: Vec<Value>) {
    with_debug(|debug| debug.log(args));
}

pub fn log_at(level: impl Into<LogLevel>, args: Vec<Value>) {
    let level = level.into();
    with_debug(|debug| debug.log_at(&level, args));
}

pub fn info(args: Vec<Value>) {
    with_debug(|debug| debug.info(args));
}

pub fn success(args: Vec<Value>) {
    with_debug(|debug| debug.success(args));
}

pub fn warn(args: Vec<Value>) {
    with_debug(|debug| debug.warn(args));
}

pub fn error(error: ErrorArg<Value>, args: Vec<Value>) {
    with_debug(|debug| debug.error(error, args));
}

pub fn debug(args: Vec<Value>) {
    with_debug(|debug| debug.debug(args));
}

pub fn group(collapsed: bool, level: Option<LogLevel>, args: Vec<Value>) {
    with_debug(|debug| debug.group(collapsed, level.as_ref(), args));
}

pub fn group_end() {
    with_debug(|debug| debug.group_end());
}

pub fn dir(value: Value, options: Option<Value>) {
    with_debug(|debug| debug.dir(value, options));
}

pub fn dirxml(args: Vec<Value>) {
    with_debug(|debug| debug.dirxml(args));
}

pub fn count(label: Option<&str>) {
    with_debug(|debug| debug.count(label));
}

pub fn count_reset(label: Option<&str>) {
    with_debug(|debug| debug.count_reset(label));
}

pub fn table(data: Value, properties: Option<Value>) {
    with_debug(|debug| debug.table(data, properties));
}

pub fn time(label: Option<&str>) {
    with_debug(|debug| debug.time(label));
}

pub fn time_log(label: Option<&str>, args: Vec<Value>) {
    with_debug(|debug| debug.time_log(label, args));
}

pub fn time_end(label: Option<&str>) {
    with_debug(|debug| debug.time_end(label));
}

pub fn trace(args: Vec<Value>) {
    with_debug(|debug| debug.trace(args));
}

pub fn set_data(data: DataMap) {
    with_debug(|debug| debug.set_data(data));
}

pub fn get_data() -> Option<DataMap> {
    with_debug(|debug| debug.get_data()).flatten()
}

pub fn set_style(style: StyleUpdate) {
    update(|debug| debug.set_style(style));
}

/// Copy of the style table. Use `with_debug_mut` and `styles_mut` for a
/// live handle.
pub fn styles() -> StyleMap {
    with_debug(|debug| debug.styles().clone()).unwrap_or_default()
}

pub fn reset() {
    update(|debug| debug.reset());
}
