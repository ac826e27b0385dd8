use super::types::{Configuration, DebugOptions, ErrorArg, DEFAULT_APP, DEFAULT_PROP};
use crate::domain::data::DataMap;
use crate::domain::level::{LogLevel, LEVEL_ERROR};
use crate::domain::style::{decorate_first, StyleMap, StyleUpdate};
use crate::domain::value::ConsoleValue;
use crate::platform::Platform;
use crate::ports::ConsoleMethod;

/// Centralized collection and output of debugging information.
///
/// One instance is meant to live for the whole process (see the facades),
/// but nothing prevents building a fresh one per test.
pub struct DebugWeb<V> {
    platform: Platform<V>,
    config: Configuration,
}

// Cheap: the ports are shared, only the configuration is copied.
impl<V> Clone for DebugWeb<V> {
    fn clone(&self) -> Self {
        Self {
            platform: self.platform.clone(),
            config: self.config.clone(),
        }
    }
}

impl<V: ConsoleValue> DebugWeb<V> {
    pub fn new(platform: Platform<V>) -> Self {
        Self {
            platform,
            config: Configuration::default(),
        }
    }

    pub fn platform(&self) -> &Platform<V> {
        &self.platform
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Applies the given options and (re)installs the exposed property.
    pub fn init(&mut self, options: DebugOptions) {
        if let Some(app) = options.app.filter(|app| !app.trim().is_empty()) {
            self.config.app_name = app;
        }

        if let Some(level) = options.level {
            self.config.gate.set_threshold(&level);
        }

        if let Some(prop) = options.prop {
            self.config.exposed_property = prop;
        }

        if let Some(style) = options.style {
            self.set_style(StyleUpdate::ReplaceAll(style));
        }

        if let Some(data) = options.data {
            self.set_data(data);
        }

        self.attach();
    }

    /// Creates the global property giving read access to the data.
    pub fn attach(&self) {
        let Some(prop) = self.exposed_property() else {
            return;
        };

        let global = self.platform.global();
        if !global.is_available() {
            return;
        }

        global.expose(prop, &self.config.app_name);
    }

    pub fn log(&self, args: Vec<V>) {
        if !self.can(&LogLevel::Log) {
            return;
        }
        self.print(ConsoleMethod::Log, &LogLevel::Log, args);
    }

    /// Logs under an arbitrary level key, styled with that level's entry.
    pub fn log_at(&self, level: &LogLevel, args: Vec<V>) {
        if !self.can(level) {
            return;
        }
        self.print(ConsoleMethod::Log, level, args);
    }

    pub fn info(&self, args: Vec<V>) {
        if !self.can(&LogLevel::Info) {
            return;
        }
        self.print(ConsoleMethod::Info, &LogLevel::Info, args);
    }

    /// Success message, written with the `info` primitive.
    pub fn success(&self, args: Vec<V>) {
        if !self.can(&LogLevel::Success) {
            return;
        }
        self.print(ConsoleMethod::Info, &LogLevel::Success, args);
    }

    /// Not styled.
    pub fn warn(&self, args: Vec<V>) {
        if !self.can(&LogLevel::Warn) {
            return;
        }
        self.write(ConsoleMethod::Warn, args);
    }

    /// Not styled. The stack is only printed while levels below `error` are enabled.
    pub fn error(&self, error: ErrorArg<V>, args: Vec<V>) {
        if !self.can(&LogLevel::Error) {
            return;
        }

        let mut out = Vec::with_capacity(args.len() + 2);
        match error {
            ErrorArg::Error { message, stack } => {
                out.push(V::from_text(message));
                if self.config.gate.threshold() < LEVEL_ERROR {
                    if let Some(stack) = stack.filter(|stack| !stack.is_empty()) {
                        out.push(V::from_text(stack));
                    }
                }
            }
            ErrorArg::Value(value) => out.push(value),
        }
        out.extend(args);

        self.write(ConsoleMethod::Error, out);
    }

    pub fn debug(&self, args: Vec<V>) {
        if !self.can(&LogLevel::Debug) {
            return;
        }
        self.write(ConsoleMethod::Debug, args);
    }

    /// Opens a group. `level` only picks the style, gating is always `log`.
    pub fn group(&self, collapsed: bool, level: Option<&LogLevel>, args: Vec<V>) {
        if !self.can(&LogLevel::Log) {
            return;
        }
        let method = if collapsed {
            ConsoleMethod::GroupCollapsed
        } else {
            ConsoleMethod::Group
        };
        self.print(method, level.unwrap_or(&LogLevel::Log), args);
    }

    pub fn group_end(&self) {
        if !self.can(&LogLevel::Log) {
            return;
        }
        self.write(ConsoleMethod::GroupEnd, Vec::new());
    }

    pub fn dir(&self, value: V, options: Option<V>) {
        if !self.can(&LogLevel::Log) {
            return;
        }
        let mut args = vec![value];
        args.extend(options);
        self.write(ConsoleMethod::Dir, args);
    }

    pub fn dirxml(&self, args: Vec<V>) {
        if !self.can(&LogLevel::Log) {
            return;
        }
        self.write(ConsoleMethod::Dirxml, args);
    }

    pub fn count(&self, label: Option<&str>) {
        if !self.can(&LogLevel::Log) {
            return;
        }
        self.write(ConsoleMethod::Count, label_args(label));
    }

    pub fn count_reset(&self, label: Option<&str>) {
        if !self.can(&LogLevel::Log) {
            return;
        }
        self.write(ConsoleMethod::CountReset, label_args(label));
    }

    pub fn table(&self, data: V, properties: Option<V>) {
        if !self.can(&LogLevel::Info) {
            return;
        }
        let mut args = vec![data];
        args.extend(properties);
        self.write(ConsoleMethod::Table, args);
    }

    pub fn time(&self, label: Option<&str>) {
        if !self.can(&LogLevel::Info) {
            return;
        }
        self.write(ConsoleMethod::Time, label_args(label));
    }

    pub fn time_log(&self, label: Option<&str>, args: Vec<V>) {
        if !self.can(&LogLevel::Info) {
            return;
        }
        let mut out = Vec::with_capacity(args.len() + 1);
        match label {
            Some(label) => out.push(V::from_text(label.to_string())),
            None if !args.is_empty() => out.push(V::undefined()),
            None => {}
        }
        out.extend(args);
        self.write(ConsoleMethod::TimeLog, out);
    }

    pub fn time_end(&self, label: Option<&str>) {
        if !self.can(&LogLevel::Info) {
            return;
        }
        self.write(ConsoleMethod::TimeEnd, label_args(label));
    }

    pub fn trace(&self, args: Vec<V>) {
        if !self.can(&LogLevel::Log) {
            return;
        }
        self.write(ConsoleMethod::Trace, args);
    }

    /// Shallow-merges `data` into the app's data. Dropped without a global object.
    pub fn set_data(&self, data: DataMap) {
        let global = self.platform.global();
        if !global.is_available() {
            return;
        }
        global.merge_data(&self.config.app_name, data);
    }

    pub fn get_data(&self) -> Option<DataMap> {
        let global = self.platform.global();
        if !global.is_available() {
            return None;
        }
        global.read_data(&self.config.app_name)
    }

    pub fn set_style(&mut self, update: StyleUpdate) {
        self.config.styles.apply(update);
    }

    pub fn styles(&self) -> &StyleMap {
        &self.config.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleMap {
        &mut self.config.styles
    }

    /// Clears the data and the exposed property, then restores the default
    /// threshold, app name and property name. Styles are kept.
    pub fn reset(&mut self) {
        let global = self.platform.global();
        if global.is_available() {
            global.remove_data(&self.config.app_name);
            if let Some(prop) = self.exposed_property() {
                global.remove_property(prop);
            }
        }

        self.config.gate.reset();
        self.config.app_name = DEFAULT_APP.to_string();
        self.config.exposed_property = Some(DEFAULT_PROP.to_string());
    }

    fn exposed_property(&self) -> Option<&str> {
        self.config
            .exposed_property
            .as_deref()
            .filter(|prop| !prop.is_empty())
    }

    fn can(&self, level: &LogLevel) -> bool {
        self.config.gate.is_enabled(level)
    }

    fn print(&self, method: ConsoleMethod, level: &LogLevel, args: Vec<V>) {
        let args = decorate_first(args, self.config.styles.get(level));
        self.write(method, args);
    }

    fn write(&self, method: ConsoleMethod, args: Vec<V>) {
        self.platform.console().write(method, args);
    }
}

fn label_args<V: ConsoleValue>(label: Option<&str>) -> Vec<V> {
    label
        .map(|label| V::from_text(label.to_string()))
        .into_iter()
        .collect()
}
