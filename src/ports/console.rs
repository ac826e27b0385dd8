use std::fmt;

/// Console primitives the facade delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    Debug,
    Log,
    Info,
    Warn,
    Error,
    Group,
    GroupCollapsed,
    GroupEnd,
    Dir,
    Dirxml,
    Count,
    CountReset,
    Table,
    Time,
    TimeLog,
    TimeEnd,
    Trace,
}

impl ConsoleMethod {
    pub const ALL: [ConsoleMethod; 17] = [
        ConsoleMethod::Debug,
        ConsoleMethod::Log,
        ConsoleMethod::Info,
        ConsoleMethod::Warn,
        ConsoleMethod::Error,
        ConsoleMethod::Group,
        ConsoleMethod::GroupCollapsed,
        ConsoleMethod::GroupEnd,
        ConsoleMethod::Dir,
        ConsoleMethod::Dirxml,
        ConsoleMethod::Count,
        ConsoleMethod::CountReset,
        ConsoleMethod::Table,
        ConsoleMethod::Time,
        ConsoleMethod::TimeLog,
        ConsoleMethod::TimeEnd,
        ConsoleMethod::Trace,
    ];

    /// Name of the method on a JS `console` object.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleMethod::Debug => "debug",
            ConsoleMethod::Log => "log",
            ConsoleMethod::Info => "info",
            ConsoleMethod::Warn => "warn",
            ConsoleMethod::Error => "error",
            ConsoleMethod::Group => "group",
            ConsoleMethod::GroupCollapsed => "groupCollapsed",
            ConsoleMethod::GroupEnd => "groupEnd",
            ConsoleMethod::Dir => "dir",
            ConsoleMethod::Dirxml => "dirxml",
            ConsoleMethod::Count => "count",
            ConsoleMethod::CountReset => "countReset",
            ConsoleMethod::Table => "table",
            ConsoleMethod::Time => "time",
            ConsoleMethod::TimeLog => "timeLog",
            ConsoleMethod::TimeEnd => "timeEnd",
            ConsoleMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for ConsoleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Console port - the host's console object.
///
/// Abstracts output from platform-specific implementations:
/// - WASM: the JS `console` (`console[method](...args)`)
/// - Native: stdout/stderr
///
/// Writes never fail observably.
pub trait ConsolePort<V> {
    fn write(&self, method: ConsoleMethod, args: Vec<V>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_method_names_are_unique() {
        let names: HashSet<_> = ConsoleMethod::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(names.len(), ConsoleMethod::ALL.len());
    }

    #[test]
    fn test_camel_case_names() {
        assert_eq!(ConsoleMethod::GroupCollapsed.as_str(), "groupCollapsed");
        assert_eq!(ConsoleMethod::CountReset.to_string(), "countReset");
        assert_eq!(ConsoleMethod::TimeLog.as_str(), "timeLog");
    }
}
