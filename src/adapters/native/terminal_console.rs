use crate::adapters::clock;
use crate::domain::ConsoleValue;
use crate::ports::{ClockPort, ConsoleMethod, ConsolePort};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

const DEFAULT_LABEL: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub stream: Stream,
    pub text: String,
}

/// Native console writing to stdout/stderr.
///
/// Emulates the browser console closely enough for terminal use: groups
/// indent, counters and timers are kept per label, and `%c` directives are
/// dropped together with their CSS argument.
pub struct TerminalConsole {
    clock: &'static dyn ClockPort,
    depth: Cell<usize>,
    counters: RefCell<HashMap<String, u64>>,
    timers: RefCell<HashMap<String, f64>>,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self::with_clock(clock())
    }

    pub fn with_clock(clock: &'static dyn ClockPort) -> Self {
        Self {
            clock,
            depth: Cell::new(0),
            counters: RefCell::new(HashMap::new()),
            timers: RefCell::new(HashMap::new()),
        }
    }

    /// Updates the console state for `method` and returns the line to print, if any.
    pub fn render(&self, method: ConsoleMethod, args: &[Value]) -> Option<Line> {
        match method {
            ConsoleMethod::Debug => self.stdout("[DEBUG]", format_message(args)),
            ConsoleMethod::Log | ConsoleMethod::Dirxml => self.stdout("[LOG]", format_message(args)),
            ConsoleMethod::Info => self.stdout("[INFO]", format_message(args)),
            ConsoleMethod::Warn => self.stderr("[WARN]", format_message(args)),
            ConsoleMethod::Error => self.stderr("[ERROR]", format_message(args)),
            ConsoleMethod::Group | ConsoleMethod::GroupCollapsed => {
                let label = if args.is_empty() {
                    "console.group".to_string()
                } else {
                    format_message(args)
                };
                let line = self.stdout("[GROUP]", label);
                self.depth.set(self.depth.get() + 1);
                line
            }
            ConsoleMethod::GroupEnd => {
                self.depth.set(self.depth.get().saturating_sub(1));
                None
            }
            ConsoleMethod::Dir => {
                let text = args
                    .first()
                    .map(|value| serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_text()))
                    .unwrap_or_default();
                self.stdout("[DIR]", text)
            }
            ConsoleMethod::Table => {
                let text = args.first().map(ConsoleValue::to_text).unwrap_or_default();
                self.stdout("[TABLE]", text)
            }
            ConsoleMethod::Count => {
                let label = label_of(args);
                let mut counters = self.counters.borrow_mut();
                let count = counters.entry(label.clone()).or_insert(0);
                *count += 1;
                self.stdout("[COUNT]", format!("{label}: {count}"))
            }
            ConsoleMethod::CountReset => {
                let label = label_of(args);
                match self.counters.borrow_mut().get_mut(&label) {
                    Some(count) => {
                        *count = 0;
                        None
                    }
                    None => self.stderr("[WARN]", format!("Count for '{label}' does not exist")),
                }
            }
            ConsoleMethod::Time => {
                let label = label_of(args);
                let mut timers = self.timers.borrow_mut();
                if timers.contains_key(&label) {
                    return self.stderr("[WARN]", format!("Timer '{label}' already exists"));
                }
                timers.insert(label, self.clock.now());
                None
            }
            ConsoleMethod::TimeLog => {
                let label = label_of(args);
                let started = self.timers.borrow().get(&label).copied();
                match started {
                    Some(started) => {
                        let mut text = format!("{label}: {:.3}ms", self.clock.now() - started);
                        if args.len() > 1 {
                            text.push(' ');
                            text.push_str(&format_message(&args[1..]));
                        }
                        self.stdout("[TIME]", text)
                    }
                    None => self.stderr("[WARN]", format!("Timer '{label}' does not exist")),
                }
            }
            ConsoleMethod::TimeEnd => {
                let label = label_of(args);
                let started = self.timers.borrow_mut().remove(&label);
                match started {
                    Some(started) => self.stdout(
                        "[TIME]",
                        format!("{label}: {:.3}ms - timer ended", self.clock.now() - started),
                    ),
                    None => self.stderr("[WARN]", format!("Timer '{label}' does not exist")),
                }
            }
            ConsoleMethod::Trace => {
                let mut text = format!("Trace: {}", format_message(args));
                let backtrace = std::backtrace::Backtrace::capture();
                if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
                    text.push('\n');
                    text.push_str(&backtrace.to_string());
                }
                self.stderr("[TRACE]", text)
            }
        }
    }

    fn stdout(&self, tag: &str, message: String) -> Option<Line> {
        Some(self.line(Stream::Stdout, tag, message))
    }

    fn stderr(&self, tag: &str, message: String) -> Option<Line> {
        Some(self.line(Stream::Stderr, tag, message))
    }

    fn line(&self, stream: Stream, tag: &str, message: String) -> Line {
        let indent = "  ".repeat(self.depth.get());
        let text = if message.is_empty() {
            format!("{indent}{tag}")
        } else {
            format!("{indent}{tag} {message}")
        };
        Line { stream, text }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort<Value> for TerminalConsole {
    fn write(&self, method: ConsoleMethod, args: Vec<Value>) {
        match self.render(method, &args) {
            Some(Line {
                stream: Stream::Stdout,
                text,
            }) => println!("{text}"),
            Some(Line {
                stream: Stream::Stderr,
                text,
            }) => eprintln!("{text}"),
            None => {}
        }
    }
}

fn label_of(args: &[Value]) -> String {
    match args.first() {
        None | Some(Value::Null) => DEFAULT_LABEL.to_string(),
        Some(value) => value.to_text(),
    }
}

/// Joins the arguments with spaces. `%c` directives in the first argument
/// are removed and each one consumes the argument that follows.
fn format_message(args: &[Value]) -> String {
    let Some((first, rest)) = args.split_first() else {
        return String::new();
    };

    let first = first.to_text();
    let directives = first.matches("%c").count();
    let mut parts = Vec::with_capacity(args.len());
    let head = first.replace("%c", "");
    let head = if directives > 0 { head.trim().to_string() } else { head };
    if !head.is_empty() {
        parts.push(head);
    }
    parts.extend(rest.iter().skip(directives).map(ConsoleValue::to_text));
    parts.join(" ")
}
