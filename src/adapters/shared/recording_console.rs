use crate::ports::{ConsoleMethod, ConsolePort};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleCall<V> {
    pub method: ConsoleMethod,
    pub args: Vec<V>,
}

/// Console that keeps every call instead of printing it.
#[derive(Debug)]
pub struct RecordingConsole<V> {
    calls: RefCell<Vec<ConsoleCall<V>>>,
}

impl<V: Clone> RecordingConsole<V> {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ConsoleCall<V>> {
        self.calls.borrow().clone()
    }

    /// Returns the recorded calls and clears the log.
    pub fn take(&self) -> Vec<ConsoleCall<V>> {
        self.calls.take()
    }

    pub fn methods(&self) -> Vec<ConsoleMethod> {
        self.calls.borrow().iter().map(|call| call.method).collect()
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

impl<V: Clone> Default for RecordingConsole<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> ConsolePort<V> for RecordingConsole<V> {
    fn write(&self, method: ConsoleMethod, args: Vec<V>) {
        self.calls.borrow_mut().push(ConsoleCall { method, args });
    }
}
