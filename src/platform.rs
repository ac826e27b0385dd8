//! Platform - Dependency injection container for all ports.
//!
//! Ports are shared through `Rc` so a caller can keep a handle on the
//! adapters it injected (a recording console, an inspectable global).

use crate::domain::ConsoleValue;
use crate::ports::{ConsolePort, GlobalScopePort};
use std::rc::Rc;

pub struct Platform<V> {
    console: Rc<dyn ConsolePort<V>>,
    global: Rc<dyn GlobalScopePort>,
}

impl<V: ConsoleValue> Platform<V> {
    pub fn with_ports(console: Rc<dyn ConsolePort<V>>, global: Rc<dyn GlobalScopePort>) -> Self {
        Self { console, global }
    }

    #[inline]
    pub fn console(&self) -> &dyn ConsolePort<V> {
        self.console.as_ref()
    }

    #[inline]
    pub fn global(&self) -> &dyn GlobalScopePort {
        self.global.as_ref()
    }
}

impl<V> Clone for Platform<V> {
    fn clone(&self) -> Self {
        Self {
            console: Rc::clone(&self.console),
            global: Rc::clone(&self.global),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Platform<wasm_bindgen::JsValue> {
    /// Creates a new Platform bound to the JS console and `globalThis`.
    pub fn new() -> Self {
        Self::with_ports(
            Rc::new(crate::adapters::wasm::JsConsole::new()),
            Rc::new(crate::adapters::wasm::JsGlobalScope::new()),
        )
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for Platform<wasm_bindgen::JsValue> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Platform<serde_json::Value> {
    /// Creates a new Platform writing to the terminal with an in-memory global namespace.
    pub fn new() -> Self {
        Self::with_ports(
            Rc::new(crate::adapters::native::TerminalConsole::new()),
            Rc::new(crate::adapters::MemoryGlobal::new()),
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for Platform<serde_json::Value> {
    fn default() -> Self {
        Self::new()
    }
}
