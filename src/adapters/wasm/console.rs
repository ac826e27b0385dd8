use crate::global::get_console;
use crate::ports::{ConsoleMethod, ConsolePort};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;

/// Host `console`, called as `console[method].apply(console, args)`.
///
/// A missing console or method is skipped; exceptions thrown by the console
/// itself are swallowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsConsole;

impl JsConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsolePort<JsValue> for JsConsole {
    fn write(&self, method: ConsoleMethod, args: Vec<JsValue>) {
        let Some(console) = get_console() else {
            return;
        };

        let function = match Reflect::get(&console, &JsValue::from_str(method.as_str())) {
            Ok(function) => function,
            Err(_) => return,
        };
        let Ok(function) = function.dyn_into::<Function>() else {
            return;
        };

        let args: Array = args.into_iter().collect();
        let _ = function.apply(&console, &args);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_console_all_methods() {
        let console = JsConsole::new();
        console.write(ConsoleMethod::Time, vec![JsValue::from_str("t")]);
        for method in ConsoleMethod::ALL {
            console.write(method, vec![JsValue::from_str("test")]);
        }
        console.write(ConsoleMethod::GroupEnd, vec![]);
    }

    #[wasm_bindgen_test]
    fn test_console_styled_call() {
        let console = JsConsole::new();
        console.write(
            ConsoleMethod::Info,
            vec![
                JsValue::from_str("%c styled "),
                JsValue::from_str("background-color: #155adc; color: #fff;"),
            ],
        );
    }

    #[wasm_bindgen_test]
    fn test_throwing_console_method_is_swallowed() {
        let host = get_console().unwrap();
        let key = JsValue::from_str("dirxml");
        let original = Reflect::get(&host, &key).unwrap();
        let throwing = Function::new_no_args("throw new Error('patched')");
        Reflect::set(&host, &key, &throwing).unwrap();

        JsConsole::new().write(ConsoleMethod::Dirxml, vec![JsValue::from_str("x")]);

        Reflect::set(&host, &key, &original).unwrap();
    }
}
