use crate::domain::data::DataMap;
use crate::global::get_global_scope;
use crate::ports::GlobalScopePort;
use js_sys::{Object, Reflect, Symbol};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

/// `globalThis` of the host.
///
/// App data is a non-enumerable property keyed by `Symbol.for(app)`, so it
/// stays out of `Object.keys(window)` and `JSON.stringify(window)`. Getters
/// are owned by the JS side and outlive the adapter that defined them.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsGlobalScope;

impl JsGlobalScope {
    pub fn new() -> Self {
        Self
    }

    /// The live data object of `app`, `undefined` when there is none.
    pub fn raw_data(app: &str) -> JsValue {
        get_global_scope()
            .and_then(|global| Reflect::get(&global, &data_key(app)).ok())
            .unwrap_or(JsValue::UNDEFINED)
    }

    /// `Object.assign` of `data` into the data object of `app`. Values are
    /// kept as they are (functions, DOM nodes, class instances).
    pub fn assign(app: &str, data: &Object) {
        let Some(global) = get_global_scope() else {
            return;
        };

        let key = data_key(app);
        let current = Reflect::get(&global, &key).unwrap_or(JsValue::UNDEFINED);
        let target: Object = if current.is_object() {
            current.unchecked_into()
        } else {
            Object::new()
        };
        Object::assign(&target, data);
        let value: &JsValue = target.as_ref();

        let attributes = descriptor(&[
            ("value", value),
            ("writable", &JsValue::TRUE),
            ("enumerable", &JsValue::FALSE),
            ("configurable", &JsValue::TRUE),
        ]);
        let _ = Reflect::define_property(&global, &key, &attributes);
    }
}

fn data_key(app: &str) -> JsValue {
    Symbol::for_(app).into()
}

fn descriptor(entries: &[(&str, &JsValue)]) -> Object {
    let descriptor = Object::new();
    for (key, value) in entries {
        let _ = Reflect::set(&descriptor, &JsValue::from_str(key), value);
    }
    descriptor
}

impl GlobalScopePort for JsGlobalScope {
    fn is_available(&self) -> bool {
        get_global_scope().is_some()
    }

    // JSON view of the data; values without a JSON form make this `None`.
    fn read_data(&self, app: &str) -> Option<DataMap> {
        let raw = Self::raw_data(app);
        if raw.is_undefined() || raw.is_null() {
            return None;
        }
        serde_wasm_bindgen::from_value(raw).ok()
    }

    fn merge_data(&self, app: &str, data: DataMap) {
        if let Ok(incoming) = data.serialize(&Serializer::json_compatible()) {
            Self::assign(app, incoming.unchecked_ref());
        }
    }

    fn remove_data(&self, app: &str) {
        if let Some(global) = get_global_scope() {
            let _ = Reflect::delete_property(&global, &data_key(app));
        }
    }

    fn expose(&self, property: &str, app: &str) {
        let Some(global) = get_global_scope() else {
            return;
        };

        let app = app.to_string();
        let getter =
            Closure::<dyn Fn() -> JsValue>::new(move || Self::raw_data(&app)).into_js_value();
        let attributes = descriptor(&[("get", &getter), ("configurable", &JsValue::TRUE)]);
        let _ = Reflect::define_property(&global, &JsValue::from_str(property), &attributes);
    }

    fn remove_property(&self, property: &str) {
        if let Some(global) = get_global_scope() {
            let _ = Reflect::delete_property(&global, &JsValue::from_str(property));
        }
    }
}
