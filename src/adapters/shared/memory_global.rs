use crate::domain::data::{merge_into, DataMap};
use crate::ports::GlobalScopePort;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone)]
enum Property {
    Getter { app: String },
}

/// In-memory global namespace.
///
/// App data lives in hidden slots that `property_names` never lists; named
/// properties are getters evaluated on each read.
#[derive(Debug, Default)]
pub struct MemoryGlobal {
    properties: RefCell<BTreeMap<String, Property>>,
    hidden: RefCell<HashMap<String, DataMap>>,
}

impl MemoryGlobal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a property. `None` when it is missing or its getter yields nothing.
    pub fn property(&self, name: &str) -> Option<Value> {
        let app = match self.properties.borrow().get(name)? {
            Property::Getter { app } => app.clone(),
        };
        self.read_data(&app).map(Value::Object)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.borrow().contains_key(name)
    }

    /// Enumerable property names, sorted.
    pub fn property_names(&self) -> Vec<String> {
        self.properties.borrow().keys().cloned().collect()
    }
}

impl GlobalScopePort for MemoryGlobal {
    fn is_available(&self) -> bool {
        true
    }

    fn read_data(&self, app: &str) -> Option<DataMap> {
        self.hidden.borrow().get(app).cloned()
    }

    fn merge_data(&self, app: &str, data: DataMap) {
        let mut hidden = self.hidden.borrow_mut();
        merge_into(hidden.entry(app.to_string()).or_default(), data);
    }

    fn remove_data(&self, app: &str) {
        self.hidden.borrow_mut().remove(app);
    }

    fn expose(&self, property: &str, app: &str) {
        self.properties.borrow_mut().insert(
            property.to_string(),
            Property::Getter {
                app: app.to_string(),
            },
        );
    }

    fn remove_property(&self, property: &str) {
        self.properties.borrow_mut().remove(property);
    }
}
