use serde_json::{Map, Value};

/// Debug data of one application.
pub type DataMap = Map<String, Value>;

/// Shallow merge: top-level keys of `data` overwrite those of `target`.
pub fn merge_into(target: &mut DataMap, data: DataMap) {
    for (key, value) in data {
        target.insert(key, value);
    }
}
