use crate::domain::data::DataMap;
use crate::ports::GlobalScopePort;

/// Global scope of a host that has no global object.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedGlobal;

impl DetachedGlobal {
    pub fn new() -> Self {
        Self
    }
}

impl GlobalScopePort for DetachedGlobal {
    fn is_available(&self) -> bool {
        false
    }

    fn read_data(&self, _app: &str) -> Option<DataMap> {
        None
    }

    fn merge_data(&self, _app: &str, _data: DataMap) {}

    fn remove_data(&self, _app: &str) {}

    fn expose(&self, _property: &str, _app: &str) {}

    fn remove_property(&self, _property: &str) {}
}
