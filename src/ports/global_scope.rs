use crate::domain::data::DataMap;

/// Port for the host's global object.
///
/// Data is stored per application in a slot that does not show up when the
/// global object is enumerated. The exposed property is a getter-only,
/// reconfigurable accessor that reads that slot on every access.
///
/// Implementations must not fail: an unreachable global object turns every
/// call into a no-op.
pub trait GlobalScopePort {
    fn is_available(&self) -> bool;

    /// Current data of `app`, `None` when nothing was stored.
    fn read_data(&self, app: &str) -> Option<DataMap>;

    /// Shallow-merges `data` into the slot of `app`, creating it if needed.
    fn merge_data(&self, app: &str, data: DataMap);

    fn remove_data(&self, app: &str);

    /// Installs `property` as a getter returning the data of `app`.
    fn expose(&self, property: &str, app: &str);

    fn remove_property(&self, property: &str);
}
