//! Collaborator contracts consumed by the action builders

use crate::error::Result;
use crate::operation::{Applied, Operation};
use crate::uri::Uri;
use crate::values::ValueMap;

/// Executes built actions against the real store.
///
/// Every `Option` parameter is `None` exactly when the builder never set it.
/// Absence is not the same as emptiness: stores distinguish "no filter" from
/// "match nothing", and an implementation must preserve that. The value map
/// for `insert`/`update` is always present, possibly empty.
///
/// Implementations may block and may fail; errors propagate to the caller
/// unmodified. The core performs no retries and no translation.
pub trait Handler {
    /// Cursor/stream type produced by [`Handler::query`].
    type Rows;

    fn query(
        &self,
        uri: &Uri,
        projection: Option<&[String]>,
        selection: Option<&str>,
        args: Option<&[String]>,
        order_by: Option<&str>,
    ) -> Result<Self::Rows>;

    /// Returns the identifier of the inserted row.
    fn insert(&self, uri: &Uri, values: &ValueMap) -> Result<i64>;

    /// Returns the number of affected rows.
    fn update(
        &self,
        uri: &Uri,
        values: &ValueMap,
        selection: Option<&str>,
        args: Option<&[String]>,
    ) -> Result<usize>;

    /// Returns the number of affected rows.
    fn delete(&self, uri: &Uri, selection: Option<&str>, args: Option<&[String]>) -> Result<usize>;
}

/// Applies a sequence of operation descriptors atomically.
///
/// Either every operation takes effect or none does; how that is achieved
/// (transaction, journal, …) is the executor's concern.
pub trait BatchHandler: Handler {
    fn apply_batch(&self, operations: &[Operation]) -> Result<Vec<Applied>>;
}

/// Capability of expressing an action as an inert [`Operation`] descriptor.
///
/// Implemented by the mutating builders only. Read actions lack this
/// capability entirely rather than carrying a failing stub.
pub trait ToOperation {
    /// Snapshots the action. The descriptor owns deep copies of the builder
    /// state and is unaffected by anything the builder does afterwards.
    fn to_operation(&self) -> Operation;
}
