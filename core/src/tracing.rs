//! Tracing utilities for action dispatch and statement observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! The macro no-ops when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event for an action dispatch or a statement
/// execution.
///
/// ```ignore
/// action_trace!("update", uri);
/// action_trace!("update", uri, sql);
/// ```
#[macro_export]
macro_rules! action_trace {
    ($verb:literal, $uri:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(verb = $verb, uri = %$uri, "db_actions.perform");
    };
    ($verb:literal, $uri:expr, $sql:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(verb = $verb, uri = %$uri, sql = %$sql, "db_actions.execute");
    };
}
