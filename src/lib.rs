//! # db-actions
//!
//! Fluent CRUD action builders for URI-addressed data stores.
//!
//! An action names its target by opaque [`Uri`], accumulates filter and
//! value state through chained calls, and is then either performed eagerly
//! through a [`Handler`] or snapshotted into an [`Operation`] for atomic
//! batched execution.
//!
//! ## Quick Start
//!
//! ```rust
//! use db_actions::{args, insert, update, Batch};
//!
//! let add = insert("content://notes/items")
//!     .value("title", "groceries")
//!     .value("done", false);
//!
//! let finish = update("content://notes/items")
//!     .value("done", true)
//!     .filter("title = ?", args!["groceries"]);
//!
//! let mut batch = Batch::new();
//! batch.push(&add).push(&finish);
//! assert_eq!(batch.len(), 2);
//! ```
//!
//! ## Store Support
//!
//! | Store  | Driver   | Feature Flag | Handler                  |
//! |--------|----------|--------------|--------------------------|
//! | SQLite | rusqlite | `rusqlite`   | `sqlite::SqliteHandler`  |
//!
//! Any other store plugs in by implementing [`Handler`] (and
//! [`BatchHandler`] for atomic batches).

pub mod actions;
pub mod batch;
pub mod loader;

pub use actions::{Delete, Insert, Query, Update, delete, insert, query, update};
pub use batch::Batch;
pub use loader::{Loader, RowSource};

pub use db_actions_core::{
    ActionError, Applied, BatchHandler, Handler, Operation, Result, Row, Selection, ToOperation,
    Uri, Value, ValueMap,
};

/// Error types
pub mod error {
    pub use db_actions_core::error::ActionError;
}

/// rusqlite-backed handler, enabled by the `rusqlite` feature.
#[cfg(feature = "rusqlite")]
pub use db_actions_sqlite as sqlite;

/// Builds a fixed-size array of [`Value`]s for positional filter arguments.
///
/// ```rust
/// use db_actions::{args, query};
///
/// let all_adults = query("content://people")
///     .filter("age >= ?", args![18])
///     .filter("active = ?", args![true]);
/// # let _ = all_adults;
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let empty: [$crate::Value; 0] = [];
        empty
    }};
    ($($value:expr),+ $(,)?) => {
        [$($crate::Value::from($value)),+]
    };
}

pub mod prelude {
    pub use crate::actions::{Delete, Insert, Query, Update, delete, insert, query, update};
    pub use crate::args;
    pub use crate::batch::Batch;
    pub use crate::loader::{Loader, RowSource};
    pub use db_actions_core::{
        ActionError, Applied, BatchHandler, Handler, Operation, Result, Row, Selection,
        ToOperation, Uri, Value, ValueMap,
    };

    #[cfg(feature = "rusqlite")]
    pub use db_actions_sqlite::SqliteHandler;
}
