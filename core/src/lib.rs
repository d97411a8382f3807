//! Core data model and collaborator contracts for `db-actions`.
//!
//! Everything in this crate is pure data: selections accumulate, value maps
//! merge, descriptors snapshot. Nothing here blocks or touches a store.
//! Execution lives behind the [`Handler`] and [`BatchHandler`] seams, and the
//! fluent builders over these types live in the `db-actions` facade crate.

pub mod error;
pub mod operation;
pub mod row;
pub mod selection;
pub mod tracing;
pub mod traits;
pub mod uri;
pub mod value;
pub mod values;

pub use error::{ActionError, Result};
pub use operation::{Applied, Operation};
pub use row::Row;
pub use selection::Selection;
pub use traits::{BatchHandler, Handler, ToOperation};
pub use uri::Uri;
pub use value::Value;
pub use values::ValueMap;
