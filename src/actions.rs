//! Fluent action builders and their factory functions.
//!
//! An action is created per target URI and verb, accumulates builder calls,
//! and is consumed by one terminal call: [`perform`](Query::perform) against
//! a live [`Handler`](db_actions_core::Handler), or, for the mutating verbs,
//! [`to_operation`](db_actions_core::ToOperation::to_operation) into a
//! deferred [`Operation`](db_actions_core::Operation).

mod delete;
mod insert;
mod query;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use query::Query;
pub use update::Update;

use db_actions_core::Uri;

/// Starts a read action against `uri`.
pub fn query(uri: impl Into<Uri>) -> Query {
    Query::new(uri)
}

/// Starts an insert action against `uri`.
pub fn insert(uri: impl Into<Uri>) -> Insert {
    Insert::new(uri)
}

/// Starts an update action against `uri`.
pub fn update(uri: impl Into<Uri>) -> Update {
    Update::new(uri)
}

/// Starts a delete action against `uri`.
pub fn delete(uri: impl Into<Uri>) -> Delete {
    Delete::new(uri)
}
