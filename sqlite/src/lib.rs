//! SQLite execution for db-actions
//!
//! This crate provides [`SqliteHandler`], a `rusqlite`-backed implementation
//! of the `db-actions-core` handler contracts: eager `query`/`insert`/
//! `update`/`delete` plus transactional batch application.

mod handler;
mod helpers;

pub use handler::SqliteHandler;
