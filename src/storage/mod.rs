//! Storage layer - SQLite persistence for lookup tables
//!
//! System of record is SQLite with one table per enumeration:
//! - `<table>(id, name, description)` where `id` is the member value
//!
//! Staged rows live in memory until committed, so the seeder's existence
//! checks and the eventual inserts see one consistent view.

pub mod schema;
pub mod sqlite;

pub use schema::DEFAULT_TABLE;
pub use sqlite::SqliteLookupStore;
