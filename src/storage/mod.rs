//! SQLite event-log source.

mod sqlite;

pub use sqlite::EventStore;
