//! Questlog Store — SQLite persistence for characters and quests.

pub mod schema;
pub mod sqlite_repository;

pub use sqlite_repository::SqliteRepository;
