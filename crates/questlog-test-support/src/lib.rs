//! Shared test doubles for the Questlog service.

mod repository;

pub use repository::{FailingRepository, InMemoryRepository};
