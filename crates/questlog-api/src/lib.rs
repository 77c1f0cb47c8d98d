//! Questlog API — HTTP surface for the character and quest handlers.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
