//! Application layer for the Quest log context.

pub mod command_handlers;
pub mod query_handlers;
