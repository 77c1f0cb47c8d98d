//! Application layer for the Character roster context.

pub mod command_handlers;
pub mod query_handlers;
