//! Domain layer for the Character roster context.

pub mod commands;
