//! Domain layer for the Quest log context.

pub mod commands;
