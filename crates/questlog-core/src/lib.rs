//! Questlog Core — shared records and store abstractions.
//!
//! This crate defines the records, error type, and repository traits that
//! every bounded context depends on. It contains no infrastructure code.

pub mod error;
pub mod model;
pub mod repository;
