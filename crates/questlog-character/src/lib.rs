//! Questlog — Character roster bounded context.
//!
//! Responsible for creating characters and listing the roster.

pub mod application;
pub mod domain;
