//! Questlog — Quest log bounded context.
//!
//! Responsible for issuing quests to characters, completing them, and
//! listing a character's quests in the order they were issued.

pub mod application;
pub mod domain;
