//! Domain error types.

use std::fmt;

use thiserror::Error;

/// The kind of record a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A character record.
    Character,
    /// A quest record.
    Quest,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => f.write_str("character"),
            Self::Quest => f.write_str("quest"),
        }
    }
}

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Which table the lookup ran against.
        entity: EntityKind,
        /// The identifier that was looked up.
        id: i64,
    },

    /// A character with the given name already exists.
    #[error("character already exists: {0}")]
    Conflict(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Shorthand for a missing character.
    #[must_use]
    pub fn character_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: EntityKind::Character,
            id,
        }
    }

    /// Shorthand for a missing quest.
    #[must_use]
    pub fn quest_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: EntityKind::Quest,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        assert_eq!(
            DomainError::character_not_found(7).to_string(),
            "character not found: 7"
        );
        assert_eq!(
            DomainError::quest_not_found(3).to_string(),
            "quest not found: 3"
        );
    }

    #[test]
    fn test_conflict_message_names_character() {
        assert_eq!(
            DomainError::Conflict("Aria".into()).to_string(),
            "character already exists: Aria"
        );
    }
}
