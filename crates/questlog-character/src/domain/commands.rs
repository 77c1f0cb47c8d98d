//! Commands for the Character roster context.

use uuid::Uuid;

/// Command to create a new character.
#[derive(Debug, Clone)]
pub struct CreateCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The character's name. Must not already be taken.
    pub name: String,
}
