//! Commands for the Quest log context.

use uuid::Uuid;

/// Command to issue a quest to an existing character.
#[derive(Debug, Clone)]
pub struct CreateQuest {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Free-text description.
    pub description: String,
    /// Experience reward. Neither sign nor range is checked.
    pub xp: i64,
    /// The owning character.
    pub character_id: i64,
}

/// Command to mark a quest as completed.
#[derive(Debug, Clone)]
pub struct CompleteQuest {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quest identifier.
    pub quest_id: i64,
}
