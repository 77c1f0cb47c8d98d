//! Persisted records.
//!
//! Quests refer to their owning character by id only; the relationship is
//! traversed with an on-demand query rather than a linked object graph.

use serde::Serialize;

/// A stored character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    /// Store-assigned identifier.
    pub id: i64,
    /// Unique display name.
    pub name: String,
}

/// A stored quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quest {
    /// Store-assigned identifier. Ascending ids follow creation order.
    pub id: i64,
    /// Free-text description.
    pub description: String,
    /// Experience reward.
    pub xp: i64,
    /// Whether the quest has been completed. Never reverts to `false`.
    pub completed: bool,
    /// The owning character.
    pub character_id: i64,
}

/// Input for inserting a quest. New quests always start incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuest {
    /// Free-text description.
    pub description: String,
    /// Experience reward.
    pub xp: i64,
    /// The owning character; must already exist.
    pub character_id: i64,
}
