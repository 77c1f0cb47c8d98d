//! Store abstraction.
//!
//! Every request works through a [`UnitOfWork`] obtained from
//! [`Repository::begin`], or [`Repository::begin_write`] for commands. A unit
//! of work holds one store connection for its whole lifetime. Writes become
//! durable only on [`UnitOfWork::commit`]; dropping it without committing
//! rolls back and releases the connection.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::model::{Character, NewQuest, Quest};

/// Source of scoped units of work.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Acquire a connection and open a transaction on it.
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError>;

    /// Open a unit of work that will write.
    ///
    /// Stores that take locks lazily must take the write lock here, before
    /// the first read, so concurrent writers queue instead of failing on a
    /// stale snapshot.
    async fn begin_write(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
        self.begin().await
    }
}

/// A transactional session over the character and quest tables.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Find a character by exact name.
    async fn find_character_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<Character>, DomainError>;

    /// Find a character by id.
    async fn find_character(
        &mut self,
        character_id: i64,
    ) -> Result<Option<Character>, DomainError>;

    /// Find a quest by id.
    async fn find_quest(&mut self, quest_id: i64) -> Result<Option<Quest>, DomainError>;

    /// Load every quest owned by a character, ordered by id ascending.
    async fn quests_for_character(
        &mut self,
        character_id: i64,
    ) -> Result<Vec<Quest>, DomainError>;

    /// Load every character in store iteration order.
    async fn list_characters(&mut self) -> Result<Vec<Character>, DomainError>;

    /// Insert a character and return it with its assigned id.
    ///
    /// Returns `DomainError::Conflict` if the store rejects a duplicate name.
    async fn insert_character(&mut self, name: &str) -> Result<Character, DomainError>;

    /// Insert an incomplete quest and return it with its assigned id.
    async fn insert_quest(&mut self, quest: &NewQuest) -> Result<Quest, DomainError>;

    /// Set `completed` on a quest and return the updated record.
    ///
    /// Returns `DomainError::NotFound` if no such quest exists.
    async fn mark_quest_completed(&mut self, quest_id: i64) -> Result<Quest, DomainError>;

    /// Persist all writes made through this unit of work.
    async fn commit(self: Box<Self>) -> Result<(), DomainError>;
}
