//! Command handlers for the Quest log context.
//!
//! Each handler opens a unit of work, checks that the referenced record
//! exists, performs at most one write, and commits.

use questlog_core::error::DomainError;
use questlog_core::model::{NewQuest, Quest};
use questlog_core::repository::Repository;
use tracing::{debug, info};

use crate::domain::commands::{CompleteQuest, CreateQuest};

/// Handles the `CreateQuest` command: verifies the owning character exists,
/// then inserts an incomplete quest and commits.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the character does not exist; nothing
/// is written in that case. Returns `DomainError::Infrastructure` if the store
/// fails.
pub async fn handle_create_quest(
    command: &CreateQuest,
    repo: &dyn Repository,
) -> Result<Quest, DomainError> {
    let mut uow = repo.begin_write().await?;

    if uow.find_character(command.character_id).await?.is_none() {
        debug!(
            correlation_id = %command.correlation_id,
            character_id = command.character_id,
            "quest owner not found"
        );
        return Err(DomainError::character_not_found(command.character_id));
    }

    let quest = uow
        .insert_quest(&NewQuest {
            description: command.description.clone(),
            xp: command.xp,
            character_id: command.character_id,
        })
        .await?;
    uow.commit().await?;

    info!(
        correlation_id = %command.correlation_id,
        quest_id = quest.id,
        character_id = quest.character_id,
        "quest created"
    );

    Ok(quest)
}

/// Handles the `CompleteQuest` command: flips `completed` to `true`.
///
/// Completing an already-completed quest succeeds and returns the quest
/// unchanged without issuing a write.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the quest does not exist. Returns
/// `DomainError::Infrastructure` if the store fails.
pub async fn handle_complete_quest(
    command: &CompleteQuest,
    repo: &dyn Repository,
) -> Result<Quest, DomainError> {
    let mut uow = repo.begin_write().await?;

    let Some(quest) = uow.find_quest(command.quest_id).await? else {
        debug!(
            correlation_id = %command.correlation_id,
            quest_id = command.quest_id,
            "quest not found"
        );
        return Err(DomainError::quest_not_found(command.quest_id));
    };

    if quest.completed {
        debug!(
            correlation_id = %command.correlation_id,
            quest_id = quest.id,
            "quest already completed"
        );
        uow.commit().await?;
        return Ok(quest);
    }

    let quest = uow.mark_quest_completed(quest.id).await?;
    uow.commit().await?;

    info!(
        correlation_id = %command.correlation_id,
        quest_id = quest.id,
        xp = quest.xp,
        "quest completed"
    );

    Ok(quest)
}
