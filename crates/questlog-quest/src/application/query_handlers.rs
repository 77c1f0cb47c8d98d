//! Query handlers for the Quest log context.

use questlog_core::error::DomainError;
use questlog_core::model::Quest;
use questlog_core::repository::Repository;
use serde::Serialize;

/// Read-only view of a single quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestView {
    /// The quest identifier.
    pub id: i64,
    /// Free-text description.
    pub description: String,
    /// Experience reward.
    pub xp: i64,
    /// Whether the quest has been completed.
    pub completed: bool,
}

impl From<Quest> for QuestView {
    fn from(quest: Quest) -> Self {
        Self {
            id: quest.id,
            description: quest.description,
            xp: quest.xp,
            completed: quest.completed,
        }
    }
}

/// Read-only view of a character's quest log.
#[derive(Debug, Serialize)]
pub struct CharacterQuestsView {
    /// The owning character's name.
    pub character: String,
    /// Quests in the order they were created.
    pub quests: Vec<QuestView>,
}

/// Retrieves a character's quests in FIFO order.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the character does not exist.
/// Returns `DomainError::Infrastructure` if the store fails.
pub async fn get_character_quests(
    character_id: i64,
    repo: &dyn Repository,
) -> Result<CharacterQuestsView, DomainError> {
    let mut uow = repo.begin().await?;
    let character = uow
        .find_character(character_id)
        .await?
        .ok_or_else(|| DomainError::character_not_found(character_id))?;
    let quests = uow.quests_for_character(character_id).await?;
    uow.commit().await?;

    Ok(CharacterQuestsView {
        character: character.name,
        quests: quests.into_iter().map(QuestView::from).collect(),
    })
}
