//! Command handlers for the Character roster context.
//!
//! Each handler opens a unit of work, checks preconditions, performs at most
//! one write, and commits. Returning early drops the unit of work, which rolls
//! it back.

use questlog_core::error::DomainError;
use questlog_core::model::Character;
use questlog_core::repository::Repository;
use tracing::{debug, info};

use crate::domain::commands::CreateCharacter;

/// Handles the `CreateCharacter` command: rejects a taken name, otherwise
/// inserts the character and commits.
///
/// # Errors
///
/// Returns `DomainError::Conflict` if a character with the exact same name
/// already exists. Returns `DomainError::Infrastructure` if the store fails.
pub async fn handle_create_character(
    command: &CreateCharacter,
    repo: &dyn Repository,
) -> Result<Character, DomainError> {
    let mut uow = repo.begin_write().await?;

    if uow.find_character_by_name(&command.name).await?.is_some() {
        debug!(
            correlation_id = %command.correlation_id,
            name = %command.name,
            "character name already taken"
        );
        return Err(DomainError::Conflict(command.name.clone()));
    }

    let character = uow.insert_character(&command.name).await?;
    uow.commit().await?;

    info!(
        correlation_id = %command.correlation_id,
        character_id = character.id,
        "character created"
    );

    Ok(character)
}
