//! Query handlers for the Character roster context.

use questlog_core::error::DomainError;
use questlog_core::model::Character;
use questlog_core::repository::Repository;
use serde::Serialize;

/// Read-only view of the whole roster.
#[derive(Debug, Serialize)]
pub struct CharacterListView {
    /// Every stored character as `{id, name}`.
    pub characters: Vec<Character>,
}

/// Lists every character.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store fails.
pub async fn list_characters(repo: &dyn Repository) -> Result<CharacterListView, DomainError> {
    let mut uow = repo.begin().await?;
    let characters = uow.list_characters().await?;
    uow.commit().await?;
    Ok(CharacterListView { characters })
}

#[cfg(test)]
mod tests {
    use questlog_core::error::DomainError;

    use crate::application::query_handlers::list_characters;
    use questlog_test_support::{FailingRepository, InMemoryRepository};

    #[tokio::test]
    async fn test_list_characters_on_empty_store_is_empty() {
        // Arrange
        let repo = InMemoryRepository::new();

        // Act
        let view = list_characters(&repo).await.unwrap();

        // Assert
        assert!(view.characters.is_empty());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json, serde_json::json!({ "characters": [] }));
    }

    #[tokio::test]
    async fn test_list_characters_returns_id_and_name() {
        // Arrange
        let repo = InMemoryRepository::new();
        let aria = repo.seed_character("Aria");
        let brom = repo.seed_character("Brom");

        // Act
        let view = list_characters(&repo).await.unwrap();

        // Assert
        assert_eq!(view.characters, vec![aria, brom]);
        assert_eq!(repo.write_commits(), 0);
    }

    #[tokio::test]
    async fn test_list_characters_propagates_store_failure() {
        // Arrange
        let repo = FailingRepository;

        // Act
        let result = list_characters(&repo).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
