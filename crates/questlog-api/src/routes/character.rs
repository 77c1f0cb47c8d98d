//! Routes for the Character roster bounded context.

use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use questlog_character::application::query_handlers::{self, CharacterListView};
use questlog_character::application::command_handlers;
use questlog_character::domain::commands;
use questlog_core::model::Character;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for POST /characters/.
#[derive(Debug, Deserialize)]
pub struct CreateCharacterParams {
    /// The new character's name.
    pub name: String,
}

/// Response body for a created character.
#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    /// The assigned identifier.
    pub id: i64,
    /// The character's name.
    pub name: String,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            name: character.name,
        }
    }
}

/// POST /characters/
#[instrument(skip(state, params), fields(name = %params.name))]
async fn create_character(
    State(state): State<AppState>,
    Query(params): Query<CreateCharacterParams>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let command = commands::CreateCharacter {
        correlation_id: Uuid::new_v4(),
        name: params.name,
    };

    info!(correlation_id = %command.correlation_id, "handling create_character command");

    let character =
        command_handlers::handle_create_character(&command, &*state.repository).await?;

    Ok(Json(character.into()))
}

/// GET /characters/
#[instrument(skip(state))]
async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<CharacterListView>, ApiError> {
    let view = query_handlers::list_characters(&*state.repository).await?;
    Ok(Json(view))
}

/// Returns the router for the character context.
///
/// The collection is served both with and without a trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters/", get(list_characters).post(create_character))
        .route("/characters", get(list_characters).post(create_character))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use questlog_core::repository::Repository;
    use questlog_test_support::{FailingRepository, InMemoryRepository};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(
        repository: Arc<dyn Repository>,
        method: &str,
        uri: &str,
    ) -> (StatusCode, Value) {
        let app = router().with_state(AppState::new(repository));
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_create_character_returns_200_with_id_and_name() {
        // Arrange
        let repo = Arc::new(InMemoryRepository::new());

        // Act
        let (status, json) = send(repo.clone(), "POST", "/characters/?name=Aria").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Aria" }));
        assert_eq!(repo.character_count(), 1);
    }

    #[tokio::test]
    async fn test_create_character_without_trailing_slash() {
        // Arrange
        let repo = Arc::new(InMemoryRepository::new());

        // Act
        let (status, json) = send(repo, "POST", "/characters?name=Brom").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "Brom");
    }

    #[tokio::test]
    async fn test_create_character_returns_400_for_taken_name() {
        // Arrange
        let repo = Arc::new(InMemoryRepository::new());
        repo.seed_character("Aria");

        // Act
        let (status, json) = send(repo.clone(), "POST", "/characters/?name=Aria").await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "conflict");
        assert_eq!(repo.character_count(), 1);
    }

    #[tokio::test]
    async fn test_create_character_returns_400_for_missing_name() {
        // Arrange
        let repo = Arc::new(InMemoryRepository::new());

        // Act
        let (status, _) = send(repo.clone(), "POST", "/characters/").await;

        // Assert — Axum rejects an undeserializable query string with 400.
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(repo.character_count(), 0);
    }

    #[tokio::test]
    async fn test_list_characters_returns_empty_list() {
        // Arrange
        let repo = Arc::new(InMemoryRepository::new());

        // Act
        let (status, json) = send(repo, "GET", "/characters/").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "characters": [] }));
    }

    #[tokio::test]
    async fn test_list_characters_returns_roster() {
        // Arrange
        let repo = Arc::new(InMemoryRepository::new());
        repo.seed_character("Aria");
        repo.seed_character("Brom");

        // Act
        let (status, json) = send(repo, "GET", "/characters").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "characters": [
                    { "id": 1, "name": "Aria" },
                    { "id": 2, "name": "Brom" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_list_characters_returns_500_when_store_fails() {
        // Arrange
        let repo = Arc::new(FailingRepository);

        // Act
        let (status, json) = send(repo, "GET", "/characters/").await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "infrastructure_error");
    }
}
