//! Routes for the Quest log bounded context.

use axum::extract::{Path, Query, State};
use axum::{
    Json, Router,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use questlog_core::model::Quest;
use questlog_quest::application::command_handlers;
use questlog_quest::application::query_handlers::{self, CharacterQuestsView, QuestView};
use questlog_quest::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for POST /quests/.
#[derive(Debug, Deserialize)]
pub struct CreateQuestParams {
    /// Free-text description.
    pub description: String,
    /// Experience reward; 0 when omitted.
    #[serde(default)]
    pub xp: i64,
    /// The owning character.
    pub character_id: i64,
}

/// Response body for a created quest. Omits `completed`, which is always
/// `false` at creation.
#[derive(Debug, Serialize)]
pub struct QuestCreatedResponse {
    /// The assigned identifier.
    pub id: i64,
    /// Free-text description.
    pub description: String,
    /// Experience reward.
    pub xp: i64,
}

impl From<Quest> for QuestCreatedResponse {
    fn from(quest: Quest) -> Self {
        Self {
            id: quest.id,
            description: quest.description,
            xp: quest.xp,
        }
    }
}

/// POST /quests/
#[instrument(skip(state, params), fields(character_id = params.character_id))]
async fn create_quest(
    State(state): State<AppState>,
    Query(params): Query<CreateQuestParams>,
) -> Result<Json<QuestCreatedResponse>, ApiError> {
    let command = commands::CreateQuest {
        correlation_id: Uuid::new_v4(),
        description: params.description,
        xp: params.xp,
        character_id: params.character_id,
    };

    info!(correlation_id = %command.correlation_id, "handling create_quest command");

    let quest = command_handlers::handle_create_quest(&command, &*state.repository).await?;

    Ok(Json(quest.into()))
}

/// PUT /quests/{quest_id}/complete
#[instrument(skip(state))]
async fn complete_quest(
    State(state): State<AppState>,
    Path(quest_id): Path<i64>,
) -> Result<Json<QuestView>, ApiError> {
    let command = commands::CompleteQuest {
        correlation_id: Uuid::new_v4(),
        quest_id,
    };

    info!(correlation_id = %command.correlation_id, "handling complete_quest command");

    let quest = command_handlers::handle_complete_quest(&command, &*state.repository).await?;

    Ok(Json(quest.into()))
}

/// GET /characters/{character_id}/quests
#[instrument(skip(state))]
async fn list_character_quests(
    State(state): State<AppState>,
    Path(character_id): Path<i64>,
) -> Result<Json<CharacterQuestsView>, ApiError> {
    let view = query_handlers::get_character_quests(character_id, &*state.repository).await?;
    Ok(Json(view))
}

/// Returns the router for the quest context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quests/", post(create_quest))
        .route("/quests", post(create_quest))
        .route("/quests/{quest_id}/complete", put(complete_quest))
        .route(
            "/characters/{character_id}/quests",
            get(list_character_quests),
        )
}
