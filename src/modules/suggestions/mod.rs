pub mod models;

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use fieldcraft_http::{error::AppError, response::Ack};
use fieldcraft_kernel::{InitCtx, Module};
use fieldcraft_store::{Filter, StoreHandle};

use models::{ImprovementSuggestion, StatusPatch, SuggestionStatus};

/// Crowd-sourced improvement suggestions: submission and approval.
pub struct SuggestionsModule;

impl SuggestionsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Clone)]
struct SuggestionsState {
    store: StoreHandle,
    table: String,
}

#[async_trait]
impl Module for SuggestionsModule {
    fn name(&self) -> &'static str {
        "suggestions"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            table = %ctx.settings.store.suggestions_table,
            "suggestions module initialized"
        );
        Ok(())
    }

    fn routes(&self, ctx: &InitCtx<'_>) -> Router {
        let state = SuggestionsState {
            store: ctx.store.clone(),
            table: ctx.settings.store.suggestions_table.clone(),
        };
        Router::new()
            .route("/suggest", post(suggest_improvement))
            .route("/approve/{suggestion_id}", post(approve_improvement))
            .with_state(state)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/suggest": {
                    "post": {
                        "summary": "Submit an improvement suggestion",
                        "tags": ["Suggestions"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ImprovementSuggestion" }
                                }
                            }
                        },
                        "responses": {
                            "201": { "description": "Suggestion submitted successfully" },
                            "400": { "description": "Invalid suggestion data" },
                            "500": { "description": "Store failure" }
                        }
                    }
                },
                "/approve/{suggestionID}": {
                    "post": {
                        "summary": "Approve a suggestion",
                        "tags": ["Suggestions"],
                        "parameters": [{
                            "name": "suggestionID",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "integer" }
                        }],
                        "responses": {
                            "200": { "description": "Suggestion approved" },
                            "400": { "description": "Invalid suggestion ID" },
                            "500": { "description": "Store failure" }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "ImprovementSuggestion": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer", "description": "Assigned by the store" },
                            "videoId": { "type": "string" },
                            "suggestion": { "type": "string" },
                            "status": {
                                "type": "string",
                                "enum": ["pending", "approved", "rejected"]
                            }
                        },
                        "required": ["videoId", "suggestion"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "suggestions module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "suggestions module stopped");
        Ok(())
    }
}

/// `POST /suggest` — insert one suggestion. The referenced video is not
/// checked for existence.
async fn suggest_improvement(
    State(state): State<SuggestionsState>,
    body: Result<Json<ImprovementSuggestion>, JsonRejection>,
) -> Result<(StatusCode, Json<Ack>), AppError> {
    let Json(suggestion) = body.map_err(|_| AppError::bad_request("Invalid suggestion data"))?;

    let record = serde_json::to_value(&suggestion)
        .map_err(|e| AppError::internal(format!("Failed to insert suggestion: {e}")))?;
    state
        .store
        .insert(&state.table, record)
        .await
        .map_err(|e| AppError::internal(format!("Failed to insert suggestion: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(Ack::new("Suggestion submitted successfully")),
    ))
}

/// `POST /approve/{suggestion_id}` — set the matching row's status to
/// approved. Re-approval is a silent success, as is an unmatched id.
async fn approve_improvement(
    State(state): State<SuggestionsState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Ack>, AppError> {
    let suggestion_id: i32 = raw_id
        .parse()
        .map_err(|_| AppError::bad_request("Invalid suggestion ID"))?;

    let patch = serde_json::to_value(StatusPatch {
        status: SuggestionStatus::Approved,
    })
    .map_err(|e| AppError::internal(format!("Failed to approve suggestion: {e}")))?;

    state
        .store
        .update(&state.table, patch, Filter::eq("id", suggestion_id))
        .await
        .map_err(|e| AppError::internal(format!("Failed to approve suggestion: {e}")))?;

    Ok(Json(Ack::new("Suggestion approved")))
}

/// Create a new instance of the suggestions module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(SuggestionsModule::new())
}
