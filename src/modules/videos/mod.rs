pub mod models;

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use fieldcraft_http::{error::AppError, response::Ack};
use fieldcraft_kernel::{InitCtx, Module};
use fieldcraft_store::{Filter, StoreHandle};

use models::{Video, VideoList};

/// Catalog module: list, submit, and edit videos.
pub struct VideosModule;

impl VideosModule {
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Clone)]
struct VideosState {
    store: StoreHandle,
    table: String,
}

#[async_trait]
impl Module for VideosModule {
    fn name(&self) -> &'static str {
        "videos"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            table = %ctx.settings.store.videos_table,
            "videos module initialized"
        );
        Ok(())
    }

    fn routes(&self, ctx: &InitCtx<'_>) -> Router {
        let state = VideosState {
            store: ctx.store.clone(),
            table: ctx.settings.store.videos_table.clone(),
        };
        Router::new()
            .route("/", get(list_videos))
            .route("/submit", post(submit_video))
            .route("/{video_id}", put(edit_video))
            .with_state(state)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List all videos",
                        "tags": ["Videos"],
                        "responses": {
                            "200": {
                                "description": "Full catalog, unpaginated",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "videos": {
                                                    "type": "array",
                                                    "items": { "$ref": "#/components/schemas/Video" }
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                            "500": {
                                "description": "Store failure",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/submit": {
                    "post": {
                        "summary": "Add a video to the catalog",
                        "tags": ["Videos"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Video" }
                                }
                            }
                        },
                        "responses": {
                            "201": { "description": "Video added successfully" },
                            "400": { "description": "Invalid video data" },
                            "500": { "description": "Store failure" }
                        }
                    }
                },
                "/{videoID}": {
                    "put": {
                        "summary": "Replace a video record",
                        "tags": ["Videos"],
                        "parameters": [{
                            "name": "videoID",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" }
                        }],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Video" }
                                }
                            }
                        },
                        "responses": {
                            "200": { "description": "Video updated successfully" },
                            "400": { "description": "Invalid video data" },
                            "500": { "description": "Store failure" }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Video": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "description": "Assigned by the store" },
                            "title": { "type": "string" },
                            "categories": { "type": "array", "items": { "type": "string" } },
                            "description": { "type": "string" },
                            "youtubeId": { "type": "string" },
                            "tags": { "type": "array", "items": { "type": "string" } },
                            "rating": { "type": "number", "format": "float" },
                            "date": { "type": "string" },
                            "transcript": { "type": "string" },
                            "materials": { "type": "array", "items": { "type": "string" } },
                            "steps": { "type": "array", "items": { "type": "string" } },
                            "panels": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Panel" }
                            }
                        },
                        "required": ["title", "categories", "description", "youtubeId", "tags", "rating", "date", "transcript"]
                    },
                    "Panel": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "content": { "type": "string" }
                        },
                        "required": ["title", "content"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "videos module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "videos module stopped");
        Ok(())
    }
}

/// `GET /` — full-table retrieval, no pagination or filtering.
async fn list_videos(State(state): State<VideosState>) -> Result<Json<VideoList>, AppError> {
    let rows = state
        .store
        .select_all(&state.table)
        .await
        .map_err(|e| AppError::internal(format!("Failed to fetch videos: {e}")))?;

    let videos = rows
        .into_iter()
        .map(serde_json::from_value::<Video>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::internal(format!("Failed to fetch videos: {e}")))?;

    Ok(Json(VideoList { videos }))
}

/// `POST /submit` — insert one video. Field contents are not validated.
async fn submit_video(
    State(state): State<VideosState>,
    body: Result<Json<Video>, JsonRejection>,
) -> Result<(StatusCode, Json<Ack>), AppError> {
    let Json(video) = body.map_err(|_| AppError::bad_request("Invalid video data"))?;

    let record = serde_json::to_value(&video)
        .map_err(|e| AppError::internal(format!("Failed to insert video: {e}")))?;
    state
        .store
        .insert(&state.table, record)
        .await
        .map_err(|e| AppError::internal(format!("Failed to insert video: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(Ack::new("Video added successfully")),
    ))
}

/// `PUT /{video_id}` — write the decoded record as-is against the path id.
/// An unmatched id is the store's no-op and still reports success.
async fn edit_video(
    State(state): State<VideosState>,
    Path(video_id): Path<String>,
    body: Result<Json<Video>, JsonRejection>,
) -> Result<Json<Ack>, AppError> {
    let Json(video) = body.map_err(|_| AppError::bad_request("Invalid video data"))?;

    let record = serde_json::to_value(&video)
        .map_err(|e| AppError::internal(format!("Failed to update video: {e}")))?;
    state
        .store
        .update(&state.table, record, Filter::eq("id", video_id))
        .await
        .map_err(|e| AppError::internal(format!("Failed to update video: {e}")))?;

    Ok(Json(Ack::new("Video updated successfully")))
}

/// Create a new instance of the videos module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(VideosModule::new())
}
