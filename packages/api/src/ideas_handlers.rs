use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Deserialize;
use tracing::{error, info};

use ideenportal_ideas::IdeaCreateInput;

use crate::auth::CurrentUser;
use crate::response::{ApiResponse, ServiceErrorResponse};
use crate::AppState;

/// Request body for editing a description
#[derive(Deserialize)]
pub struct UpdateDescriptionRequest {
    description: String,
}

/// List all ideas for the current actor
pub async fn list_ideas(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
) -> impl IntoResponse {
    info!("Listing ideas for actor {}", actor.id);

    match state.service.list_ideas(&actor).await {
        Ok(views) => {
            info!("Retrieved {} ideas", views.len());
            (StatusCode::OK, ResponseJson(ApiResponse::success(views))).into_response()
        }
        Err(e) => {
            error!("Failed to list ideas: {}", e);
            ServiceErrorResponse(e).into_response()
        }
    }
}

/// Get a specific idea by ID
pub async fn get_idea(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("Getting idea with ID: {}", id);

    match state.service.get_idea(&actor, &id).await {
        Ok(Some(view)) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(view))).into_response()
        }
        Ok(None) => {
            info!("Idea not found: {}", id);
            (
                StatusCode::NOT_FOUND,
                ResponseJson(ApiResponse::<()>::error("Idea not found".to_string())),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to get idea {}: {}", id, e);
            ServiceErrorResponse(e).into_response()
        }
    }
}

/// Submit a new idea
pub async fn submit_idea(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(input): Json<IdeaCreateInput>,
) -> impl IntoResponse {
    info!("Submitting idea '{}'", input.title);

    match state.service.submit_idea(&actor, input).await {
        Ok(view) => {
            (StatusCode::CREATED, ResponseJson(ApiResponse::success(view))).into_response()
        }
        Err(e) => {
            error!("Failed to submit idea: {}", e);
            ServiceErrorResponse(e).into_response()
        }
    }
}

/// Edit the description of an idea
pub async fn update_description(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateDescriptionRequest>,
) -> impl IntoResponse {
    info!("Updating description of idea {}", id);

    match state
        .service
        .update_description(&actor, &id, &request.description)
        .await
    {
        Ok(view) => (StatusCode::OK, ResponseJson(ApiResponse::success(view))).into_response(),
        Err(e) => {
            error!("Failed to update idea {}: {}", id, e);
            ServiceErrorResponse(e).into_response()
        }
    }
}

/// Subscribe the current actor to an idea
pub async fn subscribe(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.service.subscribe(&actor, &id).await {
        Ok(view) => (StatusCode::OK, ResponseJson(ApiResponse::success(view))).into_response(),
        Err(e) => {
            error!("Failed to subscribe to idea {}: {}", id, e);
            ServiceErrorResponse(e).into_response()
        }
    }
}

/// Unsubscribe the current actor from an idea
pub async fn unsubscribe(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.service.unsubscribe(&actor, &id).await {
        Ok(view) => (StatusCode::OK, ResponseJson(ApiResponse::success(view))).into_response(),
        Err(e) => {
            error!("Failed to unsubscribe from idea {}: {}", id, e);
            ServiceErrorResponse(e).into_response()
        }
    }
}
