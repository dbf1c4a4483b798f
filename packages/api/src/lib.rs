// ABOUTME: HTTP API layer for Ideenportal providing REST endpoints and routing
// ABOUTME: Integration layer over the idea service

use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use ideenportal_ideas::IdeaService;

pub mod auth;
pub mod ideas_handlers;
pub mod meta_handlers;
pub mod response;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<IdeaService>,
}

/// Creates the ideas API router
pub fn create_ideas_router() -> Router<AppState> {
    Router::new()
        .route("/", get(ideas_handlers::list_ideas))
        .route("/", post(ideas_handlers::submit_idea))
        .route("/{id}", get(ideas_handlers::get_idea))
        .route("/{id}/description", patch(ideas_handlers::update_description))
        .route("/{id}/subscribe", post(ideas_handlers::subscribe))
        .route("/{id}/unsubscribe", post(ideas_handlers::unsubscribe))
}

/// Creates the status metadata router
pub fn create_statuses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(meta_handlers::list_statuses))
        .route("/{code}/policy", get(meta_handlers::get_status_policy))
}

/// Creates the full application router
pub fn create_router(service: Arc<IdeaService>) -> Router {
    let state = AppState { service };

    Router::new()
        .nest("/api/ideas", create_ideas_router())
        .nest("/api/statuses", create_statuses_router())
        .route("/api/health", get(meta_handlers::health))
        .with_state(state)
}
