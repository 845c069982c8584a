use std::sync::Arc;

use askama::Template;
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::template::NotFoundTemplate;

mod assets;
mod contact;
mod health;
mod index;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: Arc<dyn neonfolio_contact::MessageRelay>,
}

pub async fn fallback() -> impl IntoResponse {
    match NotFoundTemplate.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(err) => {
            tracing::error!("Failed to render not-found page: {err}");
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
