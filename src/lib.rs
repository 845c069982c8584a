pub mod config;
pub mod content;
pub mod error;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

use std::sync::Arc;

use neonfolio_contact::MessageRelay;

/// Create the app router
///
/// Builds the Axum router with all routes configured. The relay is injected
/// so integration tests can drive the app with a stub transport.
pub fn create_app(config: config::Config, relay: Arc<dyn MessageRelay>) -> axum::Router {
    routes::router(AppState { config, relay })
}
