pub mod auth;
pub mod error_handling;
pub mod guards;
pub mod logging;

use axum::Router;
use tower_http::cors::CorsLayer;

/// Apply default middleware layers (logging, CORS).
pub fn with_defaults(router: Router) -> Router {
    logging::add_tracing(router).layer(CorsLayer::permissive())
}
