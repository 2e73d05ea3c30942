//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::middleware::session_auth_middleware;
use crate::server::routes::{
    check_verification_handler, get_similar_questions_handler, health_handler, home_handler,
    send_verification_handler, sign_in_handler,
};

/// Build the Axum application router
///
/// Handlers reach all external services through `ServerDeps`, so tests
/// can build the same router around substitute clients.
pub fn build_app(deps: ServerDeps) -> Router {
    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Clone session service for the middleware closure
    let sessions = deps.sessions.clone();

    Router::new()
        .route("/", get(home_handler))
        .route("/sign-in", get(sign_in_handler))
        .route("/api/send-verification", post(send_verification_handler))
        .route("/api/check-verification", post(check_verification_handler))
        .route("/api/getSimilarQuestions", post(get_similar_questions_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(
            move |req: axum::extract::Request, next: axum::middleware::Next| {
                let sessions = sessions.clone();
                async move { session_auth_middleware(sessions, req, next).await }
            },
        ))
        .layer(Extension(deps))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
