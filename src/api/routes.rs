//! REST API routes configuration

use crate::api::handlers::{self, ApiState};
use crate::api::websocket::ws_handler;
use axum::{
    body::Body,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// JSON 404 for anything unrouted
async fn fallback_handler(uri: Uri) -> impl IntoResponse {
    log::debug!("No route for {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from(r#"{"error":"Not Found"}"#),
    )
        .into_response()
}

/// Create the API router with all routes
pub fn create_router(state: ApiState) -> Router {
    // Configure CORS for browser access
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session event stream
        .route("/ws", get(ws_handler))
        // Session and routing
        .route("/api/session", get(handlers::get_session))
        .route("/api/view", get(handlers::get_view))
        .route("/api/page", post(handlers::set_page))
        .route("/api/network", get(handlers::get_network))
        // Wallet
        .route("/api/wallet/connect", post(handlers::connect_wallet))
        .route("/api/wallet/disconnect", post(handlers::disconnect_wallet))
        // Editor workflow
        .route("/api/source", put(handlers::set_source))
        .route("/api/compile", post(handlers::compile))
        .route("/api/deploy", post(handlers::deploy))
        // Contracts
        .route(
            "/api/contracts",
            get(handlers::list_contracts).post(handlers::save_contract),
        )
        .route(
            "/api/contracts/{name}/restore",
            post(handlers::restore_contract),
        )
        .fallback(fallback_handler)
        .with_state(state)
        .layer(cors)
}
