//! Routing module for the checkout pricing service

use crate::config::ServerConfig;
use axum::{body::Body, extract::DefaultBodyLimit, extract::Request, middleware::Next, Router};
use tower_http::cors::{Any, CorsLayer};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(config: &ServerConfig) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::info!(%method, %uri, "request");
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!(%method, %uri, status = %res.status(), "request failed");
        }
        res
    });

    // Routes
    let router = Router::new()
        .merge(crate::checkout::routes())
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(log_layer);

    // Middleware: CORS (Permissive for local dev)
    if config.cors {
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors_layer)
    } else {
        router
    }
}
