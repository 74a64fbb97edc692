use crate::api::config::{Config, ConfigError};
use crate::api::routes::{admin_routes, auth_routes, basket_routes, book_routes, order_routes};
use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The full application router. Building it touches neither the database nor the configuration.
pub fn router() -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/auth", auth_routes::routes())
        .nest("/books", book_routes::routes())
        .nest("/basket", basket_routes::routes())
        .nest("/checkout", order_routes::checkout_routes())
        .nest("/orders", order_routes::routes())
        .nest("/admin", admin_routes::routes());

    Router::new()
        .route("/api", get(|| async { "Pustok Server API is running!" }))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
}

pub async fn start() -> Result<(), ServerError> {
    let config = Config::get()?;

    let listener = TcpListener::bind(config.server_addr).await?;
    tracing::info!("Server running on http://{}", config.server_addr);

    axum::serve(listener, router()).await?;

    Ok(())
}
