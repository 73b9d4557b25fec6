//! SPAR Web Server
//!
//! Axum adapter exposing the estimators as JSON endpoints.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use spar_core::EstimatorConfig;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{ApiError, ApiResult};
use state::AppState;

/// Headers browsers may send on cross-origin estimation requests.
const ALLOWED_HEADERS: [HeaderName; 4] = [
    header::AUTHORIZATION,
    HeaderName::from_static("x-client-info"),
    HeaderName::from_static("apikey"),
    header::CONTENT_TYPE,
];

/// CORS policy: any origin, preflight answered by the layer itself.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS)
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/risk", post(routes::risk::predict_risk))
        .route("/schedule", post(routes::schedule::estimate_schedule));

    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api", api_routes)
        .route("/functions/v1/predictRisk", post(routes::risk::predict_risk))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(config: EstimatorConfig) -> anyhow::Result<()> {
    let address = config.server.bind_address();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Web server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
