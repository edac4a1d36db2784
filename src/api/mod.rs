//! HTTP layer - axum routes over the reservation summaries.
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/reservations | GET | All reservation summaries (cached) |
//! | /api/reservations/{id} | GET | Products of one reservation |
//! | /api/reservations/clear-cache | POST | Drop the cached summaries |

/// Error responses and panic recovery
pub mod error;
/// Route handlers
pub mod handlers;
/// Shared handler state
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use state::AppState;

use crate::config::ServerConfig;
use crate::errors::{Error, Result};
use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

const BASE_PATH: &str = "/api/reservations";

/// Reservation routes without middleware or state.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(BASE_PATH, get(handlers::list_reservations))
        .route(
            &format!("{BASE_PATH}/clear-cache"),
            post(handlers::clear_cache),
        )
        .route(
            &format!("{BASE_PATH}/{{id}}"),
            get(handlers::get_reservation_products),
        )
}

/// CORS policy allowing credentialed requests from a single origin.
///
/// # Errors
/// Returns [`Error::Config`] if `origin` is not a valid header value.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin).map_err(|e| Error::Config {
        message: format!("Invalid CORS origin '{origin}': {e}"),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Wraps `routes` with the standard middleware and attaches `state`.
pub fn build_app(routes: Router<AppState>, state: AppState, cors: CorsLayer) -> Router {
    routes
        // Panics become `500 { code, message }` like any other failure
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    build_app(routes(), state, cors)
}

/// Binds the configured address and serves until Ctrl-C / SIGTERM.
///
/// # Errors
/// Returns an error if the CORS origin is invalid, the address cannot be bound,
/// or the server stops with an I/O error.
pub async fn run_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = build_router(state, cors_layer(&config.cors_origin)?);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| Error::Server {
            message: format!("Failed to bind {}: {e}", config.bind_address),
        })?;
    info!("Server started at http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Server {
            message: e.to_string(),
        })?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
