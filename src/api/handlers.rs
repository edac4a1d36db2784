//! Reservation endpoint handlers.

use super::error::ApiError;
use super::state::AppState;
use crate::cache::{SharedSummaries, get_reservation_summaries};
use crate::core::{ReservationProductView, products_for_reservation};
use crate::db::load_snapshot;
use crate::errors::Error;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{debug, info};

/// GET /api/reservations
///
/// All reservation summaries, served from the cache when fresh.
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<SharedSummaries>, ApiError> {
    let summaries = get_reservation_summaries(&state.store, &state.cache).await?;
    Ok(Json(summaries))
}

/// GET /api/reservations/{id}
///
/// Products of one reservation. Always read fresh, never cached.
pub async fn get_reservation_products(
    State(state): State<AppState>,
    Path(reservation_uuid): Path<String>,
) -> Result<Json<Vec<ReservationProductView>>, ApiError> {
    let snapshot = load_snapshot(&state.store).await;
    let lookup_uuid = reservation_uuid.clone();
    let products = tokio::task::spawn_blocking(move || {
        products_for_reservation(&lookup_uuid, &snapshot.assignments, &snapshot.charges)
    })
    .await
    .map_err(Error::from)?;
    debug!(
        "Found {} products for reservation {}",
        products.len(),
        reservation_uuid
    );
    Ok(Json(products))
}

/// POST /api/reservations/clear-cache
pub async fn clear_cache(State(state): State<AppState>) -> (StatusCode, &'static str) {
    state.cache.invalidate().await;
    info!("Reservation summaries cache cleared on request");
    (StatusCode::OK, "OK")
}
