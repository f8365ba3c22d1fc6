//! Simulated fleet tracking endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::tracking::UnitSnapshot};

use super::AuthenticatedUser;

/// Poll the simulated fleet: advances the simulation one tick and returns
/// the updated snapshot
#[utoipa::path(
    get,
    path = "/tracking/fleet",
    tag = "tracking",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Fleet snapshot", body = Vec<UnitSnapshot>)
    )
)]
pub async fn poll_fleet(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<UnitSnapshot>>> {
    claims.require_read_vehicles()?;
    let snapshot = state.services.tracking.refresh()?;
    Ok(Json(snapshot))
}

/// Re-seed the simulated fleet from the vehicles table
#[utoipa::path(
    post,
    path = "/tracking/seed",
    tag = "tracking",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Fleet seeded", body = Vec<UnitSnapshot>)
    )
)]
pub async fn seed_fleet(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<UnitSnapshot>>> {
    claims.require_write_vehicles()?;
    let vehicles = state.services.vehicles.list().await?;
    state.services.tracking.seed_from_vehicles(&vehicles)?;
    let snapshot = state.services.tracking.snapshot()?;
    Ok(Json(snapshot))
}
