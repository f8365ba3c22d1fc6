//! Bodegas API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::bodega::{Bodega, CreateBodega, UpdateBodega},
};

use super::AuthenticatedUser;

/// List all warehouses
#[utoipa::path(
    get,
    path = "/bodegas",
    tag = "bodegas",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Warehouse list", body = Vec<Bodega>)
    )
)]
pub async fn list_bodegas(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Bodega>>> {
    claims.require_read_inventory()?;
    let bodegas = state.services.bodegas.list().await?;
    Ok(Json(bodegas))
}

/// Get a warehouse by ID
#[utoipa::path(
    get,
    path = "/bodegas/{id}",
    tag = "bodegas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse", body = Bodega),
        (status = 404, description = "Warehouse not found")
    )
)]
pub async fn get_bodega(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Bodega>> {
    claims.require_read_inventory()?;
    let bodega = state.services.bodegas.get_by_id(id).await?;
    Ok(Json(bodega))
}

/// Create a warehouse
#[utoipa::path(
    post,
    path = "/bodegas",
    tag = "bodegas",
    security(("bearer_auth" = [])),
    request_body = CreateBodega,
    responses(
        (status = 201, description = "Warehouse created", body = Bodega)
    )
)]
pub async fn create_bodega(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateBodega>,
) -> AppResult<(StatusCode, Json<Bodega>)> {
    claims.require_write_inventory()?;
    let bodega = state.services.bodegas.create(&data).await?;
    Ok((StatusCode::CREATED, Json(bodega)))
}

/// Rename a warehouse
#[utoipa::path(
    put,
    path = "/bodegas/{id}",
    tag = "bodegas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Warehouse ID")),
    request_body = UpdateBodega,
    responses(
        (status = 200, description = "Warehouse updated", body = Bodega)
    )
)]
pub async fn update_bodega(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBodega>,
) -> AppResult<Json<Bodega>> {
    claims.require_write_inventory()?;
    let bodega = state.services.bodegas.update(id, &data).await?;
    Ok(Json(bodega))
}

/// Delete a warehouse. Fails with a conflict while inventory items are
/// still stored there.
#[utoipa::path(
    delete,
    path = "/bodegas/{id}",
    tag = "bodegas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 204, description = "Warehouse deleted"),
        (status = 409, description = "Warehouse still referenced")
    )
)]
pub async fn delete_bodega(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_write_inventory()?;
    state.services.bodegas.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
