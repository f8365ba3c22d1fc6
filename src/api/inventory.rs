//! Inventory API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::inventory::{CreateInventoryItem, InventoryItem, UpdateInventoryItem},
};

use super::AuthenticatedUser;

/// List all inventory items
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Inventory list", body = Vec<InventoryItem>)
    )
)]
pub async fn list_inventory(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<InventoryItem>>> {
    claims.require_read_inventory()?;
    let items = state.services.inventory.list().await?;
    Ok(Json(items))
}

/// Get an inventory item by ID
#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = "inventory",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Inventory item", body = InventoryItem),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_inventory_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<InventoryItem>> {
    claims.require_read_inventory()?;
    let item = state.services.inventory.get_by_id(id).await?;
    Ok(Json(item))
}

/// Create an inventory item
#[utoipa::path(
    post,
    path = "/inventory",
    tag = "inventory",
    security(("bearer_auth" = [])),
    request_body = CreateInventoryItem,
    responses(
        (status = 201, description = "Item created", body = InventoryItem)
    )
)]
pub async fn create_inventory_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateInventoryItem>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    claims.require_write_inventory()?;
    let item = state.services.inventory.create(&data).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an inventory item
#[utoipa::path(
    put,
    path = "/inventory/{id}",
    tag = "inventory",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Inventory item ID")),
    request_body = UpdateInventoryItem,
    responses(
        (status = 200, description = "Item updated", body = InventoryItem)
    )
)]
pub async fn update_inventory_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateInventoryItem>,
) -> AppResult<Json<InventoryItem>> {
    claims.require_write_inventory()?;
    let item = state.services.inventory.update(id, &data).await?;
    Ok(Json(item))
}

/// Delete an inventory item
#[utoipa::path(
    delete,
    path = "/inventory/{id}",
    tag = "inventory",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 204, description = "Item deleted")
    )
)]
pub async fn delete_inventory_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_write_inventory()?;
    state.services.inventory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
