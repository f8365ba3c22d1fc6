//! Maintenance API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::maintenance::{CreateMaintenanceTask, MaintenanceTask, UpdateMaintenanceTask},
};

use super::AuthenticatedUser;

/// List all maintenance tasks
#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Maintenance task list", body = Vec<MaintenanceTask>)
    )
)]
pub async fn list_maintenance(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<MaintenanceTask>>> {
    claims.require_read_maintenance()?;
    let tasks = state.services.maintenance.list().await?;
    Ok(Json(tasks))
}

/// Get a maintenance task by ID
#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Maintenance task ID")),
    responses(
        (status = 200, description = "Maintenance task", body = MaintenanceTask),
        (status = 404, description = "Task not found")
    )
)]
pub async fn get_maintenance_task(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MaintenanceTask>> {
    claims.require_read_maintenance()?;
    let task = state.services.maintenance.get_by_id(id).await?;
    Ok(Json(task))
}

/// Create a maintenance task
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    request_body = CreateMaintenanceTask,
    responses(
        (status = 201, description = "Task created", body = MaintenanceTask)
    )
)]
pub async fn create_maintenance_task(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateMaintenanceTask>,
) -> AppResult<(StatusCode, Json<MaintenanceTask>)> {
    claims.require_write_maintenance()?;
    let task = state.services.maintenance.create(&data).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a maintenance task
#[utoipa::path(
    put,
    path = "/maintenance/{id}",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Maintenance task ID")),
    request_body = UpdateMaintenanceTask,
    responses(
        (status = 200, description = "Task updated", body = MaintenanceTask)
    )
)]
pub async fn update_maintenance_task(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateMaintenanceTask>,
) -> AppResult<Json<MaintenanceTask>> {
    claims.require_write_maintenance()?;
    let task = state.services.maintenance.update(id, &data).await?;
    Ok(Json(task))
}

/// Delete a maintenance task
#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    tag = "maintenance",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Maintenance task ID")),
    responses(
        (status = 204, description = "Task deleted")
    )
)]
pub async fn delete_maintenance_task(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_write_maintenance()?;
    state.services.maintenance.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
