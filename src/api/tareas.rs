//! Tareas API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::tarea::{CreateTarea, Tarea, UpdateTarea},
};

use super::AuthenticatedUser;

/// Query for the active-tareas worklist
#[derive(Debug, Deserialize, IntoParams)]
pub struct ActiveTareasQuery {
    /// Member whose worklist to fetch; defaults to the caller
    pub usuario_id: Option<i32>,
}

/// List all tareas
#[utoipa::path(
    get,
    path = "/tareas",
    tag = "tareas",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tarea list", body = Vec<Tarea>)
    )
)]
pub async fn list_tareas(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Tarea>>> {
    claims.require_read_tareas()?;
    let tareas = state.services.tareas.list().await?;
    Ok(Json(tareas))
}

/// Active tareas (pendiente / en progreso) for one member
#[utoipa::path(
    get,
    path = "/tareas/activas",
    tag = "tareas",
    security(("bearer_auth" = [])),
    params(ActiveTareasQuery),
    responses(
        (status = 200, description = "Active tareas for the member", body = Vec<Tarea>)
    )
)]
pub async fn list_active_tareas(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<ActiveTareasQuery>,
) -> AppResult<Json<Vec<Tarea>>> {
    claims.require_read_tareas()?;
    let usuario_id = query.usuario_id.unwrap_or(claims.user_id);
    let tareas = state.services.tareas.list_active_for_user(usuario_id).await?;
    Ok(Json(tareas))
}

/// Get a tarea by ID
#[utoipa::path(
    get,
    path = "/tareas/{id}",
    tag = "tareas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tarea ID")),
    responses(
        (status = 200, description = "Tarea", body = Tarea),
        (status = 404, description = "Tarea not found")
    )
)]
pub async fn get_tarea(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Tarea>> {
    claims.require_read_tareas()?;
    let tarea = state.services.tareas.get_by_id(id).await?;
    Ok(Json(tarea))
}

/// Create a tarea, recording the caller as creator
#[utoipa::path(
    post,
    path = "/tareas",
    tag = "tareas",
    security(("bearer_auth" = [])),
    request_body = CreateTarea,
    responses(
        (status = 201, description = "Tarea created", body = Tarea)
    )
)]
pub async fn create_tarea(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateTarea>,
) -> AppResult<(StatusCode, Json<Tarea>)> {
    claims.require_write_tareas()?;
    let tarea = state.services.tareas.create(&data, claims.user_id).await?;
    Ok((StatusCode::CREATED, Json(tarea)))
}

/// Update a tarea
#[utoipa::path(
    put,
    path = "/tareas/{id}",
    tag = "tareas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tarea ID")),
    request_body = UpdateTarea,
    responses(
        (status = 200, description = "Tarea updated", body = Tarea)
    )
)]
pub async fn update_tarea(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateTarea>,
) -> AppResult<Json<Tarea>> {
    claims.require_write_tareas()?;
    let tarea = state.services.tareas.update(id, &data).await?;
    Ok(Json(tarea))
}

/// Delete a tarea
#[utoipa::path(
    delete,
    path = "/tareas/{id}",
    tag = "tareas",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tarea ID")),
    responses(
        (status = 204, description = "Tarea deleted")
    )
)]
pub async fn delete_tarea(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_write_tareas()?;
    state.services.tareas.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
