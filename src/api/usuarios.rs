//! Usuarios API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::usuario::{CreateUsuario, UpdateUsuario, Usuario},
};

use super::AuthenticatedUser;

/// List all members
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Member list", body = Vec<Usuario>)
    )
)]
pub async fn list_usuarios(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Usuario>>> {
    claims.require_read_usuarios()?;
    let usuarios = state.services.usuarios.list().await?;
    Ok(Json(usuarios))
}

/// Get a member by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "usuarios",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member", body = Usuario),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_usuario(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Usuario>> {
    claims.require_read_usuarios()?;
    let usuario = state.services.usuarios.get_by_id(id).await?;
    Ok(Json(usuario))
}

/// Create a member
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "usuarios",
    security(("bearer_auth" = [])),
    request_body = CreateUsuario,
    responses(
        (status = 201, description = "Member created", body = Usuario)
    )
)]
pub async fn create_usuario(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateUsuario>,
) -> AppResult<(StatusCode, Json<Usuario>)> {
    claims.require_write_usuarios()?;
    let usuario = state.services.usuarios.create(&data).await?;
    Ok((StatusCode::CREATED, Json(usuario)))
}

/// Update a member
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "usuarios",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateUsuario,
    responses(
        (status = 200, description = "Member updated", body = Usuario)
    )
)]
pub async fn update_usuario(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateUsuario>,
) -> AppResult<Json<Usuario>> {
    claims.require_write_usuarios()?;
    let usuario = state.services.usuarios.update(id, &data).await?;
    Ok(Json(usuario))
}

/// Delete a member. Fails with a conflict while tareas or maintenance rows
/// still reference them.
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "usuarios",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 409, description = "Member still referenced")
    )
)]
pub async fn delete_usuario(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_write_usuarios()?;
    state.services.usuarios.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
