//! Roles API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::role::{CreateRole, Role, UpdateRole},
};

use super::AuthenticatedUser;

/// List all roles
#[utoipa::path(
    get,
    path = "/roles",
    tag = "roles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Role list", body = Vec<Role>)
    )
)]
pub async fn list_roles(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Role>>> {
    claims.require_read_usuarios()?;
    let roles = state.services.roles.list().await?;
    Ok(Json(roles))
}

/// Get a role by ID
#[utoipa::path(
    get,
    path = "/roles/{id}",
    tag = "roles",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role", body = Role),
        (status = 404, description = "Role not found")
    )
)]
pub async fn get_role(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Role>> {
    claims.require_read_usuarios()?;
    let role = state.services.roles.get_by_id(id).await?;
    Ok(Json(role))
}

/// Create a role
#[utoipa::path(
    post,
    path = "/roles",
    tag = "roles",
    security(("bearer_auth" = [])),
    request_body = CreateRole,
    responses(
        (status = 201, description = "Role created", body = Role)
    )
)]
pub async fn create_role(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateRole>,
) -> AppResult<(StatusCode, Json<Role>)> {
    claims.require_write_usuarios()?;
    let role = state.services.roles.create(&data).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// Update a role
#[utoipa::path(
    put,
    path = "/roles/{id}",
    tag = "roles",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Role ID")),
    request_body = UpdateRole,
    responses(
        (status = 200, description = "Role updated", body = Role)
    )
)]
pub async fn update_role(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateRole>,
) -> AppResult<Json<Role>> {
    claims.require_write_usuarios()?;
    let role = state.services.roles.update(id, &data).await?;
    Ok(Json(role))
}

/// Delete a role. Fails with a conflict while members still hold it.
#[utoipa::path(
    delete,
    path = "/roles/{id}",
    tag = "roles",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 409, description = "Role still referenced")
    )
)]
pub async fn delete_role(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_write_usuarios()?;
    state.services.roles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
