//! Checklist API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::checklist::{
        ChecklistCompletion, ChecklistTemplate, CreateChecklistCompletion, CreateChecklistTemplate,
    },
};

use super::AuthenticatedUser;

/// List checklist templates
#[utoipa::path(
    get,
    path = "/checklists/templates",
    tag = "checklists",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Template list", body = Vec<ChecklistTemplate>)
    )
)]
pub async fn list_templates(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ChecklistTemplate>>> {
    claims.require_read_maintenance()?;
    let templates = state.services.checklists.list_templates().await?;
    Ok(Json(templates))
}

/// Get a checklist template by ID
#[utoipa::path(
    get,
    path = "/checklists/templates/{id}",
    tag = "checklists",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Template ID")),
    responses(
        (status = 200, description = "Template", body = ChecklistTemplate),
        (status = 404, description = "Template not found")
    )
)]
pub async fn get_template(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ChecklistTemplate>> {
    claims.require_read_maintenance()?;
    let template = state.services.checklists.get_template(id).await?;
    Ok(Json(template))
}

/// Create a checklist template
#[utoipa::path(
    post,
    path = "/checklists/templates",
    tag = "checklists",
    security(("bearer_auth" = [])),
    request_body = CreateChecklistTemplate,
    responses(
        (status = 201, description = "Template created", body = ChecklistTemplate)
    )
)]
pub async fn create_template(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateChecklistTemplate>,
) -> AppResult<(StatusCode, Json<ChecklistTemplate>)> {
    claims.require_write_maintenance()?;
    let template = state.services.checklists.create_template(&data).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// Delete a checklist template
#[utoipa::path(
    delete,
    path = "/checklists/templates/{id}",
    tag = "checklists",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Template ID")),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 409, description = "Template still referenced")
    )
)]
pub async fn delete_template(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_write_maintenance()?;
    state.services.checklists.delete_template(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List checklist completions, most recent first
#[utoipa::path(
    get,
    path = "/checklists/completions",
    tag = "checklists",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Completion list", body = Vec<ChecklistCompletion>)
    )
)]
pub async fn list_completions(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ChecklistCompletion>>> {
    claims.require_read_maintenance()?;
    let completions = state.services.checklists.list_completions().await?;
    Ok(Json(completions))
}

/// Get a completion by ID
#[utoipa::path(
    get,
    path = "/checklists/completions/{id}",
    tag = "checklists",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Completion ID")),
    responses(
        (status = 200, description = "Completion", body = ChecklistCompletion),
        (status = 404, description = "Completion not found")
    )
)]
pub async fn get_completion(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ChecklistCompletion>> {
    claims.require_read_maintenance()?;
    let completion = state.services.checklists.get_completion(id).await?;
    Ok(Json(completion))
}

/// Record a filled-in checklist, crediting the caller
#[utoipa::path(
    post,
    path = "/checklists/completions",
    tag = "checklists",
    security(("bearer_auth" = [])),
    request_body = CreateChecklistCompletion,
    responses(
        (status = 201, description = "Completion recorded", body = ChecklistCompletion)
    )
)]
pub async fn record_completion(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateChecklistCompletion>,
) -> AppResult<(StatusCode, Json<ChecklistCompletion>)> {
    claims.require_write_maintenance()?;
    let completion = state
        .services
        .checklists
        .record_completion(&data, claims.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(completion)))
}
