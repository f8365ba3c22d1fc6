//! Simulated backup endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::backup::BackupReport};

use super::AuthenticatedUser;

/// Run the simulated backup job
#[utoipa::path(
    post,
    path = "/backup/run",
    tag = "backup",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Backup finished", body = BackupReport)
    )
)]
pub async fn run_backup(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<BackupReport>> {
    claims.require_write_settings()?;
    let report = state.services.backup.run().await?;
    Ok(Json(report))
}
