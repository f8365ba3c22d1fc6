//! Checklists repository for database operations

use sqlx::{types::Json, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::checklist::{
        ChecklistCompletion, ChecklistItemState, ChecklistTemplate, CreateChecklistTemplate,
    },
};

use super::empty_if_unprovisioned;

const SELECT_COMPLETION: &str = r#"
    SELECT c.id, c.template_id, t.nombre AS template_nombre,
           c.vehicle_id, c.completed_by, u.nombre AS completed_by_nombre,
           c.completion_date, c.items, c.status
    FROM checklist_completions c
    LEFT JOIN checklist_templates t ON c.template_id = t.id
    LEFT JOIN usuarios u ON c.completed_by = u.id
"#;

#[derive(Clone)]
pub struct ChecklistsRepository {
    pool: Pool<Postgres>,
}

impl ChecklistsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // --- Templates -------------------------------------------------------

    /// List all checklist templates ordered by name
    pub async fn list_templates(&self) -> AppResult<Vec<ChecklistTemplate>> {
        let res = sqlx::query_as::<_, ChecklistTemplate>(
            "SELECT * FROM checklist_templates ORDER BY nombre",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from);
        empty_if_unprovisioned(res, "checklist_templates")
    }

    /// Get one template by ID
    pub async fn get_template_by_id(&self, id: i32) -> AppResult<ChecklistTemplate> {
        sqlx::query_as::<_, ChecklistTemplate>("SELECT * FROM checklist_templates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Checklist template {} not found", id)))
    }

    /// Create a template
    pub async fn create_template(
        &self,
        data: &CreateChecklistTemplate,
    ) -> AppResult<ChecklistTemplate> {
        let row = sqlx::query_as::<_, ChecklistTemplate>(
            "INSERT INTO checklist_templates (nombre, items) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.nombre)
        .bind(Json(&data.items))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a template. Completions referencing it make the store reject
    /// this with a foreign-key violation.
    pub async fn delete_template(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM checklist_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Checklist template {} not found",
                id
            )));
        }
        Ok(())
    }

    // --- Completions -----------------------------------------------------

    /// List all completions, most recent first
    pub async fn list_completions(&self) -> AppResult<Vec<ChecklistCompletion>> {
        let query = format!("{} ORDER BY c.completion_date DESC, c.id DESC", SELECT_COMPLETION);
        let res = sqlx::query_as::<_, ChecklistCompletion>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from);
        empty_if_unprovisioned(res, "checklist_completions")
    }

    /// Get one completion by ID
    pub async fn get_completion_by_id(&self, id: i32) -> AppResult<ChecklistCompletion> {
        let query = format!("{} WHERE c.id = $1", SELECT_COMPLETION);
        sqlx::query_as::<_, ChecklistCompletion>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Checklist completion {} not found", id)))
    }

    /// Insert a completion with its pre-derived status
    pub async fn create_completion(
        &self,
        template_id: i32,
        vehicle_id: Option<i32>,
        completed_by: i32,
        completion_date: chrono::NaiveDate,
        items: &[ChecklistItemState],
        status: i16,
    ) -> AppResult<ChecklistCompletion> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO checklist_completions (
                template_id, vehicle_id, completed_by, completion_date, items, status
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(template_id)
        .bind(vehicle_id)
        .bind(completed_by)
        .bind(completion_date)
        .bind(Json(items))
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        self.get_completion_by_id(id).await
    }
}
