//! Maintenance tasks repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::enums::{MaintenanceItemType, MaintenanceStatus},
    models::maintenance::{CreateMaintenanceTask, MaintenanceTask, UpdateMaintenanceTask},
};

use super::empty_if_unprovisioned;

const SELECT_WITH_NAMES: &str = r#"
    SELECT m.id, m.item_name, m.item_type,
           m.scheduled_date, m.last_performed_date, m.completed_date,
           m.responsible_id, u.nombre AS responsible_nombre,
           m.status, m.crea_date, m.modif_date
    FROM maintenance_tasks m
    LEFT JOIN usuarios u ON m.responsible_id = u.id
"#;

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all maintenance tasks ordered by schedule
    pub async fn list(&self) -> AppResult<Vec<MaintenanceTask>> {
        let query = format!("{} ORDER BY m.scheduled_date, m.item_name", SELECT_WITH_NAMES);
        let res = sqlx::query_as::<_, MaintenanceTask>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from);
        empty_if_unprovisioned(res, "maintenance_tasks")
    }

    /// Get one maintenance task by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceTask> {
        let query = format!("{} WHERE m.id = $1", SELECT_WITH_NAMES);
        sqlx::query_as::<_, MaintenanceTask>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance task {} not found", id)))
    }

    /// Create a maintenance task
    pub async fn create(&self, data: &CreateMaintenanceTask) -> AppResult<MaintenanceTask> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO maintenance_tasks (
                item_name, item_type, scheduled_date, last_performed_date,
                responsible_id, status, crea_date, modif_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id
            "#,
        )
        .bind(&data.item_name)
        .bind(data.item_type.unwrap_or(MaintenanceItemType::Vehicle as i16))
        .bind(data.scheduled_date)
        .bind(data.last_performed_date)
        .bind(data.responsible_id)
        .bind(MaintenanceStatus::Pendiente as i16)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a maintenance task, applying only the supplied fields
    pub async fn update(&self, id: i32, data: &UpdateMaintenanceTask) -> AppResult<MaintenanceTask> {
        let now = Utc::now();
        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.item_name, "item_name");
        add_field!(data.item_type, "item_type");
        add_field!(data.scheduled_date, "scheduled_date");
        add_field!(data.last_performed_date, "last_performed_date");
        add_field!(data.completed_date, "completed_date");
        add_field!(data.responsible_id, "responsible_id");
        add_field!(data.status, "status");

        let query = format!(
            "UPDATE maintenance_tasks SET {} WHERE id = {}",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.item_name);
        bind_field!(data.item_type);
        bind_field!(data.scheduled_date);
        bind_field!(data.last_performed_date);
        bind_field!(data.completed_date);
        bind_field!(data.responsible_id);
        bind_field!(data.status);

        let result = builder.execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Maintenance task {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Delete a maintenance task
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Maintenance task {} not found", id)));
        }
        Ok(())
    }
}
