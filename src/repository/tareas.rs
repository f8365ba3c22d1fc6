//! Tareas repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::enums::TareaStatus,
    models::tarea::{CreateTarea, Tarea, TareaRow, UpdateTarea},
};

use super::empty_if_unprovisioned;

const SELECT_WITH_NAMES: &str = r#"
    SELECT t.id, t.descripcion,
           t.assigned_to, ua.nombre AS assigned_nombre,
           t.due_date, t.status,
           t.created_by, uc.nombre AS creator_nombre,
           t.crea_date, t.modif_date
    FROM tareas t
    LEFT JOIN usuarios ua ON t.assigned_to = ua.id
    LEFT JOIN usuarios uc ON t.created_by = uc.id
"#;

#[derive(Clone)]
pub struct TareasRepository {
    pool: Pool<Postgres>,
}

impl TareasRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all tareas ordered by due date then description
    pub async fn list(&self) -> AppResult<Vec<Tarea>> {
        let query = format!("{} ORDER BY t.due_date, t.descripcion", SELECT_WITH_NAMES);
        let res = sqlx::query_as::<_, TareaRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
            .map(|rows| rows.into_iter().map(Tarea::from).collect());
        empty_if_unprovisioned(res, "tareas")
    }

    /// Active (pendiente / en progreso) tareas assigned to one member
    pub async fn list_active_for_user(&self, user_id: i32) -> AppResult<Vec<Tarea>> {
        let query = format!(
            "{} WHERE t.assigned_to = $1 AND t.status IN (0, 1) ORDER BY t.due_date, t.descripcion",
            SELECT_WITH_NAMES
        );
        let res = sqlx::query_as::<_, TareaRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
            .map(|rows| rows.into_iter().map(Tarea::from).collect());
        empty_if_unprovisioned(res, "tareas")
    }

    /// Get one tarea by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Tarea> {
        let query = format!("{} WHERE t.id = $1", SELECT_WITH_NAMES);
        sqlx::query_as::<_, TareaRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Tarea::from)
            .ok_or_else(|| AppError::NotFound(format!("Tarea {} not found", id)))
    }

    /// Create a tarea
    pub async fn create(&self, data: &CreateTarea, created_by: i32) -> AppResult<Tarea> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO tareas (
                descripcion, assigned_to, due_date, status, created_by,
                crea_date, modif_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING id
            "#,
        )
        .bind(&data.descripcion)
        .bind(data.assigned_to)
        .bind(data.due_date)
        .bind(data.status.unwrap_or(TareaStatus::Pendiente as i16))
        .bind(created_by)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a tarea, applying only the supplied fields
    pub async fn update(&self, id: i32, data: &UpdateTarea) -> AppResult<Tarea> {
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

        add_field!(data.descripcion, "descripcion");
        add_field!(data.assigned_to, "assigned_to");
        add_field!(data.due_date, "due_date");
        add_field!(data.status, "status");

        let query = format!("UPDATE tareas SET {} WHERE id = {}", sets.join(", "), id);

        let mut builder = sqlx::query(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.descripcion);
        bind_field!(data.assigned_to);
        bind_field!(data.due_date);
        bind_field!(data.status);

        let result = builder.execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Tarea {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Delete a tarea
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM tareas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Tarea {} not found", id)));
        }
        Ok(())
    }
}
