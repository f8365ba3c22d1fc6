//! Roles repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::role::{CreateRole, Role, UpdateRole},
};

use super::empty_if_unprovisioned;

#[derive(Clone)]
pub struct RolesRepository {
    pool: Pool<Postgres>,
}

impl RolesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all roles ordered by name
    pub async fn list(&self) -> AppResult<Vec<Role>> {
        let res = sqlx::query_as::<_, Role>("SELECT * FROM roles ORDER BY nombre")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from);
        empty_if_unprovisioned(res, "roles")
    }

    /// Get one role by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Role> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))
    }

    /// Create a role
    pub async fn create(&self, data: &CreateRole) -> AppResult<Role> {
        let row = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (
                nombre, vehicles_rights, inventory_rights, maintenance_rights,
                tareas_rights, usuarios_rights, settings_rights
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.nombre)
        .bind(&data.vehicles_rights)
        .bind(&data.inventory_rights)
        .bind(&data.maintenance_rights)
        .bind(&data.tareas_rights)
        .bind(&data.usuarios_rights)
        .bind(&data.settings_rights)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a role, applying only the supplied fields
    pub async fn update(&self, id: i32, data: &UpdateRole) -> AppResult<Role> {
        let mut sets = Vec::new();
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.nombre, "nombre");
        add_field!(data.vehicles_rights, "vehicles_rights");
        add_field!(data.inventory_rights, "inventory_rights");
        add_field!(data.maintenance_rights, "maintenance_rights");
        add_field!(data.tareas_rights, "tareas_rights");
        add_field!(data.usuarios_rights, "usuarios_rights");
        add_field!(data.settings_rights, "settings_rights");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE roles SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Role>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.nombre);
        bind_field!(data.vehicles_rights);
        bind_field!(data.inventory_rights);
        bind_field!(data.maintenance_rights);
        bind_field!(data.tareas_rights);
        bind_field!(data.usuarios_rights);
        bind_field!(data.settings_rights);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))
    }

    /// Delete a role. Members holding it make the store reject this with a
    /// foreign-key violation.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Role {} not found", id)));
        }
        Ok(())
    }
}
