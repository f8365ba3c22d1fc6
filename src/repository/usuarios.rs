//! Usuarios repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::usuario::{CreateUsuario, UpdateUsuario, Usuario},
};

use super::empty_if_unprovisioned;

const SELECT_WITH_ROLE: &str = r#"
    SELECT u.id, u.nombre, u.login, u.password,
           u.rol_id, r.nombre AS rol_nombre,
           u.crea_date, u.modif_date
    FROM usuarios u
    LEFT JOIN roles r ON u.rol_id = r.id
"#;

#[derive(Clone)]
pub struct UsuariosRepository {
    pool: Pool<Postgres>,
}

impl UsuariosRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all members ordered by name
    pub async fn list(&self) -> AppResult<Vec<Usuario>> {
        let query = format!("{} ORDER BY u.nombre", SELECT_WITH_ROLE);
        let res = sqlx::query_as::<_, Usuario>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from);
        empty_if_unprovisioned(res, "usuarios")
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Usuario> {
        let query = format!("{} WHERE u.id = $1", SELECT_WITH_ROLE);
        sqlx::query_as::<_, Usuario>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Usuario {} not found", id)))
    }

    /// Get member by login (authentication lookup)
    pub async fn get_by_login(&self, login: &str) -> AppResult<Option<Usuario>> {
        let query = format!("{} WHERE LOWER(u.login) = LOWER($1)", SELECT_WITH_ROLE);
        let usuario = sqlx::query_as::<_, Usuario>(&query)
            .bind(login)
            .fetch_optional(&self.pool)
            .await?;
        Ok(usuario)
    }

    /// Create a member. The password arrives already hashed.
    pub async fn create(&self, data: &CreateUsuario, password: Option<String>) -> AppResult<Usuario> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO usuarios (nombre, login, password, rol_id, crea_date, modif_date)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id
            "#,
        )
        .bind(&data.nombre)
        .bind(&data.login)
        .bind(&password)
        .bind(data.rol_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a member, applying only the supplied fields
    pub async fn update(
        &self,
        id: i32,
        data: &UpdateUsuario,
        password: Option<String>,
    ) -> AppResult<Usuario> {
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

        add_field!(data.nombre, "nombre");
        add_field!(data.login, "login");
        add_field!(data.rol_id, "rol_id");

        if password.is_some() {
            sets.push(format!("password = ${}", idx));
        }

        let query = format!("UPDATE usuarios SET {} WHERE id = {}", sets.join(", "), id);

        let mut builder = sqlx::query(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.nombre);
        bind_field!(data.login);
        bind_field!(data.rol_id);

        if let Some(ref hash) = password {
            builder = builder.bind(hash);
        }

        let result = builder.execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Usuario {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Delete a member. Tareas or maintenance rows referencing the member
    /// make the store reject this with a foreign-key violation.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Usuario {} not found", id)));
        }
        Ok(())
    }
}
