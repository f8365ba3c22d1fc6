//! Bodegas repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::bodega::{Bodega, CreateBodega, UpdateBodega},
};

use super::empty_if_unprovisioned;

#[derive(Clone)]
pub struct BodegasRepository {
    pool: Pool<Postgres>,
}

impl BodegasRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all warehouses ordered by name
    pub async fn list(&self) -> AppResult<Vec<Bodega>> {
        let res = sqlx::query_as::<_, Bodega>("SELECT * FROM bodegas ORDER BY nombre")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from);
        empty_if_unprovisioned(res, "bodegas")
    }

    /// Get one warehouse by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Bodega> {
        sqlx::query_as::<_, Bodega>("SELECT * FROM bodegas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bodega {} not found", id)))
    }

    /// Create a warehouse
    pub async fn create(&self, data: &CreateBodega) -> AppResult<Bodega> {
        let row = sqlx::query_as::<_, Bodega>(
            "INSERT INTO bodegas (nombre) VALUES ($1) RETURNING *",
        )
        .bind(&data.nombre)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Rename a warehouse
    pub async fn update(&self, id: i32, data: &UpdateBodega) -> AppResult<Bodega> {
        if let Some(ref nombre) = data.nombre {
            return sqlx::query_as::<_, Bodega>(
                "UPDATE bodegas SET nombre = $1 WHERE id = $2 RETURNING *",
            )
            .bind(nombre)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bodega {} not found", id)));
        }
        self.get_by_id(id).await
    }

    /// Delete a warehouse. Inventory rows stored there make the store reject
    /// this with a foreign-key violation.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bodegas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Bodega {} not found", id)));
        }
        Ok(())
    }
}
