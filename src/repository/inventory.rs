//! Inventory repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::inventory::{CreateInventoryItem, InventoryItem, UpdateInventoryItem},
};

use super::empty_if_unprovisioned;

const SELECT_WITH_NAMES: &str = r#"
    SELECT i.id, i.name, i.code, i.category,
           i.bodega_id, b.nombre AS bodega_nombre,
           i.quantity, i.assigned_vehicle_id, v.plate AS assigned_vehicle_plate,
           i.crea_date, i.modif_date
    FROM inventory_items i
    LEFT JOIN bodegas b ON i.bodega_id = b.id
    LEFT JOIN vehicles v ON i.assigned_vehicle_id = v.id
"#;

#[derive(Clone)]
pub struct InventoryRepository {
    pool: Pool<Postgres>,
}

impl InventoryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all inventory items with warehouse and vehicle labels
    pub async fn list(&self) -> AppResult<Vec<InventoryItem>> {
        let query = format!("{} ORDER BY i.name, i.code", SELECT_WITH_NAMES);
        let res = sqlx::query_as::<_, InventoryItem>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from);
        empty_if_unprovisioned(res, "inventory_items")
    }

    /// Get one inventory item by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<InventoryItem> {
        let query = format!("{} WHERE i.id = $1", SELECT_WITH_NAMES);
        sqlx::query_as::<_, InventoryItem>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inventory item {} not found", id)))
    }

    /// Create an inventory item
    pub async fn create(&self, data: &CreateInventoryItem) -> AppResult<InventoryItem> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO inventory_items (
                name, code, category, bodega_id, quantity, assigned_vehicle_id,
                crea_date, modif_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.code)
        .bind(&data.category)
        .bind(data.bodega_id)
        .bind(data.quantity)
        .bind(data.assigned_vehicle_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an inventory item, applying only the supplied fields
    pub async fn update(&self, id: i32, data: &UpdateInventoryItem) -> AppResult<InventoryItem> {
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

        add_field!(data.name, "name");
        add_field!(data.code, "code");
        add_field!(data.category, "category");
        add_field!(data.bodega_id, "bodega_id");
        add_field!(data.quantity, "quantity");
        add_field!(data.assigned_vehicle_id, "assigned_vehicle_id");

        let query = format!(
            "UPDATE inventory_items SET {} WHERE id = {}",
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

        bind_field!(data.name);
        bind_field!(data.code);
        bind_field!(data.category);
        bind_field!(data.bodega_id);
        bind_field!(data.quantity);
        bind_field!(data.assigned_vehicle_id);

        let result = builder.execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Inventory item {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Delete an inventory item
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Inventory item {} not found", id)));
        }
        Ok(())
    }
}
