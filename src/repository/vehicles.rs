//! Vehicles repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::enums::VehicleStatus,
    models::inventory::InventoryItem,
    models::vehicle::{
        CreateVehicle, CreateVehicleEquipment, UpdateVehicle, Vehicle, VehicleEquipment,
    },
};

use super::empty_if_unprovisioned;

#[derive(Clone)]
pub struct VehiclesRepository {
    pool: Pool<Postgres>,
}

impl VehiclesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all vehicles ordered by plate
    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let res = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY plate")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from);
        empty_if_unprovisioned(res, "vehicles")
    }

    /// Get vehicle by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    /// Create a vehicle and its equipment rows. There is no transaction
    /// spanning the inserts: a failing equipment row leaves the vehicle in
    /// place, matching the single-statement contract of the service layer.
    pub async fn create(&self, data: &CreateVehicle) -> AppResult<Vehicle> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO vehicles (
                brand, model, plate, status,
                next_maintenance_date, document_expiry_date, image_url,
                crea_date, modif_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING id
            "#,
        )
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.plate)
        .bind(data.status.unwrap_or(VehicleStatus::Operational as i16))
        .bind(data.next_maintenance_date)
        .bind(data.document_expiry_date)
        .bind(&data.image_url)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        for eq in &data.equipment {
            self.add_equipment(id, eq).await?;
        }

        self.get_by_id(id).await
    }

    /// Update a vehicle, applying only the supplied fields
    pub async fn update(&self, id: i32, data: &UpdateVehicle) -> AppResult<Vehicle> {
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

        add_field!(data.brand, "brand");
        add_field!(data.model, "model");
        add_field!(data.plate, "plate");
        add_field!(data.status, "status");
        add_field!(data.next_maintenance_date, "next_maintenance_date");
        add_field!(data.document_expiry_date, "document_expiry_date");
        add_field!(data.image_url, "image_url");

        let query = format!(
            "UPDATE vehicles SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Vehicle>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.brand);
        bind_field!(data.model);
        bind_field!(data.plate);
        bind_field!(data.status);
        bind_field!(data.next_maintenance_date);
        bind_field!(data.document_expiry_date);
        bind_field!(data.image_url);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    /// Delete a vehicle. Referencing inventory or equipment rows make the
    /// store reject this with a foreign-key violation.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Vehicle {} not found", id)));
        }
        Ok(())
    }

    /// List equipment assigned to a vehicle
    pub async fn list_equipment(&self, vehicle_id: i32) -> AppResult<Vec<VehicleEquipment>> {
        let res = sqlx::query_as::<_, VehicleEquipment>(
            "SELECT * FROM vehicle_equipment WHERE vehicle_id = $1 ORDER BY name",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from);
        empty_if_unprovisioned(res, "vehicle_equipment")
    }

    /// Add an equipment row to a vehicle
    pub async fn add_equipment(
        &self,
        vehicle_id: i32,
        data: &CreateVehicleEquipment,
    ) -> AppResult<VehicleEquipment> {
        let row = sqlx::query_as::<_, VehicleEquipment>(
            r#"
            INSERT INTO vehicle_equipment (vehicle_id, name, quantity)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(&data.name)
        .bind(data.quantity.unwrap_or(1))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Remove an equipment row
    pub async fn remove_equipment(&self, equipment_id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM vehicle_equipment WHERE id = $1")
            .bind(equipment_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Vehicle equipment {} not found",
                equipment_id
            )));
        }
        Ok(())
    }

    /// Inventory items assigned to a vehicle
    pub async fn list_assigned_inventory(&self, vehicle_id: i32) -> AppResult<Vec<InventoryItem>> {
        let res = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT i.id, i.name, i.code, i.category,
                   i.bodega_id, b.nombre AS bodega_nombre,
                   i.quantity, i.assigned_vehicle_id, v.plate AS assigned_vehicle_plate,
                   i.crea_date, i.modif_date
            FROM inventory_items i
            LEFT JOIN bodegas b ON i.bodega_id = b.id
            LEFT JOIN vehicles v ON i.assigned_vehicle_id = v.id
            WHERE i.assigned_vehicle_id = $1
            ORDER BY i.name
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from);
        empty_if_unprovisioned(res, "inventory_items")
    }
}
