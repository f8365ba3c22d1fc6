//! Vehicle model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::inventory::InventoryItem;

/// Vehicle record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Vehicle {
    pub id: i32,
    pub brand: String,
    pub model: String,
    /// License plate, unique across the fleet
    pub plate: String,
    /// Status (0=operational, 1=in maintenance, 2=out of service)
    pub status: i16,
    /// Next scheduled preventive maintenance
    pub next_maintenance_date: Option<NaiveDate>,
    /// Expiry of the circulation documents
    pub document_expiry_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Equipment assigned to a vehicle (hose lines, ladders, ERA units, ...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VehicleEquipment {
    pub id: i32,
    pub vehicle_id: i32,
    pub name: String,
    pub quantity: i32,
}

/// Vehicle with its assigned equipment and inventory
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VehicleDetails {
    pub vehicle: Vehicle,
    pub equipment: Vec<VehicleEquipment>,
    pub inventory: Vec<InventoryItem>,
}

/// Create vehicle request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicle {
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    #[validate(length(min = 1, message = "Plate is required"))]
    pub plate: String,
    /// Status (0=operational, 1=in maintenance, 2=out of service)
    pub status: Option<i16>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub document_expiry_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    /// Equipment rows created together with the vehicle
    #[serde(default)]
    pub equipment: Vec<CreateVehicleEquipment>,
}

/// Update vehicle request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVehicle {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub plate: Option<String>,
    pub status: Option<i16>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub document_expiry_date: Option<NaiveDate>,
    pub image_url: Option<String>,
}

/// Equipment assignment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicleEquipment {
    #[validate(length(min = 1, message = "Equipment name is required"))]
    pub name: String,
    /// Defaults to 1
    pub quantity: Option<i32>,
}
