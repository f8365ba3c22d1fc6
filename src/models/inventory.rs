//! Inventory item model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Inventory item record. List and get queries join the warehouse name and
/// the assigned vehicle plate so the dashboard shows readable labels.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    /// Internal inventory code, unique
    pub code: String,
    pub category: Option<String>,
    /// Warehouse holding the item
    pub bodega_id: Option<i32>,
    pub bodega_nombre: Option<String>,
    pub quantity: i32,
    /// Vehicle the item is assigned to, if any
    pub assigned_vehicle_id: Option<i32>,
    pub assigned_vehicle_plate: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create inventory item request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryItem {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
    pub category: Option<String>,
    pub bodega_id: Option<i32>,
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i32,
    pub assigned_vehicle_id: Option<i32>,
}

/// Update inventory item request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateInventoryItem {
    pub name: Option<String>,
    pub code: Option<String>,
    pub category: Option<String>,
    pub bodega_id: Option<i32>,
    pub quantity: Option<i32>,
    pub assigned_vehicle_id: Option<i32>,
}
