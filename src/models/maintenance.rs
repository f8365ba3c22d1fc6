//! Maintenance task model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Scheduled maintenance for a vehicle, ERA, EPP or generic equipment item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceTask {
    pub id: i32,
    /// Name of the item under maintenance (plate, serial, label)
    pub item_name: String,
    /// Kind of target (0=vehicle, 1=ERA, 2=EPP, 3=equipment)
    pub item_type: i16,
    pub scheduled_date: NaiveDate,
    pub last_performed_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    /// Member responsible for carrying it out
    pub responsible_id: Option<i32>,
    pub responsible_nombre: Option<String>,
    /// Status (0=pendiente, 1=en proceso, 2=completada)
    pub status: i16,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create maintenance task request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenanceTask {
    #[validate(length(min = 1, message = "Item name is required"))]
    pub item_name: String,
    /// Kind of target (0=vehicle, 1=ERA, 2=EPP, 3=equipment)
    pub item_type: Option<i16>,
    pub scheduled_date: NaiveDate,
    pub last_performed_date: Option<NaiveDate>,
    pub responsible_id: Option<i32>,
}

/// Update maintenance task request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMaintenanceTask {
    pub item_name: Option<String>,
    pub item_type: Option<i16>,
    pub scheduled_date: Option<NaiveDate>,
    pub last_performed_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub responsible_id: Option<i32>,
    pub status: Option<i16>,
}
