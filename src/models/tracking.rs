//! Simulated fleet tracking types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Live status of a tracked unit. FueraDeServicio and EnMantenimiento are
/// terminal: the simulation never touches a unit in one of those states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TrackingStatus {
    Disponible,
    EnRuta,
    EnEmergencia,
    Regresando,
    EnMantenimiento,
    FueraDeServicio,
}

impl TrackingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TrackingStatus::FueraDeServicio | TrackingStatus::EnMantenimiento
        )
    }
}

/// Point-in-time snapshot of one unit, returned by every refresh
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UnitSnapshot {
    pub vehicle_id: i32,
    pub plate: String,
    pub lat: f64,
    pub lon: f64,
    pub status: TrackingStatus,
    /// Incident label, set once when the unit enters EnEmergencia
    pub incident: Option<String>,
    pub updated_at: DateTime<Utc>,
}
