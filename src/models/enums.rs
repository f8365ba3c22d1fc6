//! Shared domain enums (stored as i16 codes in the database)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// VehicleStatus
// ---------------------------------------------------------------------------

/// Vehicle operational status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum VehicleStatus {
    Operational = 0,
    InMaintenance = 1,
    OutOfService = 2,
}

impl From<i16> for VehicleStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => VehicleStatus::InMaintenance,
            2 => VehicleStatus::OutOfService,
            _ => VehicleStatus::Operational,
        }
    }
}

impl From<VehicleStatus> for i16 {
    fn from(s: VehicleStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            VehicleStatus::Operational => "Operativo",
            VehicleStatus::InMaintenance => "En Mantenimiento",
            VehicleStatus::OutOfService => "Fuera de Servicio",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceStatus
// ---------------------------------------------------------------------------

/// Maintenance task status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum MaintenanceStatus {
    Pendiente = 0,
    EnProceso = 1,
    Completada = 2,
}

impl From<i16> for MaintenanceStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => MaintenanceStatus::EnProceso,
            2 => MaintenanceStatus::Completada,
            _ => MaintenanceStatus::Pendiente,
        }
    }
}

impl From<MaintenanceStatus> for i16 {
    fn from(s: MaintenanceStatus) -> Self {
        s as i16
    }
}

// ---------------------------------------------------------------------------
// MaintenanceItemType
// ---------------------------------------------------------------------------

/// Kind of item a maintenance task targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum MaintenanceItemType {
    Vehicle = 0,
    /// Self-contained breathing apparatus
    Era = 1,
    /// Personal protective equipment
    Epp = 2,
    Equipment = 3,
}

impl From<i16> for MaintenanceItemType {
    fn from(v: i16) -> Self {
        match v {
            1 => MaintenanceItemType::Era,
            2 => MaintenanceItemType::Epp,
            3 => MaintenanceItemType::Equipment,
            _ => MaintenanceItemType::Vehicle,
        }
    }
}

impl From<MaintenanceItemType> for i16 {
    fn from(t: MaintenanceItemType) -> Self {
        t as i16
    }
}

impl std::fmt::Display for MaintenanceItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceItemType::Vehicle => "Vehículo",
            MaintenanceItemType::Era => "ERA",
            MaintenanceItemType::Epp => "EPP",
            MaintenanceItemType::Equipment => "Equipo",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// TareaStatus
// ---------------------------------------------------------------------------

/// Task status codes. JSON labels are the Spanish variant names the
/// dashboard displays ("Pendiente", "EnProgreso", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum TareaStatus {
    Pendiente = 0,
    EnProgreso = 1,
    Completada = 2,
    Cancelada = 3,
}

impl TareaStatus {
    /// Active tasks are the ones still showing up on a member's worklist
    pub fn is_active(&self) -> bool {
        matches!(self, TareaStatus::Pendiente | TareaStatus::EnProgreso)
    }
}

impl From<i16> for TareaStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => TareaStatus::EnProgreso,
            2 => TareaStatus::Completada,
            3 => TareaStatus::Cancelada,
            _ => TareaStatus::Pendiente,
        }
    }
}

impl From<TareaStatus> for i16 {
    fn from(s: TareaStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for TareaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TareaStatus::Pendiente => "Pendiente",
            TareaStatus::EnProgreso => "En Progreso",
            TareaStatus::Completada => "Completada",
            TareaStatus::Cancelada => "Cancelada",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ChecklistStatus
// ---------------------------------------------------------------------------

/// Completion status derived from per-item checked states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum ChecklistStatus {
    Completa = 0,
    Incompleta = 1,
}

impl From<i16> for ChecklistStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => ChecklistStatus::Incompleta,
            _ => ChecklistStatus::Completa,
        }
    }
}

impl From<ChecklistStatus> for i16 {
    fn from(s: ChecklistStatus) -> Self {
        s as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tarea_status_roundtrip() {
        for code in 0..4i16 {
            let status = TareaStatus::from(code);
            assert_eq!(i16::from(status), code);
        }
        // unknown codes fall back to Pendiente
        assert_eq!(TareaStatus::from(99), TareaStatus::Pendiente);
    }

    #[test]
    fn tarea_status_serializes_to_spanish_label() {
        let json = serde_json::to_string(&TareaStatus::Pendiente).unwrap();
        assert_eq!(json, "\"Pendiente\"");
    }

    #[test]
    fn active_statuses() {
        assert!(TareaStatus::Pendiente.is_active());
        assert!(TareaStatus::EnProgreso.is_active());
        assert!(!TareaStatus::Completada.is_active());
        assert!(!TareaStatus::Cancelada.is_active());
    }
}
