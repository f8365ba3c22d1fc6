//! Business logic services

pub mod auth;
pub mod backup;
pub mod bodegas;
pub mod checklists;
pub mod deletion;
pub mod inventory;
pub mod maintenance;
pub mod roles;
pub mod tareas;
pub mod tracking;
pub mod usuarios;
pub mod vehicles;

use crate::{
    config::{AuthConfig, BackupConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub vehicles: vehicles::VehiclesService,
    pub inventory: inventory::InventoryService,
    pub maintenance: maintenance::MaintenanceService,
    pub tareas: tareas::TareasService,
    pub usuarios: usuarios::UsuariosService,
    pub bodegas: bodegas::BodegasService,
    pub roles: roles::RolesService,
    pub checklists: checklists::ChecklistsService,
    pub tracking: tracking::TrackingService,
    pub backup: backup::BackupService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig, backup_config: BackupConfig) -> Self {
        let gate = deletion::DeletionGate::new();
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            vehicles: vehicles::VehiclesService::new(repository.clone(), gate.clone()),
            inventory: inventory::InventoryService::new(repository.clone(), gate.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone(), gate.clone()),
            tareas: tareas::TareasService::new(repository.clone(), gate.clone()),
            usuarios: usuarios::UsuariosService::new(repository.clone(), gate.clone()),
            bodegas: bodegas::BodegasService::new(repository.clone(), gate.clone()),
            roles: roles::RolesService::new(repository.clone(), gate.clone()),
            checklists: checklists::ChecklistsService::new(repository.clone(), gate),
            tracking: tracking::TrackingService::new(),
            backup: backup::BackupService::new(backup_config),
        }
    }
}
