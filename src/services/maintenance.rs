//! Maintenance service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{CreateMaintenanceTask, MaintenanceTask, UpdateMaintenanceTask},
    repository::Repository,
    services::deletion::DeletionGate,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
    gate: DeletionGate,
}

impl MaintenanceService {
    pub fn new(repository: Repository, gate: DeletionGate) -> Self {
        Self { repository, gate }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceTask>> {
        self.repository.maintenance.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceTask> {
        self.repository.maintenance.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateMaintenanceTask) -> AppResult<MaintenanceTask> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.maintenance.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateMaintenanceTask) -> AppResult<MaintenanceTask> {
        self.repository.maintenance.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let _ticket = self.gate.begin("maintenance_task", id)?;
        self.repository.maintenance.delete(id).await
    }
}
