//! Roles service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::role::{CreateRole, Role, UpdateRole},
    repository::Repository,
    services::deletion::DeletionGate,
};

#[derive(Clone)]
pub struct RolesService {
    repository: Repository,
    gate: DeletionGate,
}

impl RolesService {
    pub fn new(repository: Repository, gate: DeletionGate) -> Self {
        Self { repository, gate }
    }

    pub async fn list(&self) -> AppResult<Vec<Role>> {
        self.repository.roles.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Role> {
        self.repository.roles.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateRole) -> AppResult<Role> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.roles.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateRole) -> AppResult<Role> {
        self.repository.roles.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let _ticket = self.gate.begin("role", id)?;
        self.repository.roles.delete(id).await
    }
}
