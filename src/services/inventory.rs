//! Inventory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::inventory::{CreateInventoryItem, InventoryItem, UpdateInventoryItem},
    repository::Repository,
    services::deletion::DeletionGate,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
    gate: DeletionGate,
}

impl InventoryService {
    pub fn new(repository: Repository, gate: DeletionGate) -> Self {
        Self { repository, gate }
    }

    pub async fn list(&self) -> AppResult<Vec<InventoryItem>> {
        self.repository.inventory.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<InventoryItem> {
        self.repository.inventory.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateInventoryItem) -> AppResult<InventoryItem> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.inventory.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateInventoryItem) -> AppResult<InventoryItem> {
        self.repository.inventory.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let _ticket = self.gate.begin("inventory_item", id)?;
        self.repository.inventory.delete(id).await
    }
}
