//! Bodegas service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::bodega::{Bodega, CreateBodega, UpdateBodega},
    repository::Repository,
    services::deletion::DeletionGate,
};

#[derive(Clone)]
pub struct BodegasService {
    repository: Repository,
    gate: DeletionGate,
}

impl BodegasService {
    pub fn new(repository: Repository, gate: DeletionGate) -> Self {
        Self { repository, gate }
    }

    pub async fn list(&self) -> AppResult<Vec<Bodega>> {
        self.repository.bodegas.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Bodega> {
        self.repository.bodegas.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateBodega) -> AppResult<Bodega> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.bodegas.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateBodega) -> AppResult<Bodega> {
        self.repository.bodegas.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let _ticket = self.gate.begin("bodega", id)?;
        self.repository.bodegas.delete(id).await
    }
}
