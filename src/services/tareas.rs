//! Tareas service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::tarea::{CreateTarea, Tarea, UpdateTarea},
    repository::Repository,
    services::deletion::DeletionGate,
};

#[derive(Clone)]
pub struct TareasService {
    repository: Repository,
    gate: DeletionGate,
}

impl TareasService {
    pub fn new(repository: Repository, gate: DeletionGate) -> Self {
        Self { repository, gate }
    }

    pub async fn list(&self) -> AppResult<Vec<Tarea>> {
        self.repository.tareas.list().await
    }

    /// Worklist for one member: pendiente and en-progreso tareas only
    pub async fn list_active_for_user(&self, user_id: i32) -> AppResult<Vec<Tarea>> {
        self.repository.tareas.list_active_for_user(user_id).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Tarea> {
        self.repository.tareas.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateTarea, created_by: i32) -> AppResult<Tarea> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        // the assignee must exist; a readable message beats the raw FK error
        self.repository.usuarios.get_by_id(data.assigned_to).await?;
        self.repository.tareas.create(data, created_by).await
    }

    pub async fn update(&self, id: i32, data: &UpdateTarea) -> AppResult<Tarea> {
        self.repository.tareas.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let _ticket = self.gate.begin("tarea", id)?;
        self.repository.tareas.delete(id).await
    }
}
