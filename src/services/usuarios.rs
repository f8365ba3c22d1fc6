//! Usuarios (brigade members) service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::usuario::{CreateUsuario, UpdateUsuario, Usuario},
    repository::Repository,
    services::{auth, deletion::DeletionGate},
};

#[derive(Clone)]
pub struct UsuariosService {
    repository: Repository,
    gate: DeletionGate,
}

impl UsuariosService {
    pub fn new(repository: Repository, gate: DeletionGate) -> Self {
        Self { repository, gate }
    }

    pub async fn list(&self) -> AppResult<Vec<Usuario>> {
        self.repository.usuarios.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Usuario> {
        self.repository.usuarios.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateUsuario) -> AppResult<Usuario> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let password = match &data.password {
            Some(p) => Some(auth::hash_password(p)?),
            None => None,
        };
        self.repository.usuarios.create(data, password).await
    }

    pub async fn update(&self, id: i32, data: &UpdateUsuario) -> AppResult<Usuario> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let password = match &data.password {
            Some(p) => Some(auth::hash_password(p)?),
            None => None,
        };
        self.repository.usuarios.update(id, data, password).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let _ticket = self.gate.begin("usuario", id)?;
        self.repository.usuarios.delete(id).await
    }
}
