//! Checklists service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::checklist::{
        derive_status, ChecklistCompletion, ChecklistTemplate, CreateChecklistCompletion,
        CreateChecklistTemplate,
    },
    repository::Repository,
    services::deletion::DeletionGate,
};

#[derive(Clone)]
pub struct ChecklistsService {
    repository: Repository,
    gate: DeletionGate,
}

impl ChecklistsService {
    pub fn new(repository: Repository, gate: DeletionGate) -> Self {
        Self { repository, gate }
    }

    pub async fn list_templates(&self) -> AppResult<Vec<ChecklistTemplate>> {
        self.repository.checklists.list_templates().await
    }

    pub async fn get_template(&self, id: i32) -> AppResult<ChecklistTemplate> {
        self.repository.checklists.get_template_by_id(id).await
    }

    pub async fn create_template(
        &self,
        data: &CreateChecklistTemplate,
    ) -> AppResult<ChecklistTemplate> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.checklists.create_template(data).await
    }

    pub async fn delete_template(&self, id: i32) -> AppResult<()> {
        let _ticket = self.gate.begin("checklist_template", id)?;
        self.repository.checklists.delete_template(id).await
    }

    pub async fn list_completions(&self) -> AppResult<Vec<ChecklistCompletion>> {
        self.repository.checklists.list_completions().await
    }

    pub async fn get_completion(&self, id: i32) -> AppResult<ChecklistCompletion> {
        self.repository.checklists.get_completion_by_id(id).await
    }

    /// Record a filled-in checklist. The status is derived from the item
    /// states, never taken from the caller.
    pub async fn record_completion(
        &self,
        data: &CreateChecklistCompletion,
        completed_by: i32,
    ) -> AppResult<ChecklistCompletion> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // the template must exist before anything is written
        self.repository
            .checklists
            .get_template_by_id(data.template_id)
            .await?;

        let completion_date = data
            .completion_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive());
        let status = derive_status(&data.items);

        self.repository
            .checklists
            .create_completion(
                data.template_id,
                data.vehicle_id,
                completed_by,
                completion_date,
                &data.items,
                status.into(),
            )
            .await
    }
}
