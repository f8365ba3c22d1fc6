//! Checklist template and completion models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::enums::ChecklistStatus;

/// Reusable checklist definition (e.g. daily vehicle revision)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ChecklistTemplate {
    pub id: i32,
    pub nombre: String,
    /// Ordered item labels
    #[schema(value_type = Vec<String>)]
    pub items: Json<Vec<String>>,
}

/// Checked/notes state of one checklist item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItemState {
    pub label: String,
    pub checked: bool,
    pub notes: Option<String>,
}

/// A filled-in checklist
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ChecklistCompletion {
    pub id: i32,
    pub template_id: i32,
    pub template_nombre: Option<String>,
    /// Vehicle the revision was performed on, if any
    pub vehicle_id: Option<i32>,
    pub completed_by: Option<i32>,
    pub completed_by_nombre: Option<String>,
    pub completion_date: NaiveDate,
    #[schema(value_type = Vec<ChecklistItemState>)]
    pub items: Json<Vec<ChecklistItemState>>,
    /// Derived (0=completa, 1=incompleta)
    pub status: i16,
}

/// Create checklist template request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChecklistTemplate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "At least one item is required"))]
    pub items: Vec<String>,
}

/// Record checklist completion request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChecklistCompletion {
    pub template_id: i32,
    pub vehicle_id: Option<i32>,
    /// Defaults to today
    pub completion_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "At least one item is required"))]
    pub items: Vec<ChecklistItemState>,
}

/// Completa when every item is checked, Incompleta otherwise. Notes never
/// change the derived status.
pub fn derive_status(items: &[ChecklistItemState]) -> ChecklistStatus {
    if items.iter().all(|i| i.checked) {
        ChecklistStatus::Completa
    } else {
        ChecklistStatus::Incompleta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str, checked: bool, notes: Option<&str>) -> ChecklistItemState {
        ChecklistItemState {
            label: label.to_string(),
            checked,
            notes: notes.map(String::from),
        }
    }

    #[test]
    fn all_checked_is_completa() {
        let items = vec![item("Luces", true, None), item("Neumáticos", true, Some("desgaste leve"))];
        assert_eq!(derive_status(&items), ChecklistStatus::Completa);
    }

    #[test]
    fn any_unchecked_is_incompleta() {
        let items = vec![item("Luces", true, None), item("Sirena", false, None)];
        assert_eq!(derive_status(&items), ChecklistStatus::Incompleta);
    }
}
