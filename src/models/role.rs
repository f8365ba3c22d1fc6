//! Role model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::usuario::{Rights, RoleRights};

/// Role with per-domain rights columns holding "r", "w" or NULL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Role {
    pub id: i32,
    pub nombre: String,
    pub vehicles_rights: Option<String>,
    pub inventory_rights: Option<String>,
    pub maintenance_rights: Option<String>,
    pub tareas_rights: Option<String>,
    pub usuarios_rights: Option<String>,
    pub settings_rights: Option<String>,
}

impl Role {
    /// Decode the rights columns into the typed permission set
    pub fn rights(&self) -> RoleRights {
        RoleRights {
            vehicles_rights: Rights::from(self.vehicles_rights.clone()),
            inventory_rights: Rights::from(self.inventory_rights.clone()),
            maintenance_rights: Rights::from(self.maintenance_rights.clone()),
            tareas_rights: Rights::from(self.tareas_rights.clone()),
            usuarios_rights: Rights::from(self.usuarios_rights.clone()),
            settings_rights: Rights::from(self.settings_rights.clone()),
        }
    }
}

/// Create role request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRole {
    #[validate(length(min = 1, message = "Name is required"))]
    pub nombre: String,
    pub vehicles_rights: Option<String>,
    pub inventory_rights: Option<String>,
    pub maintenance_rights: Option<String>,
    pub tareas_rights: Option<String>,
    pub usuarios_rights: Option<String>,
    pub settings_rights: Option<String>,
}

/// Update role request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRole {
    pub nombre: Option<String>,
    pub vehicles_rights: Option<String>,
    pub inventory_rights: Option<String>,
    pub maintenance_rights: Option<String>,
    pub tareas_rights: Option<String>,
    pub usuarios_rights: Option<String>,
    pub settings_rights: Option<String>,
}
