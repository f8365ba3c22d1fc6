//! Tarea (task) model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::enums::TareaStatus;

/// Internal row structure for database queries (status as raw i16)
#[derive(Debug, Clone, FromRow)]
pub struct TareaRow {
    id: i32,
    descripcion: String,
    assigned_to: i32,
    assigned_nombre: Option<String>,
    due_date: NaiveDate,
    status: i16,
    created_by: Option<i32>,
    creator_nombre: Option<String>,
    crea_date: Option<DateTime<Utc>>,
    modif_date: Option<DateTime<Utc>>,
}

impl From<TareaRow> for Tarea {
    fn from(row: TareaRow) -> Self {
        Tarea {
            id: row.id,
            descripcion: row.descripcion,
            assigned_to: row.assigned_to,
            assigned_nombre: row.assigned_nombre,
            due_date: row.due_date,
            status: TareaStatus::from(row.status),
            created_by: row.created_by,
            creator_nombre: row.creator_nombre,
            crea_date: row.crea_date,
            modif_date: row.modif_date,
        }
    }
}

/// Task assigned to a brigade member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Tarea {
    pub id: i32,
    pub descripcion: String,
    pub assigned_to: i32,
    /// Assignee display name, joined from usuarios
    pub assigned_nombre: Option<String>,
    pub due_date: NaiveDate,
    pub status: TareaStatus,
    pub created_by: Option<i32>,
    pub creator_nombre: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create tarea request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTarea {
    #[validate(length(min = 1, message = "Description is required"))]
    pub descripcion: String,
    pub assigned_to: i32,
    pub due_date: NaiveDate,
    /// Defaults to Pendiente
    pub status: Option<i16>,
}

/// Update tarea request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTarea {
    pub descripcion: Option<String>,
    pub assigned_to: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<i16>,
}
