//! Bodega (warehouse) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Warehouse / storage location for inventory items
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Bodega {
    pub id: i32,
    pub nombre: String,
}

/// Create bodega request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBodega {
    #[validate(length(min = 1, message = "Name is required"))]
    pub nombre: String,
}

/// Update bodega request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBodega {
    pub nombre: Option<String>,
}
