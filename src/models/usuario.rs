//! Usuario (brigade member) model, rights and JWT claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

/// Per-domain rights levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rights {
    None = 0,
    Read = 1,
    Write = 2,
}

impl From<char> for Rights {
    fn from(c: char) -> Self {
        match c {
            'r' | 'R' => Rights::Read,
            'w' | 'W' => Rights::Write,
            _ => Rights::None,
        }
    }
}

impl From<Option<String>> for Rights {
    fn from(s: Option<String>) -> Self {
        s.and_then(|s| s.chars().next())
            .map(Rights::from)
            .unwrap_or(Rights::None)
    }
}

/// Rights a role grants over each entity domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRights {
    pub vehicles_rights: Rights,
    pub inventory_rights: Rights,
    pub maintenance_rights: Rights,
    pub tareas_rights: Rights,
    pub usuarios_rights: Rights,
    pub settings_rights: Rights,
}

impl Default for RoleRights {
    fn default() -> Self {
        Self {
            vehicles_rights: Rights::None,
            inventory_rights: Rights::None,
            maintenance_rights: Rights::None,
            tareas_rights: Rights::None,
            usuarios_rights: Rights::None,
            settings_rights: Rights::None,
        }
    }
}

/// Brigade member record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Usuario {
    pub id: i32,
    /// Full name
    pub nombre: String,
    pub login: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub rol_id: Option<i32>,
    /// Role display name, joined from roles
    pub rol_nombre: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create usuario request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUsuario {
    #[validate(length(min = 1, message = "Name is required"))]
    pub nombre: String,
    #[validate(length(min = 3, message = "Login must be at least 3 characters"))]
    pub login: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: Option<String>,
    pub rol_id: Option<i32>,
}

/// Update usuario request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUsuario {
    pub nombre: Option<String>,
    pub login: Option<String>,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: Option<String>,
    pub rol_id: Option<i32>,
}

/// JWT claims for authenticated members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: i32,
    pub rol: Option<String>,
    pub rights: RoleRights,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    fn require(&self, have: Rights, needed: Rights, action: &str) -> Result<(), AppError> {
        if have as u8 >= needed as u8 {
            Ok(())
        } else {
            Err(AppError::Authorization(format!(
                "Insufficient rights to {}",
                action
            )))
        }
    }

    // Authorization checks
    pub fn require_read_vehicles(&self) -> Result<(), AppError> {
        self.require(self.rights.vehicles_rights, Rights::Read, "read vehicles")
    }

    pub fn require_write_vehicles(&self) -> Result<(), AppError> {
        self.require(self.rights.vehicles_rights, Rights::Write, "write vehicles")
    }

    pub fn require_read_inventory(&self) -> Result<(), AppError> {
        self.require(self.rights.inventory_rights, Rights::Read, "read inventory")
    }

    pub fn require_write_inventory(&self) -> Result<(), AppError> {
        self.require(self.rights.inventory_rights, Rights::Write, "write inventory")
    }

    pub fn require_read_maintenance(&self) -> Result<(), AppError> {
        self.require(self.rights.maintenance_rights, Rights::Read, "read maintenance")
    }

    pub fn require_write_maintenance(&self) -> Result<(), AppError> {
        self.require(self.rights.maintenance_rights, Rights::Write, "write maintenance")
    }

    pub fn require_read_tareas(&self) -> Result<(), AppError> {
        self.require(self.rights.tareas_rights, Rights::Read, "read tasks")
    }

    pub fn require_write_tareas(&self) -> Result<(), AppError> {
        self.require(self.rights.tareas_rights, Rights::Write, "write tasks")
    }

    pub fn require_read_usuarios(&self) -> Result<(), AppError> {
        self.require(self.rights.usuarios_rights, Rights::Read, "read members")
    }

    pub fn require_write_usuarios(&self) -> Result<(), AppError> {
        self.require(self.rights.usuarios_rights, Rights::Write, "write members")
    }

    pub fn require_write_settings(&self) -> Result<(), AppError> {
        self.require(self.rights.settings_rights, Rights::Write, "run admin jobs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rights_from_column_value() {
        assert_eq!(Rights::from(Some("w".to_string())), Rights::Write);
        assert_eq!(Rights::from(Some("R".to_string())), Rights::Read);
        assert_eq!(Rights::from(Some("x".to_string())), Rights::None);
        assert_eq!(Rights::from(None), Rights::None);
    }

    #[test]
    fn write_implies_read() {
        let mut rights = RoleRights::default();
        rights.tareas_rights = Rights::Write;
        let claims = UserClaims {
            sub: "capitan".to_string(),
            user_id: 1,
            rol: Some("Capitán".to_string()),
            rights,
            exp: i64::MAX,
            iat: 0,
        };
        assert!(claims.require_read_tareas().is_ok());
        assert!(claims.require_write_tareas().is_ok());
        assert!(claims.require_write_vehicles().is_err());
    }

    #[test]
    fn token_roundtrip() {
        let claims = UserClaims {
            sub: "voluntario".to_string(),
            user_id: 7,
            rol: None,
            rights: RoleRights::default(),
            exp: chrono::Utc::now().timestamp() + 3600,
            iat: chrono::Utc::now().timestamp(),
        };
        let token = claims.create_token("secret").unwrap();
        let parsed = UserClaims::from_token(&token, "secret").unwrap();
        assert_eq!(parsed.user_id, 7);
        assert_eq!(parsed.sub, "voluntario");
        assert!(UserClaims::from_token(&token, "other-secret").is_err());
    }
}
