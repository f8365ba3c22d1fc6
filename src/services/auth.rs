//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::usuario::{RoleRights, UserClaims, Usuario},
    repository::Repository,
};

/// Hash a password with argon2 and a fresh salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate a member by login and return a JWT token
    pub async fn authenticate(&self, login: &str, password: &str) -> AppResult<(String, Usuario)> {
        let usuario = self
            .repository
            .usuarios
            .get_by_login(login)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid login or password".to_string()))?;

        if !self.verify_password(&usuario, password)? {
            return Err(AppError::Authentication("Invalid login or password".to_string()));
        }

        let token = self.create_token_for_user(&usuario).await?;
        Ok((token, usuario))
    }

    /// Build and sign claims for a member, resolving role rights
    pub async fn create_token_for_user(&self, usuario: &Usuario) -> AppResult<String> {
        let rights = match usuario.rol_id {
            Some(rol_id) => self.repository.roles.get_by_id(rol_id).await?.rights(),
            None => RoleRights::default(),
        };

        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: usuario.login.clone(),
            user_id: usuario.id,
            rol: usuario.rol_nombre.clone(),
            rights,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    fn verify_password(&self, usuario: &Usuario, password: &str) -> AppResult<bool> {
        let Some(ref stored) = usuario.password else {
            return Ok(false);
        };
        let parsed_hash = PasswordHash::new(stored)
            .map_err(|e| AppError::Internal(format!("Stored hash is invalid: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("bomberos2024").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"bomberos2024", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"otra-clave", &parsed)
            .is_err());
    }
}
