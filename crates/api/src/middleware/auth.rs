//! # Authentication Module
//!
//! Guards the administrative routes with a single shared password. The server
//! only ever sees an Argon2 hash of it (`ADMIN_PASSWORD_HASH`); requests send
//! the clear password in the `x-admin-password` header.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use eyre::Result;
use slotbook_core::errors::ScheduleError;
use tracing::warn;

use crate::{middleware::error_handling::AppError, ApiState};

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Hashes a password using the Argon2 algorithm
///
/// The output is a PHC string suitable for `ADMIN_PASSWORD_HASH`.
///
/// # Example
///
/// ```
/// use slotbook_api::middleware::auth::{hash_password, verify_password};
///
/// let hashed = hash_password("hunter2").unwrap();
/// assert!(verify_password("hunter2", &hashed).unwrap());
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks `password` against a PHC hash string
///
/// Returns an error only when `hash` itself cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Extractor that only succeeds for requests carrying the admin password
///
/// Handlers take it as an argument to become admin-only.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let hash = state.admin_password_hash.as_deref().ok_or_else(|| {
            AppError(ScheduleError::Authorization(
                "Administration is not enabled on this server".to_string(),
            ))
        })?;

        let password = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError(ScheduleError::Authentication(
                    "Missing admin password".to_string(),
                ))
            })?;

        let valid = verify_password(password, hash)
            .map_err(|e| AppError(ScheduleError::Configuration(e.to_string())))?;
        if !valid {
            warn!("Rejected admin request with an invalid password");
            return Err(AppError(ScheduleError::Authentication(
                "Invalid admin password".to_string(),
            )));
        }

        Ok(AdminAccess)
    }
}
