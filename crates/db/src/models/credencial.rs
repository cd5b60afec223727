//! Login credentials. The password hash is loaded only on the login and
//! recovery paths and is never serialized.

use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::{require_email, require_min_chars};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Minimum password length accepted when setting credentials.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// A live row from the `credenciales` table, without the hash.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Credencial {
    pub id: DbId,
    pub email: String,
    pub usuario_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The subset needed to verify a login.
#[derive(Debug, Clone, FromRow)]
pub struct CredencialLogin {
    pub usuario_id: DbId,
    pub password_hash: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCredencial {
    pub email: String,
    pub password: String,
}

impl CreateCredencial {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_email(&self.email, "email")?;
        require_min_chars(&self.password, MIN_PASSWORD_CHARS, "password")
    }
}

/// The password is re-hashed only when present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCredencial {
    pub email: String,
    pub password: Option<String>,
}

impl UpdateCredencial {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_email(&self.email, "email")?;
        if let Some(password) = &self.password {
            require_min_chars(password, MIN_PASSWORD_CHARS, "password")?;
        }
        Ok(())
    }
}

/// `POST /login` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
