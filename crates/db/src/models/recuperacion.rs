//! Password-recovery rows and request payloads.

use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::{require_email, require_min_chars, require_text};
use serde::Deserialize;
use sqlx::FromRow;

/// Minimum length of a password set through the reset flow.
pub const MIN_RESET_PASSWORD_CHARS: usize = 8;

/// A row from the `recuperaciones` table. Rows are hard-deleted on use.
#[derive(Debug, Clone, FromRow)]
pub struct Recuperacion {
    pub id: DbId,
    pub token_hash: String,
    pub usuario_id: DbId,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// `POST /password-recovery` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecoveryRequest {
    pub email: String,
}

impl RecoveryRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_email(&self.email, "email")
    }
}

/// `POST /reset-password` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub nueva_clave: String,
    pub confirm_clave: String,
}

impl ResetPasswordRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.token, "token")?;
        require_min_chars(&self.nueva_clave, MIN_RESET_PASSWORD_CHARS, "nueva_clave")?;
        if self.nueva_clave != self.confirm_clave {
            return Err(CoreError::Validation("Las contraseñas no coinciden".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_are_rejected() {
        let req = ResetPasswordRequest {
            token: "abc".into(),
            nueva_clave: "longenough".into(),
            confirm_clave: "different1".into(),
        };
        assert_eq!(req.validate().unwrap_err().message(), "Las contraseñas no coinciden");
    }

    #[test]
    fn short_password_is_rejected() {
        let req = ResetPasswordRequest {
            token: "abc".into(),
            nueva_clave: "short".into(),
            confirm_clave: "short".into(),
        };
        assert!(req.validate().is_err());
    }
}
