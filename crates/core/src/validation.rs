//! Field-presence and shape checks for request payloads.
//!
//! Validation is deliberately shallow: required strings must be non-blank,
//! numeric references must be positive, emails must parse. Anything deeper
//! (does the referenced row exist?) is the datastore's job.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Require a non-blank string field.
pub fn require_text(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "El campo {field} es obligatorio"
        )));
    }
    Ok(())
}

/// Require a syntactically valid email address.
pub fn require_email(value: &str, field: &str) -> Result<(), CoreError> {
    require_text(value, field)?;
    if !value.validate_email() {
        return Err(CoreError::Validation(format!(
            "El campo {field} debe ser un email válido"
        )));
    }
    Ok(())
}

/// Require at least `min` characters.
pub fn require_min_chars(value: &str, min: usize, field: &str) -> Result<(), CoreError> {
    if value.chars().count() < min {
        return Err(CoreError::Validation(format!(
            "El campo {field} debe tener al menos {min} caracteres"
        )));
    }
    Ok(())
}

/// Require a strictly positive integer (ids, square meters).
pub fn require_positive(value: i64, field: &str) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "El campo {field} debe ser mayor que cero"
        )));
    }
    Ok(())
}

/// Require a finite, strictly positive amount.
pub fn require_positive_amount(value: f64, field: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "El campo {field} debe ser mayor que cero"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        let err = require_text("   ", "nombre_empresa").unwrap_err();
        assert_eq!(err.message(), "El campo nombre_empresa es obligatorio");
        assert!(require_text("Casas Emilia", "nombre_empresa").is_ok());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(require_email("ventas@example.com", "email").is_ok());
        assert!(require_email("ventas.example.com", "email").is_err());
        assert!(require_email("", "email").is_err());
    }

    #[test]
    fn min_chars_counts_characters_not_bytes() {
        assert!(require_min_chars("ñandú1", 6, "password").is_ok());
        assert!(require_min_chars("abc", 6, "password").is_err());
    }

    #[test]
    fn positive_checks() {
        assert!(require_positive(0, "m2").is_err());
        assert!(require_positive(45, "m2").is_ok());
        assert!(require_positive_amount(f64::NAN, "valor_prefabricada").is_err());
        assert!(require_positive_amount(1_990_000.0, "valor_prefabricada").is_ok());
    }
}
