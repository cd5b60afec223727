//! Usuario (staff member) and Contacto models.

use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::{require_email, require_min_chars, require_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A live row from the `usuarios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Usuario {
    pub id: DbId,
    pub primer_nombre: String,
    pub segundo_nombre: String,
    pub primer_apellido: String,
    pub segundo_apellido: String,
    pub image: String,
    pub empresa_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Usuario text fields, collected from a multipart form.
#[derive(Debug, Clone, Default)]
pub struct UsuarioFields {
    pub primer_nombre: String,
    pub segundo_nombre: String,
    pub primer_apellido: String,
    pub segundo_apellido: String,
}

impl UsuarioFields {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.primer_nombre, "primer_nombre")?;
        require_text(&self.primer_apellido, "primer_apellido")
    }
}

#[derive(Debug, Clone)]
pub struct CreateUsuario {
    pub fields: UsuarioFields,
    pub image: String,
}

/// `image` is replaced only when a new upload was supplied.
#[derive(Debug, Clone)]
pub struct UpdateUsuario {
    pub fields: UsuarioFields,
    pub image: Option<String>,
}

/// A live row from the `contactos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contacto {
    pub id: DbId,
    pub email_laboral: String,
    pub celular_laboral: String,
    pub direccion_laboral: String,
    pub usuario_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateContacto {
    pub email_laboral: String,
    pub celular_laboral: String,
    pub direccion_laboral: String,
}

pub type UpdateContacto = CreateContacto;

impl CreateContacto {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_email(&self.email_laboral, "email_laboral")?;
        if !self.celular_laboral.is_empty() {
            require_min_chars(&self.celular_laboral, 6, "celular_laboral")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celular_is_optional_but_checked_when_present() {
        let mut input = CreateContacto {
            email_laboral: "ana@casas.example".into(),
            ..Default::default()
        };
        assert!(input.validate().is_ok());

        input.celular_laboral = "123".into();
        assert!(input.validate().is_err());

        input.celular_laboral = "+56 9 1234 5678".into();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn usuario_requires_first_name_and_surname() {
        let fields = UsuarioFields {
            primer_nombre: "Ana".into(),
            ..Default::default()
        };
        let err = fields.validate().unwrap_err();
        assert_eq!(err.message(), "El campo primer_apellido es obligatorio");
    }
}
