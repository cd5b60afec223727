//! Portada (cover banner) model and DTOs.
//!
//! The image arrives as a multipart upload; by the time these DTOs are built
//! the handler has already stored it and holds the public URL.

use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::require_text;
use serde::Serialize;
use sqlx::FromRow;

/// A live row from the `portadas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Portada {
    pub id: DbId,
    pub nombre_portada: String,
    pub image: String,
    pub empresa_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default)]
pub struct CreatePortada {
    pub nombre_portada: String,
    pub image: String,
}

/// `image` is replaced only when a new upload was supplied.
#[derive(Debug, Clone, Default)]
pub struct UpdatePortada {
    pub nombre_portada: String,
    pub image: Option<String>,
}

/// Text-field check run before the upload happens.
pub fn validate_portada_fields(nombre_portada: &str) -> Result<(), CoreError> {
    require_text(nombre_portada, "nombre_portada")
}
