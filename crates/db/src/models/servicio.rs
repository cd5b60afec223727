use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A live row from the `servicios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Servicio {
    pub id: DbId,
    pub nombre_servicio: String,
    pub descripcion_servicio: String,
    pub empresa_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateServicio {
    pub nombre_servicio: String,
    pub descripcion_servicio: String,
}

pub type UpdateServicio = CreateServicio;

impl CreateServicio {
    /// Both fields are optional free text.
    pub fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
