use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::{require_positive_amount, require_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A live row from the `precios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Precio {
    pub id: DbId,
    pub nombre_precio: String,
    pub descripcion_precio: String,
    pub valor_prefabricada: f64,
    pub prefabricada_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A live row from the `incluyes` table: an item included at a price point.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incluye {
    pub id: DbId,
    pub nombre_incluye: String,
    pub precio_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Precio with its live incluyes.
#[derive(Debug, Clone, Serialize)]
pub struct PrecioDetail {
    #[serde(flatten)]
    pub precio: Precio,
    pub incluyes: Vec<Incluye>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePrecio {
    pub nombre_precio: String,
    pub descripcion_precio: String,
    pub valor_prefabricada: f64,
}

pub type UpdatePrecio = CreatePrecio;

impl CreatePrecio {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.nombre_precio, "nombre_precio")?;
        require_text(&self.descripcion_precio, "descripcion_precio")?;
        require_positive_amount(self.valor_prefabricada, "valor_prefabricada")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateIncluye {
    pub nombre_incluye: String,
}

pub type UpdateIncluye = CreateIncluye;

impl CreateIncluye {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.nombre_incluye, "nombre_incluye")
    }
}
