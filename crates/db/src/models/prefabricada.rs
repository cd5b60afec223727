//! Prefabricada (catalog listing) models, its owned images and
//! characteristics, and the listing filter.

use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::{require_positive, require_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::precio::PrecioDetail;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A live row from the `prefabricadas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prefabricada {
    pub id: DbId,
    pub nombre_prefabricada: String,
    pub m2: i32,
    pub garantia: String,
    pub eslogan: String,
    pub descripcion: String,
    pub destacada: bool,
    pub oferta: bool,
    pub categoria_id: DbId,
    pub estilo_id: DbId,
    pub tipo_id: DbId,
    pub empresa_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A live row from the `imagenes_prefabricadas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImagenPrefabricada {
    pub id: DbId,
    pub image: String,
    pub prefabricada_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A live row from the `caracteristicas` table (free-form key/value pair).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Caracteristica {
    pub id: DbId,
    pub clave: String,
    pub valor: String,
    pub prefabricada_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Prefabricada with every live owned collection embedded.
#[derive(Debug, Clone, Serialize)]
pub struct PrefabricadaDetail {
    #[serde(flatten)]
    pub prefabricada: Prefabricada,
    pub imagenes_prefabricadas: Vec<ImagenPrefabricada>,
    pub caracteristicas: Vec<Caracteristica>,
    pub precios: Vec<PrecioDetail>,
}

/// Listing response: `{prefabricadas, page, limit}`.
#[derive(Debug, Clone, Serialize)]
pub struct PrefabricadaPage {
    pub prefabricadas: Vec<PrefabricadaDetail>,
    pub page: i64,
    pub limit: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePrefabricada {
    pub nombre_prefabricada: String,
    pub m2: i32,
    pub garantia: String,
    pub eslogan: String,
    pub descripcion: String,
    pub destacada: bool,
    pub oferta: bool,
    pub categoria_id: DbId,
    pub estilo_id: DbId,
    pub tipo_id: DbId,
}

pub type UpdatePrefabricada = CreatePrefabricada;

impl CreatePrefabricada {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.nombre_prefabricada, "nombre_prefabricada")?;
        require_positive(i64::from(self.m2), "m2")?;
        require_text(&self.garantia, "garantia")?;
        require_positive(self.categoria_id, "categoria_id")?;
        require_positive(self.estilo_id, "estilo_id")?;
        require_positive(self.tipo_id, "tipo_id")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCaracteristica {
    pub clave: String,
    pub valor: String,
}

pub type UpdateCaracteristica = CreateCaracteristica;

impl CreateCaracteristica {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.clave, "clave")?;
        require_text(&self.valor, "valor")
    }
}

/// Optional filters for the prefabricada listing. Absent fields do not
/// constrain the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefabricadaFilter {
    pub categoria_id: Option<DbId>,
    pub tipo_id: Option<DbId>,
    pub destacada: Option<bool>,
    pub oferta: Option<bool>,
}
