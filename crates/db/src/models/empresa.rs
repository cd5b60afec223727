//! Empresa (tenant root) model and DTOs.

use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::{require_email, require_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::red::Red;
use super::servicio::Servicio;

/// A live row from the `empresas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Empresa {
    pub id: DbId,
    pub nombre_empresa: String,
    pub descripcion_empresa: String,
    pub historia_empresa: String,
    pub mision_empresa: String,
    pub vision_empresa: String,
    pub ubicacion_empresa: String,
    pub celular_empresa: String,
    pub email_empresa: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Empresa with its live services and social links.
#[derive(Debug, Clone, Serialize)]
pub struct EmpresaDetail {
    #[serde(flatten)]
    pub empresa: Empresa,
    pub servicios: Vec<Servicio>,
    pub redes: Vec<Red>,
}

/// Create and full-replace update payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEmpresa {
    pub nombre_empresa: String,
    pub descripcion_empresa: String,
    pub historia_empresa: String,
    pub mision_empresa: String,
    pub vision_empresa: String,
    pub ubicacion_empresa: String,
    pub celular_empresa: String,
    pub email_empresa: String,
}

pub type UpdateEmpresa = CreateEmpresa;

impl CreateEmpresa {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.nombre_empresa, "nombre_empresa")?;
        require_text(&self.celular_empresa, "celular_empresa")?;
        require_email(&self.email_empresa, "email_empresa")
    }
}
