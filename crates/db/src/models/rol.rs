use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::{require_positive, require_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A live row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rol {
    pub id: DbId,
    pub nombre_rol: String,
    pub descripcion_rol: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A live row from the `roles_usuarios` join table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RolUsuario {
    pub id: DbId,
    pub usuario_id: DbId,
    pub rol_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateRol {
    pub nombre_rol: String,
    pub descripcion_rol: String,
}

pub type UpdateRol = CreateRol;

impl CreateRol {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.nombre_rol, "nombre_rol")
    }
}

/// Assign the path's rol to `usuario_id`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct CreateRolUsuario {
    pub usuario_id: DbId,
}

pub type UpdateRolUsuario = CreateRolUsuario;

impl CreateRolUsuario {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_positive(self.usuario_id, "usuario_id")
    }
}
