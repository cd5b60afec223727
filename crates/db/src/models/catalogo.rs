//! Global catalog lookups: categorias, tipos (structure materials), estilos,
//! and the categoria/tipo association.

use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::{require_positive, require_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A live row from the `categorias` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Categoria {
    pub id: DbId,
    pub nombre_categoria: String,
    pub descripcion_categoria: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A live row from the `tipos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tipo {
    pub id: DbId,
    pub material_estructura: String,
    pub descripcion_material: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A live row from the `estilos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Estilo {
    pub id: DbId,
    pub nombre_estilo: String,
    pub descripcion_estilo: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A live `tipos_categorias` association joined with its (live) tipo.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TipoCategoria {
    pub id: DbId,
    pub categoria_id: DbId,
    pub tipo_id: DbId,
    pub material_estructura: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Categoria with its associated tipos.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriaDetail {
    #[serde(flatten)]
    pub categoria: Categoria,
    pub tipos: Vec<TipoCategoria>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Reference to a tipo inside a categoria payload.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct TipoRef {
    pub tipo_id: DbId,
}

/// Categoria create/update payload. On update `tipos` replaces the whole
/// association set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCategoria {
    pub nombre_categoria: String,
    pub descripcion_categoria: String,
    pub tipos: Vec<TipoRef>,
}

pub type UpdateCategoria = CreateCategoria;

impl CreateCategoria {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.nombre_categoria, "nombre_categoria")?;
        self.tipos
            .iter()
            .try_for_each(|t| require_positive(t.tipo_id, "tipo_id"))
    }

    /// Distinct tipo ids, in first-seen order.
    pub fn tipo_ids(&self) -> Vec<DbId> {
        let mut ids: Vec<DbId> = Vec::with_capacity(self.tipos.len());
        for t in &self.tipos {
            if !ids.contains(&t.tipo_id) {
                ids.push(t.tipo_id);
            }
        }
        ids
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateTipo {
    pub material_estructura: String,
    pub descripcion_material: String,
}

pub type UpdateTipo = CreateTipo;

impl CreateTipo {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.material_estructura, "material_estructura")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEstilo {
    pub nombre_estilo: String,
    pub descripcion_estilo: String,
}

pub type UpdateEstilo = CreateEstilo;

impl CreateEstilo {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.nombre_estilo, "nombre_estilo")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipo_ids_are_deduplicated_in_order() {
        let input = CreateCategoria {
            nombre_categoria: "Cabañas".into(),
            descripcion_categoria: String::new(),
            tipos: vec![TipoRef { tipo_id: 3 }, TipoRef { tipo_id: 1 }, TipoRef { tipo_id: 3 }],
        };
        assert_eq!(input.tipo_ids(), vec![3, 1]);
    }

    #[test]
    fn non_positive_tipo_is_rejected() {
        let input = CreateCategoria {
            nombre_categoria: "Cabañas".into(),
            descripcion_categoria: String::new(),
            tipos: vec![TipoRef { tipo_id: 0 }],
        };
        assert!(input.validate().is_err());
    }
}
