//! Noticia (news post) and its image gallery.

use prefab_core::error::CoreError;
use prefab_core::pagination::Page;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::require_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A live row from the `noticias` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Noticia {
    pub id: DbId,
    pub titulo_noticia: String,
    pub desarrollo_noticia: String,
    pub empresa_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A live row from the `imagenes_noticias` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImagenNoticia {
    pub id: DbId,
    pub image: String,
    pub noticia_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Noticia with its live images.
#[derive(Debug, Clone, Serialize)]
pub struct NoticiaDetail {
    #[serde(flatten)]
    pub noticia: Noticia,
    pub imagenes_noticia: Vec<ImagenNoticia>,
}

/// One page of noticias plus the live total.
#[derive(Debug, Clone, Serialize)]
pub struct NoticiaPage {
    pub noticias: Vec<Noticia>,
    pub pagination: PageInfo,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}

impl PageInfo {
    pub fn new(page: Page, total: i64) -> Self {
        Self {
            page: page.page,
            limit: page.limit,
            total,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateNoticia {
    pub titulo_noticia: String,
    pub desarrollo_noticia: String,
}

pub type UpdateNoticia = CreateNoticia;

impl CreateNoticia {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.titulo_noticia, "titulo_noticia")?;
        require_text(&self.desarrollo_noticia, "desarrollo_noticia")
    }
}
