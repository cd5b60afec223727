use prefab_core::error::CoreError;
use prefab_core::types::{DbId, Timestamp};
use prefab_core::validation::require_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A live row from the `redes` table (an empresa's social-network link).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Red {
    pub id: DbId,
    pub red_social: String,
    pub link: String,
    pub empresa_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateRed {
    pub red_social: String,
    pub link: String,
}

pub type UpdateRed = CreateRed;

impl CreateRed {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.red_social, "red_social")
    }
}
