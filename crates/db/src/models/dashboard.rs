//! Admin dashboard summary.

use serde::Serialize;
use sqlx::FromRow;

/// Live row counts shown on the administration landing page.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct DashboardCounts {
    pub empresas: i64,
    pub usuarios: i64,
    pub prefabricadas: i64,
    pub noticias: i64,
}
