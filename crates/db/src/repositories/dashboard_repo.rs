//! Live counts for the administration landing page.

use sqlx::PgPool;

use crate::models::dashboard::DashboardCounts;

pub struct DashboardRepo;

impl DashboardRepo {
    pub async fn counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        sqlx::query_as::<_, DashboardCounts>(
            "SELECT \
               (SELECT COUNT(*) FROM empresas WHERE deleted_at IS NULL) AS empresas, \
               (SELECT COUNT(*) FROM usuarios WHERE deleted_at IS NULL) AS usuarios, \
               (SELECT COUNT(*) FROM prefabricadas WHERE deleted_at IS NULL) AS prefabricadas, \
               (SELECT COUNT(*) FROM noticias WHERE deleted_at IS NULL) AS noticias",
        )
        .fetch_one(pool)
        .await
    }
}
