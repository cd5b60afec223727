//! Repository for the `imagenes_prefabricadas` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::prefabricada::ImagenPrefabricada;
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, image, prefabricada_id, created_at, updated_at";

impl ScopedEntity for ImagenPrefabricada {
    const TABLE: &'static str = "imagenes_prefabricadas";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct ImagenPrefabricadaRepo;

impl ImagenPrefabricadaRepo {
    pub fn scope(empresa_id: DbId, prefabricada_id: DbId) -> Scope {
        Scope::for_entity::<ImagenPrefabricada>()
            .within("prefabricada_id", "prefabricadas", prefabricada_id)
            .within("empresa_id", "empresas", empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
        image: &str,
    ) -> Result<Option<ImagenPrefabricada>, sqlx::Error> {
        let scope = Self::scope(empresa_id, prefabricada_id);
        let mut qb = scope.insert_into("image, prefabricada_id");
        qb.separated(", ").push_bind(image).push_bind(prefabricada_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<ImagenPrefabricada>().fetch_optional(pool).await
    }

    pub async fn find(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
        id: DbId,
    ) -> Result<Option<ImagenPrefabricada>, sqlx::Error> {
        Self::scope(empresa_id, prefabricada_id).fetch_one(pool, id).await
    }

    pub async fn list(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
    ) -> Result<Vec<ImagenPrefabricada>, sqlx::Error> {
        Self::scope(empresa_id, prefabricada_id).fetch_all(pool, "t.id").await
    }

    /// Live images of already-resolved prefabricadas.
    pub async fn list_for_prefabricadas(
        pool: &PgPool,
        prefabricada_ids: &[DbId],
    ) -> Result<Vec<ImagenPrefabricada>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM imagenes_prefabricadas \
             WHERE prefabricada_id = ANY($1) AND deleted_at IS NULL ORDER BY id"
        );
        sqlx::query_as::<_, ImagenPrefabricada>(&query)
            .bind(prefabricada_ids)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
        id: DbId,
        image: &str,
    ) -> Result<Option<ImagenPrefabricada>, sqlx::Error> {
        let scope = Self::scope(empresa_id, prefabricada_id);
        let mut qb = scope.update_set();
        qb.push("image = ");
        qb.push_bind(image);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<ImagenPrefabricada>().fetch_optional(pool).await
    }

    pub async fn soft_delete(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
        id: DbId,
    ) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(empresa_id, prefabricada_id).soft_delete(pool, id).await
    }
}
