//! Repository for the `precios` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::precio::{CreatePrecio, Precio, UpdatePrecio};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, nombre_precio, descripcion_precio, valor_prefabricada, \
    prefabricada_id, created_at, updated_at";

impl ScopedEntity for Precio {
    const TABLE: &'static str = "precios";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct PrecioRepo;

impl PrecioRepo {
    pub fn scope(empresa_id: DbId, prefabricada_id: DbId) -> Scope {
        Scope::for_entity::<Precio>()
            .within("prefabricada_id", "prefabricadas", prefabricada_id)
            .within("empresa_id", "empresas", empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
        input: &CreatePrecio,
    ) -> Result<Option<Precio>, sqlx::Error> {
        let scope = Self::scope(empresa_id, prefabricada_id);
        let mut qb =
            scope.insert_into("nombre_precio, descripcion_precio, valor_prefabricada, prefabricada_id");
        qb.separated(", ")
            .push_bind(&input.nombre_precio)
            .push_bind(&input.descripcion_precio)
            .push_bind(input.valor_prefabricada)
            .push_bind(prefabricada_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Precio>().fetch_optional(pool).await
    }

    pub async fn find(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
        id: DbId,
    ) -> Result<Option<Precio>, sqlx::Error> {
        Self::scope(empresa_id, prefabricada_id).fetch_one(pool, id).await
    }

    pub async fn list(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
    ) -> Result<Vec<Precio>, sqlx::Error> {
        Self::scope(empresa_id, prefabricada_id).fetch_all(pool, "t.id").await
    }

    pub async fn list_for_prefabricadas(
        pool: &PgPool,
        prefabricada_ids: &[DbId],
    ) -> Result<Vec<Precio>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM precios \
             WHERE prefabricada_id = ANY($1) AND deleted_at IS NULL ORDER BY id"
        );
        sqlx::query_as::<_, Precio>(&query)
            .bind(prefabricada_ids)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
        id: DbId,
        input: &UpdatePrecio,
    ) -> Result<Option<Precio>, sqlx::Error> {
        let scope = Self::scope(empresa_id, prefabricada_id);
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("nombre_precio = ")
            .push_bind_unseparated(&input.nombre_precio)
            .push("descripcion_precio = ")
            .push_bind_unseparated(&input.descripcion_precio)
            .push("valor_prefabricada = ")
            .push_bind_unseparated(input.valor_prefabricada);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Precio>().fetch_optional(pool).await
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
