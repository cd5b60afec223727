//! Repository for the `caracteristicas` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::prefabricada::{Caracteristica, CreateCaracteristica, UpdateCaracteristica};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, clave, valor, prefabricada_id, created_at, updated_at";

impl ScopedEntity for Caracteristica {
    const TABLE: &'static str = "caracteristicas";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct CaracteristicaRepo;

impl CaracteristicaRepo {
    pub fn scope(empresa_id: DbId, prefabricada_id: DbId) -> Scope {
        Scope::for_entity::<Caracteristica>()
            .within("prefabricada_id", "prefabricadas", prefabricada_id)
            .within("empresa_id", "empresas", empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
        input: &CreateCaracteristica,
    ) -> Result<Option<Caracteristica>, sqlx::Error> {
        let scope = Self::scope(empresa_id, prefabricada_id);
        let mut qb = scope.insert_into("clave, valor, prefabricada_id");
        qb.separated(", ")
            .push_bind(&input.clave)
            .push_bind(&input.valor)
            .push_bind(prefabricada_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Caracteristica>().fetch_optional(pool).await
    }

    pub async fn find(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
        id: DbId,
    ) -> Result<Option<Caracteristica>, sqlx::Error> {
        Self::scope(empresa_id, prefabricada_id).fetch_one(pool, id).await
    }

    pub async fn list(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
    ) -> Result<Vec<Caracteristica>, sqlx::Error> {
        Self::scope(empresa_id, prefabricada_id).fetch_all(pool, "t.id").await
    }

    pub async fn list_for_prefabricadas(
        pool: &PgPool,
        prefabricada_ids: &[DbId],
    ) -> Result<Vec<Caracteristica>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM caracteristicas \
             WHERE prefabricada_id = ANY($1) AND deleted_at IS NULL ORDER BY id"
        );
        sqlx::query_as::<_, Caracteristica>(&query)
            .bind(prefabricada_ids)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        prefabricada_id: DbId,
        id: DbId,
        input: &UpdateCaracteristica,
    ) -> Result<Option<Caracteristica>, sqlx::Error> {
        let scope = Self::scope(empresa_id, prefabricada_id);
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("clave = ")
            .push_bind_unseparated(&input.clave)
            .push("valor = ")
            .push_bind_unseparated(&input.valor);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Caracteristica>().fetch_optional(pool).await
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
