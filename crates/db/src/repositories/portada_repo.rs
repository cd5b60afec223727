//! Repository for the `portadas` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::portada::{CreatePortada, Portada, UpdatePortada};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, nombre_portada, image, empresa_id, created_at, updated_at";

impl ScopedEntity for Portada {
    const TABLE: &'static str = "portadas";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct PortadaRepo;

impl PortadaRepo {
    pub fn scope(empresa_id: DbId) -> Scope {
        Scope::for_entity::<Portada>().within("empresa_id", "empresas", empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        input: &CreatePortada,
    ) -> Result<Option<Portada>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.insert_into("nombre_portada, image, empresa_id");
        qb.separated(", ")
            .push_bind(&input.nombre_portada)
            .push_bind(&input.image)
            .push_bind(empresa_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Portada>().fetch_optional(pool).await
    }

    pub async fn find(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<Option<Portada>, sqlx::Error> {
        Self::scope(empresa_id).fetch_one(pool, id).await
    }

    pub async fn list(pool: &PgPool, empresa_id: DbId) -> Result<Vec<Portada>, sqlx::Error> {
        Self::scope(empresa_id).fetch_all(pool, "t.id").await
    }

    /// Keeps the stored image when `input.image` is `None`.
    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
        input: &UpdatePortada,
    ) -> Result<Option<Portada>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("nombre_portada = ")
            .push_bind_unseparated(&input.nombre_portada)
            .push("image = COALESCE(")
            .push_bind_unseparated(&input.image)
            .push_unseparated(", image)");
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Portada>().fetch_optional(pool).await
    }

    pub async fn soft_delete(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(empresa_id).soft_delete(pool, id).await
    }
}
