//! Repository for the `estilos` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::catalogo::{CreateEstilo, Estilo, UpdateEstilo};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, nombre_estilo, descripcion_estilo, created_at, updated_at";

impl ScopedEntity for Estilo {
    const TABLE: &'static str = "estilos";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct EstiloRepo;

impl EstiloRepo {
    pub fn scope() -> Scope {
        Scope::for_entity::<Estilo>()
    }

    pub async fn create(pool: &PgPool, input: &CreateEstilo) -> Result<Estilo, sqlx::Error> {
        let scope = Self::scope();
        let mut qb = scope.insert_into("nombre_estilo, descripcion_estilo");
        qb.separated(", ")
            .push_bind(&input.nombre_estilo)
            .push_bind(&input.descripcion_estilo);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Estilo>().fetch_one(pool).await
    }

    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<Estilo>, sqlx::Error> {
        Self::scope().fetch_one(pool, id).await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Estilo>, sqlx::Error> {
        Self::scope().fetch_all(pool, "t.id").await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEstilo,
    ) -> Result<Option<Estilo>, sqlx::Error> {
        let scope = Self::scope();
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("nombre_estilo = ")
            .push_bind_unseparated(&input.nombre_estilo)
            .push("descripcion_estilo = ")
            .push_bind_unseparated(&input.descripcion_estilo);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Estilo>().fetch_optional(pool).await
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<SoftDelete, sqlx::Error> {
        Self::scope().soft_delete(pool, id).await
    }
}
