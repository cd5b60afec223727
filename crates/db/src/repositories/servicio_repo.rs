//! Repository for the `servicios` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::servicio::{CreateServicio, Servicio, UpdateServicio};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str =
    "id, nombre_servicio, descripcion_servicio, empresa_id, created_at, updated_at";

impl ScopedEntity for Servicio {
    const TABLE: &'static str = "servicios";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct ServicioRepo;

impl ServicioRepo {
    pub fn scope(empresa_id: DbId) -> Scope {
        Scope::for_entity::<Servicio>().within("empresa_id", "empresas", empresa_id)
    }

    /// Returns `None` when the empresa is missing or deleted.
    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        input: &CreateServicio,
    ) -> Result<Option<Servicio>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.insert_into("nombre_servicio, descripcion_servicio, empresa_id");
        qb.separated(", ")
            .push_bind(&input.nombre_servicio)
            .push_bind(&input.descripcion_servicio)
            .push_bind(empresa_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Servicio>().fetch_optional(pool).await
    }

    pub async fn find(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<Option<Servicio>, sqlx::Error> {
        Self::scope(empresa_id).fetch_one(pool, id).await
    }

    pub async fn list(pool: &PgPool, empresa_id: DbId) -> Result<Vec<Servicio>, sqlx::Error> {
        Self::scope(empresa_id).fetch_all(pool, "t.id").await
    }

    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
        input: &UpdateServicio,
    ) -> Result<Option<Servicio>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("nombre_servicio = ")
            .push_bind_unseparated(&input.nombre_servicio)
            .push("descripcion_servicio = ")
            .push_bind_unseparated(&input.descripcion_servicio);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Servicio>().fetch_optional(pool).await
    }

    pub async fn soft_delete(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(empresa_id).soft_delete(pool, id).await
    }
}
