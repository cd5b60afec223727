//! Repository for the `redes` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::red::{CreateRed, Red, UpdateRed};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, red_social, link, empresa_id, created_at, updated_at";

impl ScopedEntity for Red {
    const TABLE: &'static str = "redes";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct RedRepo;

impl RedRepo {
    pub fn scope(empresa_id: DbId) -> Scope {
        Scope::for_entity::<Red>().within("empresa_id", "empresas", empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        input: &CreateRed,
    ) -> Result<Option<Red>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.insert_into("red_social, link, empresa_id");
        qb.separated(", ")
            .push_bind(&input.red_social)
            .push_bind(&input.link)
            .push_bind(empresa_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Red>().fetch_optional(pool).await
    }

    pub async fn find(pool: &PgPool, empresa_id: DbId, id: DbId) -> Result<Option<Red>, sqlx::Error> {
        Self::scope(empresa_id).fetch_one(pool, id).await
    }

    pub async fn list(pool: &PgPool, empresa_id: DbId) -> Result<Vec<Red>, sqlx::Error> {
        Self::scope(empresa_id).fetch_all(pool, "t.id").await
    }

    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
        input: &UpdateRed,
    ) -> Result<Option<Red>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("red_social = ")
            .push_bind_unseparated(&input.red_social)
            .push("link = ")
            .push_bind_unseparated(&input.link);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Red>().fetch_optional(pool).await
    }

    pub async fn soft_delete(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(empresa_id).soft_delete(pool, id).await
    }
}
