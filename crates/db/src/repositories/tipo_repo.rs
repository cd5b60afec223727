//! Repository for the `tipos` table.

use prefab_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::catalogo::{CreateTipo, Tipo, UpdateTipo};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, material_estructura, descripcion_material, created_at, updated_at";

impl ScopedEntity for Tipo {
    const TABLE: &'static str = "tipos";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct TipoRepo;

impl TipoRepo {
    pub fn scope() -> Scope {
        Scope::for_entity::<Tipo>()
    }

    pub async fn create(pool: &PgPool, input: &CreateTipo) -> Result<Tipo, sqlx::Error> {
        let scope = Self::scope();
        let mut qb = scope.insert_into("material_estructura, descripcion_material");
        qb.separated(", ")
            .push_bind(&input.material_estructura)
            .push_bind(&input.descripcion_material);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Tipo>().fetch_one(pool).await
    }

    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<Tipo>, sqlx::Error> {
        Self::scope().fetch_one(pool, id).await
    }

    pub async fn exists<'c>(executor: impl PgExecutor<'c>, id: DbId) -> Result<bool, sqlx::Error> {
        Self::scope().exists(executor, id).await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Tipo>, sqlx::Error> {
        Self::scope().fetch_all(pool, "t.id").await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateTipo) -> Result<Option<Tipo>, sqlx::Error> {
        let scope = Self::scope();
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("material_estructura = ")
            .push_bind_unseparated(&input.material_estructura)
            .push("descripcion_material = ")
            .push_bind_unseparated(&input.descripcion_material);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Tipo>().fetch_optional(pool).await
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<SoftDelete, sqlx::Error> {
        Self::scope().soft_delete(pool, id).await
    }
}
