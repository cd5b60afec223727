//! Repository for the `incluyes` table, the deepest level of the
//! empresa → prefabricada → precio → incluye chain.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::precio::{CreateIncluye, Incluye, UpdateIncluye};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, nombre_incluye, precio_id, created_at, updated_at";

impl ScopedEntity for Incluye {
    const TABLE: &'static str = "incluyes";
    const COLUMNS: &'static str = COLUMNS;
}

/// Path ids addressing one precio.
#[derive(Debug, Clone, Copy)]
pub struct PrecioPath {
    pub empresa_id: DbId,
    pub prefabricada_id: DbId,
    pub precio_id: DbId,
}

pub struct IncluyeRepo;

impl IncluyeRepo {
    pub fn scope(path: PrecioPath) -> Scope {
        Scope::for_entity::<Incluye>()
            .within("precio_id", "precios", path.precio_id)
            .within("prefabricada_id", "prefabricadas", path.prefabricada_id)
            .within("empresa_id", "empresas", path.empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        path: PrecioPath,
        input: &CreateIncluye,
    ) -> Result<Option<Incluye>, sqlx::Error> {
        let scope = Self::scope(path);
        let mut qb = scope.insert_into("nombre_incluye, precio_id");
        qb.separated(", ")
            .push_bind(&input.nombre_incluye)
            .push_bind(path.precio_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Incluye>().fetch_optional(pool).await
    }

    pub async fn find(pool: &PgPool, path: PrecioPath, id: DbId) -> Result<Option<Incluye>, sqlx::Error> {
        Self::scope(path).fetch_one(pool, id).await
    }

    pub async fn list(pool: &PgPool, path: PrecioPath) -> Result<Vec<Incluye>, sqlx::Error> {
        Self::scope(path).fetch_all(pool, "t.id").await
    }

    pub async fn list_for_precios(
        pool: &PgPool,
        precio_ids: &[DbId],
    ) -> Result<Vec<Incluye>, sqlx::Error> {
        if precio_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM incluyes \
             WHERE precio_id = ANY($1) AND deleted_at IS NULL ORDER BY id"
        );
        sqlx::query_as::<_, Incluye>(&query)
            .bind(precio_ids)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        path: PrecioPath,
        id: DbId,
        input: &UpdateIncluye,
    ) -> Result<Option<Incluye>, sqlx::Error> {
        let scope = Self::scope(path);
        let mut qb = scope.update_set();
        qb.push("nombre_incluye = ");
        qb.push_bind(&input.nombre_incluye);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Incluye>().fetch_optional(pool).await
    }

    pub async fn soft_delete(pool: &PgPool, path: PrecioPath, id: DbId) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(path).soft_delete(pool, id).await
    }
}
