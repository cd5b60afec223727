//! Repository for the `tipos_categorias` association table.

use prefab_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::catalogo::TipoCategoria;
use crate::scope::{Scope, SoftDelete};

/// Columns of the association joined with its tipo (`tc` and `tp`).
const JOINED_COLUMNS: &str = "tc.id, tc.categoria_id, tc.tipo_id, tp.material_estructura, \
    tc.created_at, tc.updated_at";

const JOINED_FROM: &str = "tipos_categorias tc \
    JOIN tipos tp ON tp.id = tc.tipo_id AND tp.deleted_at IS NULL";

pub struct TipoCategoriaRepo;

impl TipoCategoriaRepo {
    pub fn scope(categoria_id: DbId) -> Scope {
        Scope::of("tipos_categorias").within("categoria_id", "categorias", categoria_id)
    }

    /// Link a tipo to a categoria. Liveness of both sides is the caller's
    /// check; a duplicate live pair violates `uq_tipos_categorias_pair`.
    pub async fn insert<'c>(
        executor: impl PgExecutor<'c>,
        categoria_id: DbId,
        tipo_id: DbId,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO tipos_categorias (categoria_id, tipo_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(categoria_id)
        .bind(tipo_id)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }

    /// Live associations of one categoria whose tipo is also live.
    pub async fn list<'c>(
        executor: impl PgExecutor<'c>,
        categoria_id: DbId,
    ) -> Result<Vec<TipoCategoria>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM {JOINED_FROM} \
             WHERE tc.categoria_id = $1 AND tc.deleted_at IS NULL ORDER BY tc.id"
        );
        sqlx::query_as::<_, TipoCategoria>(&query)
            .bind(categoria_id)
            .fetch_all(executor)
            .await
    }

    pub async fn list_for_categorias(
        pool: &PgPool,
        categoria_ids: &[DbId],
    ) -> Result<Vec<TipoCategoria>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM {JOINED_FROM} \
             WHERE tc.categoria_id = ANY($1) AND tc.deleted_at IS NULL ORDER BY tc.id"
        );
        sqlx::query_as::<_, TipoCategoria>(&query)
            .bind(categoria_ids)
            .fetch_all(pool)
            .await
    }

    /// Link and return the joined view. Both sides must already be known
    /// live.
    pub async fn create(
        pool: &PgPool,
        categoria_id: DbId,
        tipo_id: DbId,
    ) -> Result<Option<TipoCategoria>, sqlx::Error> {
        let id = Self::insert(pool, categoria_id, tipo_id).await?;
        Self::find(pool, categoria_id, id).await
    }

    pub async fn find(
        pool: &PgPool,
        categoria_id: DbId,
        id: DbId,
    ) -> Result<Option<TipoCategoria>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM {JOINED_FROM} \
             JOIN categorias c ON c.id = tc.categoria_id AND c.deleted_at IS NULL \
             WHERE tc.categoria_id = $1 AND tc.id = $2 AND tc.deleted_at IS NULL"
        );
        sqlx::query_as::<_, TipoCategoria>(&query)
            .bind(categoria_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn soft_delete(
        pool: &PgPool,
        categoria_id: DbId,
        id: DbId,
    ) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(categoria_id).soft_delete(pool, id).await
    }
}
