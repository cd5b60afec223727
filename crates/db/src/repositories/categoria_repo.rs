//! Repository for the `categorias` table and its `tipos_categorias`
//! association set.

use prefab_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::catalogo::{Categoria, CategoriaDetail, CreateCategoria, UpdateCategoria};
use crate::repositories::{group_by, TipoCategoriaRepo, TipoRepo};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, nombre_categoria, descripcion_categoria, created_at, updated_at";

impl ScopedEntity for Categoria {
    const TABLE: &'static str = "categorias";
    const COLUMNS: &'static str = COLUMNS;
}

/// Outcome of a categoria write that also touches its tipos.
#[derive(Debug)]
pub enum CategoriaWrite {
    Written(CategoriaDetail),
    CategoriaNotFound,
    /// A referenced tipo is missing or deleted; nothing was written.
    TipoNotFound(DbId),
}

pub struct CategoriaRepo;

impl CategoriaRepo {
    pub fn scope() -> Scope {
        Scope::for_entity::<Categoria>()
    }

    /// Insert the categoria and its tipo links in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateCategoria) -> Result<CategoriaWrite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let scope = Self::scope();
        let mut qb = scope.insert_into("nombre_categoria, descripcion_categoria");
        qb.separated(", ")
            .push_bind(&input.nombre_categoria)
            .push_bind(&input.descripcion_categoria);
        scope.finish_insert(&mut qb, COLUMNS);
        let categoria = qb.build_query_as::<Categoria>().fetch_one(&mut *tx).await?;

        if let Some(missing) = Self::link_tipos(&mut tx, categoria.id, &input.tipo_ids()).await? {
            tx.rollback().await?;
            return Ok(CategoriaWrite::TipoNotFound(missing));
        }

        let tipos = TipoCategoriaRepo::list(&mut *tx, categoria.id).await?;
        tx.commit().await?;
        Ok(CategoriaWrite::Written(CategoriaDetail { categoria, tipos }))
    }

    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<Categoria>, sqlx::Error> {
        Self::scope().fetch_one(pool, id).await
    }

    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<CategoriaDetail>, sqlx::Error> {
        let Some(categoria) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        let tipos = TipoCategoriaRepo::list(pool, id).await?;
        Ok(Some(CategoriaDetail { categoria, tipos }))
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<CategoriaDetail>, sqlx::Error> {
        let categorias: Vec<Categoria> = Self::scope().fetch_all(pool, "t.id").await?;
        let ids: Vec<DbId> = categorias.iter().map(|c| c.id).collect();
        let mut tipos = group_by(
            TipoCategoriaRepo::list_for_categorias(pool, &ids).await?,
            |t| t.categoria_id,
        );

        Ok(categorias
            .into_iter()
            .map(|categoria| CategoriaDetail {
                tipos: tipos.remove(&categoria.id).unwrap_or_default(),
                categoria,
            })
            .collect())
    }

    /// Full replace: fields and the tipo association set, in one
    /// transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategoria,
    ) -> Result<CategoriaWrite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let scope = Self::scope();
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("nombre_categoria = ")
            .push_bind_unseparated(&input.nombre_categoria)
            .push("descripcion_categoria = ")
            .push_bind_unseparated(&input.descripcion_categoria);
        scope.push_update_target(&mut qb, id, COLUMNS);
        let Some(categoria) = qb.build_query_as::<Categoria>().fetch_optional(&mut *tx).await? else {
            tx.rollback().await?;
            return Ok(CategoriaWrite::CategoriaNotFound);
        };

        sqlx::query(
            "UPDATE tipos_categorias SET deleted_at = NOW() \
             WHERE categoria_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if let Some(missing) = Self::link_tipos(&mut tx, id, &input.tipo_ids()).await? {
            tx.rollback().await?;
            return Ok(CategoriaWrite::TipoNotFound(missing));
        }

        let tipos = TipoCategoriaRepo::list(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(CategoriaWrite::Written(CategoriaDetail { categoria, tipos }))
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<SoftDelete, sqlx::Error> {
        Self::scope().soft_delete(pool, id).await
    }

    /// Link each tipo to the categoria. Returns the first tipo id that is not
    /// live, leaving the caller to roll back.
    async fn link_tipos(
        conn: &mut PgConnection,
        categoria_id: DbId,
        tipo_ids: &[DbId],
    ) -> Result<Option<DbId>, sqlx::Error> {
        for &tipo_id in tipo_ids {
            if !TipoRepo::exists(&mut *conn, tipo_id).await? {
                return Ok(Some(tipo_id));
            }
            TipoCategoriaRepo::insert(&mut *conn, categoria_id, tipo_id).await?;
        }
        Ok(None)
    }
}
