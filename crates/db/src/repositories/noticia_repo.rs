//! Repository for the `noticias` table.

use prefab_core::pagination::Page;
use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::noticia::{
    CreateNoticia, Noticia, NoticiaDetail, NoticiaPage, PageInfo, UpdateNoticia,
};
use crate::repositories::ImagenNoticiaRepo;
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str =
    "id, titulo_noticia, desarrollo_noticia, empresa_id, created_at, updated_at";

impl ScopedEntity for Noticia {
    const TABLE: &'static str = "noticias";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct NoticiaRepo;

impl NoticiaRepo {
    pub fn scope(empresa_id: DbId) -> Scope {
        Scope::for_entity::<Noticia>().within("empresa_id", "empresas", empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        input: &CreateNoticia,
    ) -> Result<Option<Noticia>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.insert_into("titulo_noticia, desarrollo_noticia, empresa_id");
        qb.separated(", ")
            .push_bind(&input.titulo_noticia)
            .push_bind(&input.desarrollo_noticia)
            .push_bind(empresa_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Noticia>().fetch_optional(pool).await
    }

    pub async fn find(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<Option<Noticia>, sqlx::Error> {
        Self::scope(empresa_id).fetch_one(pool, id).await
    }

    /// Noticia with its live images.
    pub async fn find_detail(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<Option<NoticiaDetail>, sqlx::Error> {
        let Some(noticia) = Self::find(pool, empresa_id, id).await? else {
            return Ok(None);
        };
        let imagenes_noticia = ImagenNoticiaRepo::list(pool, empresa_id, id).await?;
        Ok(Some(NoticiaDetail {
            noticia,
            imagenes_noticia,
        }))
    }

    /// One page of live noticias, newest first, with the live total.
    pub async fn list_page(
        pool: &PgPool,
        empresa_id: DbId,
        page: Page,
    ) -> Result<NoticiaPage, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.select(COLUMNS);
        qb.push(" ORDER BY t.created_at DESC, t.id DESC LIMIT ");
        qb.push_bind(page.limit);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset());

        let (noticias, total) = futures::try_join!(
            qb.build_query_as::<Noticia>().fetch_all(pool),
            scope.count(pool),
        )?;
        Ok(NoticiaPage {
            noticias,
            pagination: PageInfo::new(page, total),
        })
    }

    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
        input: &UpdateNoticia,
    ) -> Result<Option<Noticia>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("titulo_noticia = ")
            .push_bind_unseparated(&input.titulo_noticia)
            .push("desarrollo_noticia = ")
            .push_bind_unseparated(&input.desarrollo_noticia);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Noticia>().fetch_optional(pool).await
    }

    pub async fn soft_delete(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(empresa_id).soft_delete(pool, id).await
    }
}
