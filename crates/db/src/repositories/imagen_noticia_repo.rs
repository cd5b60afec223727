//! Repository for the `imagenes_noticias` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::noticia::ImagenNoticia;
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, image, noticia_id, created_at, updated_at";

impl ScopedEntity for ImagenNoticia {
    const TABLE: &'static str = "imagenes_noticias";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct ImagenNoticiaRepo;

impl ImagenNoticiaRepo {
    pub fn scope(empresa_id: DbId, noticia_id: DbId) -> Scope {
        Scope::for_entity::<ImagenNoticia>()
            .within("noticia_id", "noticias", noticia_id)
            .within("empresa_id", "empresas", empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        noticia_id: DbId,
        image: &str,
    ) -> Result<Option<ImagenNoticia>, sqlx::Error> {
        let scope = Self::scope(empresa_id, noticia_id);
        let mut qb = scope.insert_into("image, noticia_id");
        qb.separated(", ").push_bind(image).push_bind(noticia_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<ImagenNoticia>().fetch_optional(pool).await
    }

    pub async fn find(
        pool: &PgPool,
        empresa_id: DbId,
        noticia_id: DbId,
        id: DbId,
    ) -> Result<Option<ImagenNoticia>, sqlx::Error> {
        Self::scope(empresa_id, noticia_id).fetch_one(pool, id).await
    }

    pub async fn list(
        pool: &PgPool,
        empresa_id: DbId,
        noticia_id: DbId,
    ) -> Result<Vec<ImagenNoticia>, sqlx::Error> {
        Self::scope(empresa_id, noticia_id).fetch_all(pool, "t.id").await
    }

    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        noticia_id: DbId,
        id: DbId,
        image: &str,
    ) -> Result<Option<ImagenNoticia>, sqlx::Error> {
        let scope = Self::scope(empresa_id, noticia_id);
        let mut qb = scope.update_set();
        qb.push("image = ");
        qb.push_bind(image);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<ImagenNoticia>().fetch_optional(pool).await
    }

    pub async fn soft_delete(
        pool: &PgPool,
        empresa_id: DbId,
        noticia_id: DbId,
        id: DbId,
    ) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(empresa_id, noticia_id).soft_delete(pool, id).await
    }
}
