//! Repository for the `prefabricadas` table and its embedded read model.

use prefab_core::pagination::Page;
use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::precio::PrecioDetail;
use crate::models::prefabricada::{
    CreatePrefabricada, Prefabricada, PrefabricadaDetail, PrefabricadaFilter, PrefabricadaPage,
    UpdatePrefabricada,
};
use crate::repositories::{
    group_by, CaracteristicaRepo, ImagenPrefabricadaRepo, IncluyeRepo, PrecioRepo,
};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, nombre_prefabricada, m2, garantia, eslogan, descripcion, \
    destacada, oferta, categoria_id, estilo_id, tipo_id, empresa_id, created_at, updated_at";

impl ScopedEntity for Prefabricada {
    const TABLE: &'static str = "prefabricadas";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct PrefabricadaRepo;

impl PrefabricadaRepo {
    pub fn scope(empresa_id: DbId) -> Scope {
        Scope::for_entity::<Prefabricada>().within("empresa_id", "empresas", empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        input: &CreatePrefabricada,
    ) -> Result<Option<Prefabricada>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.insert_into(
            "nombre_prefabricada, m2, garantia, eslogan, descripcion, destacada, oferta, \
             categoria_id, estilo_id, tipo_id, empresa_id",
        );
        qb.separated(", ")
            .push_bind(&input.nombre_prefabricada)
            .push_bind(input.m2)
            .push_bind(&input.garantia)
            .push_bind(&input.eslogan)
            .push_bind(&input.descripcion)
            .push_bind(input.destacada)
            .push_bind(input.oferta)
            .push_bind(input.categoria_id)
            .push_bind(input.estilo_id)
            .push_bind(input.tipo_id)
            .push_bind(empresa_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Prefabricada>().fetch_optional(pool).await
    }

    pub async fn find(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<Option<Prefabricada>, sqlx::Error> {
        Self::scope(empresa_id).fetch_one(pool, id).await
    }

    pub async fn find_detail(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<Option<PrefabricadaDetail>, sqlx::Error> {
        let Some(prefabricada) = Self::find(pool, empresa_id, id).await? else {
            return Ok(None);
        };
        let mut details = Self::embed(pool, vec![prefabricada]).await?;
        Ok(details.pop())
    }

    /// One filtered page of live prefabricadas with their collections
    /// embedded.
    pub async fn list_page(
        pool: &PgPool,
        empresa_id: DbId,
        filter: PrefabricadaFilter,
        page: Page,
    ) -> Result<PrefabricadaPage, sqlx::Error> {
        let mut qb = Self::scope(empresa_id).select(COLUMNS);
        if let Some(categoria_id) = filter.categoria_id {
            qb.push(" AND t.categoria_id = ");
            qb.push_bind(categoria_id);
        }
        if let Some(tipo_id) = filter.tipo_id {
            qb.push(" AND t.tipo_id = ");
            qb.push_bind(tipo_id);
        }
        if let Some(destacada) = filter.destacada {
            qb.push(" AND t.destacada = ");
            qb.push_bind(destacada);
        }
        if let Some(oferta) = filter.oferta {
            qb.push(" AND t.oferta = ");
            qb.push_bind(oferta);
        }
        qb.push(" ORDER BY t.id LIMIT ");
        qb.push_bind(page.limit);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset());

        let rows = qb.build_query_as::<Prefabricada>().fetch_all(pool).await?;
        let prefabricadas = Self::embed(pool, rows).await?;
        Ok(PrefabricadaPage {
            prefabricadas,
            page: page.page,
            limit: page.limit,
        })
    }

    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
        input: &UpdatePrefabricada,
    ) -> Result<Option<Prefabricada>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("nombre_prefabricada = ")
            .push_bind_unseparated(&input.nombre_prefabricada)
            .push("m2 = ")
            .push_bind_unseparated(input.m2)
            .push("garantia = ")
            .push_bind_unseparated(&input.garantia)
            .push("eslogan = ")
            .push_bind_unseparated(&input.eslogan)
            .push("descripcion = ")
            .push_bind_unseparated(&input.descripcion)
            .push("destacada = ")
            .push_bind_unseparated(input.destacada)
            .push("oferta = ")
            .push_bind_unseparated(input.oferta)
            .push("categoria_id = ")
            .push_bind_unseparated(input.categoria_id)
            .push("estilo_id = ")
            .push_bind_unseparated(input.estilo_id)
            .push("tipo_id = ")
            .push_bind_unseparated(input.tipo_id);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Prefabricada>().fetch_optional(pool).await
    }

    pub async fn soft_delete(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(empresa_id).soft_delete(pool, id).await
    }

    /// Attach live images, caracteristicas and precios (with incluyes) to
    /// already-scoped rows, preserving their order.
    async fn embed(
        pool: &PgPool,
        rows: Vec<Prefabricada>,
    ) -> Result<Vec<PrefabricadaDetail>, sqlx::Error> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<DbId> = rows.iter().map(|p| p.id).collect();

        let (imagenes, caracteristicas, precios) = futures::try_join!(
            ImagenPrefabricadaRepo::list_for_prefabricadas(pool, &ids),
            CaracteristicaRepo::list_for_prefabricadas(pool, &ids),
            PrecioRepo::list_for_prefabricadas(pool, &ids),
        )?;

        let precio_ids: Vec<DbId> = precios.iter().map(|p| p.id).collect();
        let mut incluyes = group_by(
            IncluyeRepo::list_for_precios(pool, &precio_ids).await?,
            |i| i.precio_id,
        );
        let mut precios = group_by(
            precios
                .into_iter()
                .map(|precio| PrecioDetail {
                    incluyes: incluyes.remove(&precio.id).unwrap_or_default(),
                    precio,
                })
                .collect(),
            |p: &PrecioDetail| p.precio.prefabricada_id,
        );
        let mut imagenes = group_by(imagenes, |i| i.prefabricada_id);
        let mut caracteristicas = group_by(caracteristicas, |c| c.prefabricada_id);

        Ok(rows
            .into_iter()
            .map(|prefabricada| PrefabricadaDetail {
                imagenes_prefabricadas: imagenes.remove(&prefabricada.id).unwrap_or_default(),
                caracteristicas: caracteristicas.remove(&prefabricada.id).unwrap_or_default(),
                precios: precios.remove(&prefabricada.id).unwrap_or_default(),
                prefabricada,
            })
            .collect())
    }
}
