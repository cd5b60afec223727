//! Repository for the `empresas` table (tenant root).

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::empresa::{CreateEmpresa, Empresa, EmpresaDetail, UpdateEmpresa};
use crate::repositories::{RedRepo, ServicioRepo};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

/// Column list for `empresas` queries.
const COLUMNS: &str = "id, nombre_empresa, descripcion_empresa, historia_empresa, \
    mision_empresa, vision_empresa, ubicacion_empresa, celular_empresa, \
    email_empresa, created_at, updated_at";

impl ScopedEntity for Empresa {
    const TABLE: &'static str = "empresas";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct EmpresaRepo;

impl EmpresaRepo {
    pub fn scope() -> Scope {
        Scope::for_entity::<Empresa>()
    }

    pub async fn create(pool: &PgPool, input: &CreateEmpresa) -> Result<Empresa, sqlx::Error> {
        let scope = Self::scope();
        let mut qb = scope.insert_into(
            "nombre_empresa, descripcion_empresa, historia_empresa, mision_empresa, \
             vision_empresa, ubicacion_empresa, celular_empresa, email_empresa",
        );
        qb.separated(", ")
            .push_bind(&input.nombre_empresa)
            .push_bind(&input.descripcion_empresa)
            .push_bind(&input.historia_empresa)
            .push_bind(&input.mision_empresa)
            .push_bind(&input.vision_empresa)
            .push_bind(&input.ubicacion_empresa)
            .push_bind(&input.celular_empresa)
            .push_bind(&input.email_empresa);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Empresa>().fetch_one(pool).await
    }

    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<Empresa>, sqlx::Error> {
        Self::scope().fetch_one(pool, id).await
    }

    /// Empresa with its live servicios and redes embedded.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<EmpresaDetail>, sqlx::Error> {
        let Some(empresa) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        let (servicios, redes) =
            futures::try_join!(ServicioRepo::list(pool, id), RedRepo::list(pool, id))?;
        Ok(Some(EmpresaDetail {
            empresa,
            servicios,
            redes,
        }))
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Empresa>, sqlx::Error> {
        Self::scope().fetch_all(pool, "t.id").await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmpresa,
    ) -> Result<Option<Empresa>, sqlx::Error> {
        let scope = Self::scope();
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("nombre_empresa = ")
            .push_bind_unseparated(&input.nombre_empresa)
            .push("descripcion_empresa = ")
            .push_bind_unseparated(&input.descripcion_empresa)
            .push("historia_empresa = ")
            .push_bind_unseparated(&input.historia_empresa)
            .push("mision_empresa = ")
            .push_bind_unseparated(&input.mision_empresa)
            .push("vision_empresa = ")
            .push_bind_unseparated(&input.vision_empresa)
            .push("ubicacion_empresa = ")
            .push_bind_unseparated(&input.ubicacion_empresa)
            .push("celular_empresa = ")
            .push_bind_unseparated(&input.celular_empresa)
            .push("email_empresa = ")
            .push_bind_unseparated(&input.email_empresa);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Empresa>().fetch_optional(pool).await
    }

    /// Logical delete. Children stay live in storage but become unreachable
    /// through every scoped read.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<SoftDelete, sqlx::Error> {
        Self::scope().soft_delete(pool, id).await
    }
}
