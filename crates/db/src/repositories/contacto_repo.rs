//! Repository for the `contactos` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::usuario::{Contacto, CreateContacto, UpdateContacto};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, email_laboral, celular_laboral, direccion_laboral, usuario_id, \
    created_at, updated_at";

impl ScopedEntity for Contacto {
    const TABLE: &'static str = "contactos";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct ContactoRepo;

impl ContactoRepo {
    pub fn scope(empresa_id: DbId, usuario_id: DbId) -> Scope {
        Scope::for_entity::<Contacto>()
            .within("usuario_id", "usuarios", usuario_id)
            .within("empresa_id", "empresas", empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        usuario_id: DbId,
        input: &CreateContacto,
    ) -> Result<Option<Contacto>, sqlx::Error> {
        let scope = Self::scope(empresa_id, usuario_id);
        let mut qb =
            scope.insert_into("email_laboral, celular_laboral, direccion_laboral, usuario_id");
        qb.separated(", ")
            .push_bind(&input.email_laboral)
            .push_bind(&input.celular_laboral)
            .push_bind(&input.direccion_laboral)
            .push_bind(usuario_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Contacto>().fetch_optional(pool).await
    }

    pub async fn find(
        pool: &PgPool,
        empresa_id: DbId,
        usuario_id: DbId,
        id: DbId,
    ) -> Result<Option<Contacto>, sqlx::Error> {
        Self::scope(empresa_id, usuario_id).fetch_one(pool, id).await
    }

    pub async fn list(
        pool: &PgPool,
        empresa_id: DbId,
        usuario_id: DbId,
    ) -> Result<Vec<Contacto>, sqlx::Error> {
        Self::scope(empresa_id, usuario_id).fetch_all(pool, "t.id").await
    }

    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        usuario_id: DbId,
        id: DbId,
        input: &UpdateContacto,
    ) -> Result<Option<Contacto>, sqlx::Error> {
        let scope = Self::scope(empresa_id, usuario_id);
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("email_laboral = ")
            .push_bind_unseparated(&input.email_laboral)
            .push("celular_laboral = ")
            .push_bind_unseparated(&input.celular_laboral)
            .push("direccion_laboral = ")
            .push_bind_unseparated(&input.direccion_laboral);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Contacto>().fetch_optional(pool).await
    }

    pub async fn soft_delete(
        pool: &PgPool,
        empresa_id: DbId,
        usuario_id: DbId,
        id: DbId,
    ) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(empresa_id, usuario_id).soft_delete(pool, id).await
    }
}
