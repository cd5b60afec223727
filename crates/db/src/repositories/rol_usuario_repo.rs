//! Repository for the `roles_usuarios` join table, scoped under its rol.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::rol::{CreateRolUsuario, RolUsuario, UpdateRolUsuario};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, usuario_id, rol_id, created_at, updated_at";

impl ScopedEntity for RolUsuario {
    const TABLE: &'static str = "roles_usuarios";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct RolUsuarioRepo;

impl RolUsuarioRepo {
    pub fn scope(rol_id: DbId) -> Scope {
        Scope::for_entity::<RolUsuario>().within("rol_id", "roles", rol_id)
    }

    pub async fn create(
        pool: &PgPool,
        rol_id: DbId,
        input: &CreateRolUsuario,
    ) -> Result<Option<RolUsuario>, sqlx::Error> {
        let scope = Self::scope(rol_id);
        let mut qb = scope.insert_into("usuario_id, rol_id");
        qb.separated(", ").push_bind(input.usuario_id).push_bind(rol_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<RolUsuario>().fetch_optional(pool).await
    }

    pub async fn find(pool: &PgPool, rol_id: DbId, id: DbId) -> Result<Option<RolUsuario>, sqlx::Error> {
        Self::scope(rol_id).fetch_one(pool, id).await
    }

    pub async fn list(pool: &PgPool, rol_id: DbId) -> Result<Vec<RolUsuario>, sqlx::Error> {
        Self::scope(rol_id).fetch_all(pool, "t.id").await
    }

    pub async fn update(
        pool: &PgPool,
        rol_id: DbId,
        id: DbId,
        input: &UpdateRolUsuario,
    ) -> Result<Option<RolUsuario>, sqlx::Error> {
        let scope = Self::scope(rol_id);
        let mut qb = scope.update_set();
        qb.push("usuario_id = ");
        qb.push_bind(input.usuario_id);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<RolUsuario>().fetch_optional(pool).await
    }

    pub async fn soft_delete(pool: &PgPool, rol_id: DbId, id: DbId) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(rol_id).soft_delete(pool, id).await
    }
}
