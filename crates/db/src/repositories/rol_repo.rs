//! Repository for the `roles` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::rol::{CreateRol, Rol, UpdateRol};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, nombre_rol, descripcion_rol, created_at, updated_at";

impl ScopedEntity for Rol {
    const TABLE: &'static str = "roles";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct RolRepo;

impl RolRepo {
    pub fn scope() -> Scope {
        Scope::for_entity::<Rol>()
    }

    pub async fn create(pool: &PgPool, input: &CreateRol) -> Result<Rol, sqlx::Error> {
        let scope = Self::scope();
        let mut qb = scope.insert_into("nombre_rol, descripcion_rol");
        qb.separated(", ")
            .push_bind(&input.nombre_rol)
            .push_bind(&input.descripcion_rol);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Rol>().fetch_one(pool).await
    }

    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<Rol>, sqlx::Error> {
        Self::scope().fetch_one(pool, id).await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Rol>, sqlx::Error> {
        Self::scope().fetch_all(pool, "t.id").await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateRol) -> Result<Option<Rol>, sqlx::Error> {
        let scope = Self::scope();
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("nombre_rol = ")
            .push_bind_unseparated(&input.nombre_rol)
            .push("descripcion_rol = ")
            .push_bind_unseparated(&input.descripcion_rol);
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Rol>().fetch_optional(pool).await
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<SoftDelete, sqlx::Error> {
        Self::scope().soft_delete(pool, id).await
    }

    /// Names of the live roles assigned to a usuario through live
    /// `roles_usuarios` rows. These become the token's role claim.
    pub async fn names_for_usuario(pool: &PgPool, usuario_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT r.nombre_rol FROM roles_usuarios ru \
             JOIN roles r ON r.id = ru.rol_id AND r.deleted_at IS NULL \
             WHERE ru.usuario_id = $1 AND ru.deleted_at IS NULL \
             ORDER BY r.nombre_rol",
        )
        .bind(usuario_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
