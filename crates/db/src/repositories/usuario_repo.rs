//! Repository for the `usuarios` table.

use prefab_core::types::DbId;
use sqlx::PgPool;

use crate::models::usuario::{CreateUsuario, UpdateUsuario, Usuario};
use crate::scope::{Scope, ScopedEntity, SoftDelete};

const COLUMNS: &str = "id, primer_nombre, segundo_nombre, primer_apellido, segundo_apellido, \
    image, empresa_id, created_at, updated_at";

impl ScopedEntity for Usuario {
    const TABLE: &'static str = "usuarios";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct UsuarioRepo;

impl UsuarioRepo {
    pub fn scope(empresa_id: DbId) -> Scope {
        Scope::for_entity::<Usuario>().within("empresa_id", "empresas", empresa_id)
    }

    pub async fn create(
        pool: &PgPool,
        empresa_id: DbId,
        input: &CreateUsuario,
    ) -> Result<Option<Usuario>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.insert_into(
            "primer_nombre, segundo_nombre, primer_apellido, segundo_apellido, image, empresa_id",
        );
        qb.separated(", ")
            .push_bind(&input.fields.primer_nombre)
            .push_bind(&input.fields.segundo_nombre)
            .push_bind(&input.fields.primer_apellido)
            .push_bind(&input.fields.segundo_apellido)
            .push_bind(&input.image)
            .push_bind(empresa_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Usuario>().fetch_optional(pool).await
    }

    pub async fn find(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<Option<Usuario>, sqlx::Error> {
        Self::scope(empresa_id).fetch_one(pool, id).await
    }

    pub async fn list(pool: &PgPool, empresa_id: DbId) -> Result<Vec<Usuario>, sqlx::Error> {
        Self::scope(empresa_id).fetch_all(pool, "t.id").await
    }

    /// Whether the usuario and its empresa are both live, whatever the
    /// empresa. Used where a usuario is referenced from outside its tenant
    /// path (role assignment).
    pub async fn exists_live(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "SELECT u.id FROM usuarios u \
             JOIN empresas e ON e.id = u.empresa_id AND e.deleted_at IS NULL \
             WHERE u.id = $1 AND u.deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }

    /// Keeps the stored image when `input.image` is `None`.
    pub async fn update(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
        input: &UpdateUsuario,
    ) -> Result<Option<Usuario>, sqlx::Error> {
        let scope = Self::scope(empresa_id);
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("primer_nombre = ")
            .push_bind_unseparated(&input.fields.primer_nombre)
            .push("segundo_nombre = ")
            .push_bind_unseparated(&input.fields.segundo_nombre)
            .push("primer_apellido = ")
            .push_bind_unseparated(&input.fields.primer_apellido)
            .push("segundo_apellido = ")
            .push_bind_unseparated(&input.fields.segundo_apellido)
            .push("image = COALESCE(")
            .push_bind_unseparated(&input.image)
            .push_unseparated(", image)");
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Usuario>().fetch_optional(pool).await
    }

    pub async fn soft_delete(
        pool: &PgPool,
        empresa_id: DbId,
        id: DbId,
    ) -> Result<SoftDelete, sqlx::Error> {
        Self::scope(empresa_id).soft_delete(pool, id).await
    }
}
