//! Repository for the `credenciales` table.
//!
//! Write methods take a `&mut PgConnection` so the caller can hold one
//! transaction across the existence check, password hashing and the write.

use prefab_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::credencial::{Credencial, CredencialLogin};
use crate::scope::{Scope, ScopedEntity};

/// Column list for `credenciales` queries. Never includes `password_hash`.
const COLUMNS: &str = "id, email, usuario_id, created_at, updated_at";

impl ScopedEntity for Credencial {
    const TABLE: &'static str = "credenciales";
    const COLUMNS: &'static str = COLUMNS;
}

pub struct CredencialRepo;

impl CredencialRepo {
    pub fn scope(empresa_id: DbId, usuario_id: DbId) -> Scope {
        Scope::for_entity::<Credencial>()
            .within("usuario_id", "usuarios", usuario_id)
            .within("empresa_id", "empresas", empresa_id)
    }

    /// The live credential of a usuario under its empresa, if any.
    pub async fn find_for_usuario(
        pool: &PgPool,
        empresa_id: DbId,
        usuario_id: DbId,
    ) -> Result<Option<Credencial>, sqlx::Error> {
        let mut qb = Self::scope(empresa_id, usuario_id).select(COLUMNS);
        qb.push(" LIMIT 1");
        qb.build_query_as::<Credencial>().fetch_optional(pool).await
    }

    /// Whether any credential row exists for the usuario. Soft-deleted rows
    /// count: `uq_credenciales_usuario_id` covers them too.
    pub async fn usuario_has_credential(
        conn: &mut PgConnection,
        usuario_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM credenciales WHERE usuario_id = $1 FOR UPDATE")
                .bind(usuario_id)
                .fetch_optional(conn)
                .await?;
        Ok(row.is_some())
    }

    /// Insert beneath a live usuario/empresa chain. `None` when the chain does
    /// not resolve.
    pub async fn insert(
        conn: &mut PgConnection,
        empresa_id: DbId,
        usuario_id: DbId,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<Credencial>, sqlx::Error> {
        let scope = Self::scope(empresa_id, usuario_id);
        let mut qb = scope.insert_into("email, password_hash, usuario_id");
        qb.separated(", ")
            .push_bind(email)
            .push_bind(password_hash)
            .push_bind(usuario_id);
        scope.finish_insert(&mut qb, COLUMNS);
        qb.build_query_as::<Credencial>().fetch_optional(conn).await
    }

    /// Replace the email, and the hash when one is given.
    pub async fn update(
        conn: &mut PgConnection,
        empresa_id: DbId,
        usuario_id: DbId,
        id: DbId,
        email: &str,
        password_hash: Option<&str>,
    ) -> Result<Option<Credencial>, sqlx::Error> {
        let scope = Self::scope(empresa_id, usuario_id);
        let mut qb = scope.update_set();
        qb.separated(", ")
            .push("email = ")
            .push_bind_unseparated(email)
            .push("password_hash = COALESCE(")
            .push_bind_unseparated(password_hash)
            .push_unseparated(", password_hash)");
        scope.push_update_target(&mut qb, id, COLUMNS);
        qb.build_query_as::<Credencial>().fetch_optional(conn).await
    }

    /// Hash lookup for login and recovery. Only credentials of live usuarios
    /// in live empresas are considered.
    pub async fn find_login(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<CredencialLogin>, sqlx::Error> {
        sqlx::query_as::<_, CredencialLogin>(
            "SELECT c.usuario_id, c.password_hash FROM credenciales c \
             JOIN usuarios u ON u.id = c.usuario_id AND u.deleted_at IS NULL \
             JOIN empresas e ON e.id = u.empresa_id AND e.deleted_at IS NULL \
             WHERE c.email = $1 AND c.deleted_at IS NULL",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Overwrite the hash of a usuario's live credential. Returns rows
    /// affected.
    pub async fn set_password_hash(
        conn: &mut PgConnection,
        usuario_id: DbId,
        password_hash: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE credenciales SET password_hash = $2 \
             WHERE usuario_id = $1 AND deleted_at IS NULL",
        )
        .bind(usuario_id)
        .bind(password_hash)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
