//! Repository for the `recuperaciones` table (password-recovery tokens).

use prefab_core::recovery::is_expired;
use prefab_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::recuperacion::Recuperacion;
use crate::repositories::CredencialRepo;

const COLUMNS: &str = "id, token_hash, usuario_id, expires_at, created_at";

/// Outcome of redeeming a recovery token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redemption {
    /// Password rewritten and token consumed.
    Redeemed,
    /// Unknown or already used token.
    NotFound,
    /// Token past its expiry. The row is left in place.
    Expired,
}

pub struct RecuperacionRepo;

impl RecuperacionRepo {
    pub async fn create(
        pool: &PgPool,
        token_hash: &str,
        usuario_id: DbId,
        expires_at: Timestamp,
    ) -> Result<Recuperacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO recuperaciones (token_hash, usuario_id, expires_at) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recuperacion>(&query)
            .bind(token_hash)
            .bind(usuario_id)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<Recuperacion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recuperaciones WHERE token_hash = $1");
        sqlx::query_as::<_, Recuperacion>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// The rejection [`RecuperacionRepo::redeem`] would give right now, or
    /// `None` while the token is live. A read-only pre-check: `redeem` still
    /// decides under its row lock.
    pub async fn rejection(
        pool: &PgPool,
        token_hash: &str,
        now: Timestamp,
    ) -> Result<Option<Redemption>, sqlx::Error> {
        Ok(match Self::find_by_hash(pool, token_hash).await? {
            None => Some(Redemption::NotFound),
            Some(row) if is_expired(row.expires_at, now) => Some(Redemption::Expired),
            Some(_) => None,
        })
    }

    /// Validate and consume a token in one transaction.
    ///
    /// The row is locked before the expiry check, so of two concurrent
    /// redemptions the second waits, then finds the row gone.
    pub async fn redeem(
        pool: &PgPool,
        token_hash: &str,
        new_password_hash: &str,
        now: Timestamp,
    ) -> Result<Redemption, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM recuperaciones WHERE token_hash = $1 FOR UPDATE");
        let row = sqlx::query_as::<_, Recuperacion>(&query)
            .bind(token_hash)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(Redemption::NotFound);
        };
        if is_expired(row.expires_at, now) {
            tx.rollback().await?;
            return Ok(Redemption::Expired);
        }

        let updated = CredencialRepo::set_password_hash(&mut tx, row.usuario_id, new_password_hash).await?;
        if updated == 0 {
            tx.rollback().await?;
            return Ok(Redemption::NotFound);
        }

        sqlx::query("DELETE FROM recuperaciones WHERE id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Redemption::Redeemed)
    }
}
