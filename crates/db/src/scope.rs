//! Ownership-chain scoping and the soft-delete contract.
//!
//! A [`Scope`] names a table plus the ordered chain of ancestors a row must
//! hang from, nearest parent first:
//!
//! ```text
//! Scope::of("incluyes")
//!     .within("precio_id", "precios", precio_id)
//!     .within("prefabricada_id", "prefabricadas", prefabricada_id)
//!     .within("empresa_id", "empresas", empresa_id)
//! ```
//!
//! Every query rendered from a scope joins each ancestor, requires it to be
//! live, and pins its id. A row is therefore never addressed by its own id
//! alone: a valid id under the wrong parent simply matches nothing.
//!
//! The target table is aliased `t` and the ancestors `s1..sN`.

use prefab_core::types::{DbId, Timestamp};
use sqlx::postgres::{PgRow, Postgres};
use sqlx::{FromRow, PgExecutor, PgPool, QueryBuilder};

/// A row type that lives in a soft-deletable table.
pub trait ScopedEntity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Table name.
    const TABLE: &'static str;
    /// Comma-separated column list, unqualified.
    const COLUMNS: &'static str;
}

/// Outcome of a logical deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftDelete {
    Deleted,
    AlreadyDeleted,
    /// No row with that id under the requested chain, or an ancestor is
    /// itself deleted.
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link {
    fk_column: &'static str,
    parent_table: &'static str,
    parent_id: DbId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    table: &'static str,
    links: Vec<Link>,
}

impl Scope {
    /// An unscoped (root) view of `table`.
    pub fn of(table: &'static str) -> Self {
        Self {
            table,
            links: Vec::new(),
        }
    }

    /// Scope for the table of `T`.
    pub fn for_entity<T: ScopedEntity>() -> Self {
        Self::of(T::TABLE)
    }

    /// Add the next ancestor. `fk_column` lives on the previously added
    /// level (the target table for the first call).
    pub fn within(
        mut self,
        fk_column: &'static str,
        parent_table: &'static str,
        parent_id: DbId,
    ) -> Self {
        self.links.push(Link {
            fk_column,
            parent_table,
            parent_id,
        });
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    /// The nearest parent as its own scope, together with its id.
    pub fn parent(&self) -> Option<(Scope, DbId)> {
        let (first, rest) = self.links.split_first()?;
        Some((
            Scope {
                table: first.parent_table,
                links: rest.to_vec(),
            },
            first.parent_id,
        ))
    }

    // -----------------------------------------------------------------------
    // SQL rendering
    // -----------------------------------------------------------------------

    /// `SELECT <t.columns> FROM <chain> WHERE t.deleted_at IS NULL AND <ids>`.
    ///
    /// Callers append further predicates with `" AND ..."`, then ordering and
    /// paging.
    pub fn select<'args>(&self, columns: &str) -> QueryBuilder<'args, Postgres> {
        let mut qb = QueryBuilder::new("SELECT ");
        qb.push(qualify(columns));
        self.push_from(&mut qb);
        self.push_live_filter(&mut qb);
        qb
    }

    /// `INSERT INTO <table> (<columns>) SELECT `. Bind the values, then call
    /// [`Scope::finish_insert`].
    pub fn insert_into<'args>(&self, columns: &str) -> QueryBuilder<'args, Postgres> {
        QueryBuilder::new(format!("INSERT INTO {} ({columns}) SELECT ", self.table))
    }

    /// Guard an `INSERT ... SELECT` so the row is only written beneath a live,
    /// correctly chained parent, then append `RETURNING`. A guarded insert
    /// under a missing parent returns no row.
    pub fn finish_insert(&self, qb: &mut QueryBuilder<'_, Postgres>, returning: &str) {
        if let Some((parent, parent_id)) = self.parent() {
            qb.push(" WHERE EXISTS (SELECT 1");
            parent.push_from(qb);
            parent.push_live_filter(qb);
            qb.push(" AND t.id = ");
            qb.push_bind(parent_id);
            qb.push(")");
        }
        qb.push(" RETURNING ");
        qb.push(returning);
    }

    /// `UPDATE <table> SET `. Push the assignments, then call
    /// [`Scope::push_update_target`].
    pub fn update_set<'args>(&self) -> QueryBuilder<'args, Postgres> {
        QueryBuilder::new(format!("UPDATE {} SET ", self.table))
    }

    /// Finish a caller-built `UPDATE <table> SET ...` so it only touches the
    /// live row `id` under this chain.
    pub fn push_update_target(&self, qb: &mut QueryBuilder<'_, Postgres>, id: DbId, returning: &str) {
        qb.push(" WHERE id = (SELECT t.id");
        self.push_from(qb);
        self.push_live_filter(qb);
        qb.push(" AND t.id = ");
        qb.push_bind(id);
        qb.push(") RETURNING ");
        qb.push(returning);
    }

    fn push_from(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" FROM ");
        qb.push(self.table);
        qb.push(" t");
        let mut prev = String::from("t");
        for (i, link) in self.links.iter().enumerate() {
            let alias = format!("s{}", i + 1);
            qb.push(format!(
                " JOIN {table} {alias} ON {alias}.id = {prev}.{fk} AND {alias}.deleted_at IS NULL",
                table = link.parent_table,
                fk = link.fk_column,
            ));
            prev = alias;
        }
    }

    fn push_live_filter(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" WHERE t.deleted_at IS NULL");
        self.push_chain_ids(qb);
    }

    fn push_chain_ids(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        for (i, link) in self.links.iter().enumerate() {
            qb.push(format!(" AND s{}.id = ", i + 1));
            qb.push_bind(link.parent_id);
        }
    }

    // -----------------------------------------------------------------------
    // Generic reads
    // -----------------------------------------------------------------------

    /// Live row `id` under this chain.
    pub async fn fetch_one<'c, T, E>(&self, executor: E, id: DbId) -> Result<Option<T>, sqlx::Error>
    where
        T: ScopedEntity,
        E: PgExecutor<'c>,
    {
        let mut qb = self.select(T::COLUMNS);
        qb.push(" AND t.id = ");
        qb.push_bind(id);
        qb.build_query_as::<T>().fetch_optional(executor).await
    }

    /// Every live row under this chain, ordered by `order_by` (qualified with
    /// `t.`).
    pub async fn fetch_all<'c, T, E>(&self, executor: E, order_by: &str) -> Result<Vec<T>, sqlx::Error>
    where
        T: ScopedEntity,
        E: PgExecutor<'c>,
    {
        let mut qb = self.select(T::COLUMNS);
        qb.push(" ORDER BY ");
        qb.push(order_by);
        qb.build_query_as::<T>().fetch_all(executor).await
    }

    /// Whether live row `id` exists under this chain.
    pub async fn exists<'c, E>(&self, executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'c>,
    {
        let mut qb = self.select("id");
        qb.push(" AND t.id = ");
        qb.push_bind(id);
        let row: Option<(DbId,)> = qb.build_query_as().fetch_optional(executor).await?;
        Ok(row.is_some())
    }

    /// Number of live rows under this chain.
    pub async fn count<'c, E>(&self, executor: E) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'c>,
    {
        let mut qb = QueryBuilder::new("SELECT COUNT(*)");
        self.push_from(&mut qb);
        self.push_live_filter(&mut qb);
        let (count,): (i64,) = qb.build_query_as().fetch_one(executor).await?;
        Ok(count)
    }

    /// Whether every ancestor of this scope is live and correctly chained.
    /// Root scopes trivially pass. Checked before inserting a child.
    pub async fn ancestors_live<'c, E>(&self, executor: E) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'c>,
    {
        match self.parent() {
            Some((parent, parent_id)) => parent.exists(executor, parent_id).await,
            None => Ok(true),
        }
    }

    // -----------------------------------------------------------------------
    // Soft delete
    // -----------------------------------------------------------------------

    /// Logically delete row `id` under this chain.
    ///
    /// The current `deleted_at` is read with a row lock inside a transaction,
    /// so of two concurrent calls exactly one observes a live row.
    pub async fn soft_delete(&self, pool: &PgPool, id: DbId) -> Result<SoftDelete, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut qb = QueryBuilder::new("SELECT t.deleted_at");
        self.push_from(&mut qb);
        qb.push(" WHERE t.id = ");
        qb.push_bind(id);
        self.push_chain_ids(&mut qb);
        qb.push(" FOR UPDATE OF t");

        let current: Option<(Option<Timestamp>,)> =
            qb.build_query_as().fetch_optional(&mut *tx).await?;

        let outcome = match current {
            None => SoftDelete::NotFound,
            Some((Some(_),)) => SoftDelete::AlreadyDeleted,
            Some((None,)) => {
                let query = format!("UPDATE {} SET deleted_at = NOW() WHERE id = $1", self.table);
                sqlx::query(&query).bind(id).execute(&mut *tx).await?;
                SoftDelete::Deleted
            }
        };

        tx.commit().await?;
        Ok(outcome)
    }
}

/// Prefix every column of a comma-separated list with the `t.` alias.
fn qualify(columns: &str) -> String {
    columns
        .split(',')
        .map(|c| format!("t.{}", c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
