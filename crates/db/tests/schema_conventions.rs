use sqlx::PgPool;

/// All `id` columns must be bigint identities.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Every table must have created_at and updated_at as timestamptz, and an
/// `updated_at` trigger.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps_and_trigger(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = $1
                   AND column_name = $2",
            )
            .bind(table)
            .bind(col)
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }

        let (has_trigger,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.triggers
                WHERE event_object_table = $1
                  AND trigger_name = 'trg_' || $1 || '_updated_at'
            )",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(has_trigger, "Table {table} has no updated_at trigger");
    }
}

/// Soft-deletable tables carry a nullable `deleted_at`. Only the recovery
/// token table is exempt.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_column_everywhere_but_recovery(pool: PgPool) {
    let missing: Vec<(String,)> = sqlx::query_as(
        "SELECT t.table_name
         FROM information_schema.tables t
         WHERE t.table_schema = 'public'
           AND t.table_type = 'BASE TABLE'
           AND t.table_name NOT IN ('_sqlx_migrations', 'recuperaciones')
           AND NOT EXISTS (
               SELECT 1 FROM information_schema.columns c
               WHERE c.table_schema = 'public'
                 AND c.table_name = t.table_name
                 AND c.column_name = 'deleted_at'
                 AND c.is_nullable = 'YES'
           )",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(missing.is_empty(), "Tables without deleted_at: {missing:?}");
}

/// No character varying columns should exist; TEXT is preferred.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(
        rows.is_empty(),
        "Found VARCHAR columns (should use TEXT): {:?}",
        rows
    );
}

/// Every foreign key column must lead some index.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_fks_have_indexes(pool: PgPool) {
    let fk_columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT DISTINCT
             tc.table_name,
             kcu.column_name
         FROM information_schema.table_constraints tc
         JOIN information_schema.key_column_usage kcu
             ON tc.constraint_name = kcu.constraint_name
             AND tc.table_schema = kcu.table_schema
         WHERE tc.constraint_type = 'FOREIGN KEY'
           AND tc.table_schema = 'public'
         ORDER BY tc.table_name, kcu.column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table, column) in &fk_columns {
        let (has_index,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1
                FROM pg_indexes
                WHERE schemaname = 'public'
                  AND tablename = $1
                  AND indexdef LIKE '%(' || $2 || '%'
            )",
        )
        .bind(table)
        .bind(column)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert!(has_index, "FK column {table}.{column} has no index");
    }
}

/// Constraint names follow the `fk_` / `uq_` prefixes the API error mapper
/// relies on.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_constraint_names_are_prefixed(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT constraint_name, constraint_type
         FROM information_schema.table_constraints
         WHERE table_schema = 'public'
           AND constraint_type IN ('FOREIGN KEY', 'UNIQUE')",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (name, kind) in &rows {
        let prefix = if kind == "FOREIGN KEY" { "fk_" } else { "uq_" };
        assert!(name.starts_with(prefix), "Constraint {name} should start with {prefix}");
    }
}

/// The three built-in roles are seeded.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_roles_are_seeded(pool: PgPool) {
    let names: Vec<(String,)> =
        sqlx::query_as("SELECT nombre_rol FROM roles WHERE deleted_at IS NULL ORDER BY nombre_rol")
            .fetch_all(&pool)
            .await
            .unwrap();
    let names: Vec<&str> = names.iter().map(|(n,)| n.as_str()).collect();
    assert_eq!(names, vec!["administrador", "ejecutivo_ventas", "super_administrador"]);
}
