//! Integration tests for credential storage and login lookup.

mod common;

use prefab_db::models::credencial::Credencial;
use prefab_db::repositories::{CredencialRepo, RolRepo, UsuarioRepo};
use sqlx::PgPool;

use common::{seed_empresa, seed_usuario};

#[sqlx::test(migrations = "../../db/migrations")]
async fn credential_is_created_once_per_usuario(pool: PgPool) {
    let empresa = seed_empresa(&pool, "Casas Andes").await;
    let usuario = seed_usuario(&pool, empresa).await;

    let mut tx = pool.begin().await.expect("begin should succeed");
    assert!(!CredencialRepo::usuario_has_credential(&mut tx, usuario)
        .await
        .expect("check should succeed"));
    CredencialRepo::insert(&mut tx, empresa, usuario, "ana@casas.example", "hash")
        .await
        .expect("insert should succeed")
        .expect("chain is live");
    tx.commit().await.expect("commit should succeed");

    let mut conn = pool.acquire().await.expect("acquire should succeed");
    assert!(CredencialRepo::usuario_has_credential(&mut conn, usuario)
        .await
        .expect("check should succeed"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_violates_named_constraint(pool: PgPool) {
    let empresa = seed_empresa(&pool, "Casas Andes").await;
    let ana = seed_usuario(&pool, empresa).await;
    let otra = seed_usuario(&pool, empresa).await;

    let mut conn = pool.acquire().await.expect("acquire should succeed");
    CredencialRepo::insert(&mut conn, empresa, ana, "ventas@casas.example", "hash")
        .await
        .expect("insert should succeed");
    let err = CredencialRepo::insert(&mut conn, empresa, otra, "ventas@casas.example", "hash")
        .await
        .expect_err("duplicate email should fail");

    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_credenciales_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rolled_back_insert_leaves_nothing(pool: PgPool) {
    let empresa = seed_empresa(&pool, "Casas Andes").await;
    let usuario = seed_usuario(&pool, empresa).await;

    let mut tx = pool.begin().await.expect("begin should succeed");
    CredencialRepo::insert(&mut tx, empresa, usuario, "ana@casas.example", "hash")
        .await
        .expect("insert should succeed");
    tx.rollback().await.expect("rollback should succeed");

    let found = CredencialRepo::find_for_usuario(&pool, empresa, usuario)
        .await
        .expect("query should succeed");
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_keeps_hash_when_password_absent(pool: PgPool) {
    let empresa = seed_empresa(&pool, "Casas Andes").await;
    let usuario = seed_usuario(&pool, empresa).await;
    let mut conn = pool.acquire().await.expect("acquire should succeed");
    let created = CredencialRepo::insert(&mut conn, empresa, usuario, "ana@casas.example", "hash-1")
        .await
        .expect("insert should succeed")
        .expect("chain is live");

    let updated: Credencial =
        CredencialRepo::update(&mut conn, empresa, usuario, created.id, "ana.rojas@casas.example", None)
            .await
            .expect("update should succeed")
            .expect("credential is live");
    assert_eq!(updated.email, "ana.rojas@casas.example");

    let login = CredencialRepo::find_login(&pool, "ana.rojas@casas.example")
        .await
        .expect("lookup should succeed")
        .expect("credential should be found");
    assert_eq!(login.password_hash, "hash-1");

    let json = serde_json::to_value(&updated).expect("serialize should succeed");
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_ignores_deleted_usuarios(pool: PgPool) {
    let empresa = seed_empresa(&pool, "Casas Andes").await;
    let usuario = seed_usuario(&pool, empresa).await;
    let mut conn = pool.acquire().await.expect("acquire should succeed");
    CredencialRepo::insert(&mut conn, empresa, usuario, "ana@casas.example", "hash")
        .await
        .expect("insert should succeed");

    UsuarioRepo::soft_delete(&pool, empresa, usuario)
        .await
        .expect("delete should succeed");

    let login = CredencialRepo::find_login(&pool, "ana@casas.example")
        .await
        .expect("lookup should succeed");
    assert!(login.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn role_names_come_from_live_assignments(pool: PgPool) {
    let empresa = seed_empresa(&pool, "Casas Andes").await;
    let usuario = seed_usuario(&pool, empresa).await;

    sqlx::query(
        "INSERT INTO roles_usuarios (usuario_id, rol_id) \
         SELECT $1, id FROM roles WHERE nombre_rol IN ('super_administrador', 'ejecutivo_ventas')",
    )
    .bind(usuario)
    .execute(&pool)
    .await
    .expect("assignment should succeed");
    sqlx::query(
        "UPDATE roles_usuarios SET deleted_at = NOW() \
         WHERE rol_id = (SELECT id FROM roles WHERE nombre_rol = 'ejecutivo_ventas')",
    )
    .execute(&pool)
    .await
    .expect("revocation should succeed");

    let names = RolRepo::names_for_usuario(&pool, usuario)
        .await
        .expect("lookup should succeed");
    assert_eq!(names, vec!["super_administrador".to_string()]);
}
