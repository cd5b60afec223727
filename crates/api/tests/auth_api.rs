//! HTTP-level tests for login and the `/administracion` gate.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, get_with_header, post_json};
use prefab_api::auth::jwt::validate_token;
use prefab_core::roles::{ROLE_SALES, ROLE_SUPER_ADMIN};
use sqlx::PgPool;

async fn seed_super_admin(pool: &PgPool) -> i64 {
    let empresa = common::seed_empresa(pool, "Casas Andes").await;
    let usuario = common::seed_usuario(pool, empresa).await;
    common::seed_credential(pool, empresa, usuario, "ana@casas.example", "secreto123").await;
    common::assign_role(pool, usuario, ROLE_SUPER_ADMIN).await;
    usuario
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_with_roles(pool: PgPool) {
    let usuario = seed_super_admin(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ana@casas.example", "password": "secreto123" });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let token = json["token"].as_str().expect("response must contain token");
    let claims = validate_token(token, &common::test_config().jwt).expect("token should validate");
    assert_eq!(claims.usuario_id, usuario);
    assert_eq!(claims.roles, vec![ROLE_SUPER_ADMIN.to_string()]);
    assert_eq!(claims.iss, "miApp");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_and_unknown_email_look_the_same(pool: PgPool) {
    seed_super_admin(&pool).await;
    let app = common::build_test_app(pool);

    let wrong = post_json(
        app.clone(),
        "/login",
        serde_json::json!({ "email": "ana@casas.example", "password": "otra-clave" }),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let wrong = body_json(wrong).await;

    let unknown = post_json(
        app,
        "/login",
        serde_json::json!({ "email": "nadie@casas.example", "password": "secreto123" }),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(wrong, body_json(unknown).await);
    assert_eq!(wrong["error"], "Credenciales inválidas");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_is_refused_once_the_usuario_is_deleted(pool: PgPool) {
    let usuario = seed_super_admin(&pool).await;
    sqlx::query("UPDATE usuarios SET deleted_at = NOW() WHERE id = $1")
        .bind(usuario)
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ana@casas.example", "password": "secreto123" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_tree_distinguishes_token_failures(pool: PgPool) {
    let app = common::build_test_app(pool);

    let missing = get(app.clone(), "/administracion/empresas").await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(missing).await["error"], "No se proporcionó token");

    let malformed = get_with_header(app.clone(), "/administracion/empresas", "Bearer").await;
    assert_eq!(malformed.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(malformed).await["error"], "Token malformado");

    let unsegmented = get_auth(app.clone(), "/administracion/empresas", "sinpuntos").await;
    assert_eq!(unsegmented.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(unsegmented).await["error"], "Token malformado");

    let garbage = get_auth(app, "/administracion/empresas", "not.a.jwt").await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(garbage).await["error"], "Token inválido");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn roles_other_than_super_admin_are_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);

    for token in [common::admin_token(), common::token_with_roles(7, &[ROLE_SALES])] {
        let response = get_auth(app.clone(), "/administracion/empresas", &token).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await["error"],
            "Acceso denegado: Se requiere rol de super_administrador"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn public_reads_need_no_token(pool: PgPool) {
    common::seed_empresa(&pool, "Casas Andes").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/empresas").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_counts_live_rows(pool: PgPool) {
    let empresa = common::seed_empresa(&pool, "Casas Andes").await;
    common::seed_usuario(&pool, empresa).await;
    let gone = common::seed_empresa(&pool, "Casas Cerradas").await;
    sqlx::query("UPDATE empresas SET deleted_at = NOW() WHERE id = $1")
        .bind(gone)
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    for uri in ["/administracion", "/administracion/"] {
        let response = get_auth(app.clone(), uri, &common::super_admin_token()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["empresas"], 1);
        assert_eq!(json["usuarios"], 1);
        assert_eq!(json["prefabricadas"], 0);
    }
}
