//! Password recovery over HTTP: request, email link, redemption.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use common::{body_json, post_json};
use prefab_cloud::MemoryStorage;
use prefab_events::{MemoryNotifier, RecoveryEmail};
use sqlx::PgPool;

const EMAIL: &str = "ana@casas.example";

async fn seed_login(pool: &PgPool) {
    let empresa = common::seed_empresa(pool, "Casas Andes").await;
    let usuario = common::seed_usuario(pool, empresa).await;
    common::seed_credential(pool, empresa, usuario, EMAIL, "secreto123").await;
}

fn app_with(pool: PgPool) -> (common::App, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    let app = common::build_test_app_with(pool, Arc::new(MemoryStorage::new()), notifier.clone());
    (app, notifier)
}

/// The email goes out on a detached task.
async fn wait_for_email(notifier: &MemoryNotifier) -> RecoveryEmail {
    for _ in 0..100 {
        if let Some(email) = notifier.sent().into_iter().next() {
            return email;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("no recovery email was sent");
}

fn token_from(link: &str) -> String {
    link.rsplit('/').next().expect("link should end in the token").to_string()
}

async fn request_link(app: common::App, notifier: &MemoryNotifier) -> String {
    let response = post_json(app, "/password-recovery", serde_json::json!({ "email": EMAIL })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let email = wait_for_email(notifier).await;
    assert_eq!(email.to, EMAIL);
    assert!(email.link.starts_with(&format!("{}/reset-password/", common::FRONTEND_URL)));
    token_from(&email.link)
}

fn reset_body(token: &str, clave: &str) -> serde_json::Value {
    serde_json::json!({ "token": token, "nueva_clave": clave, "confirm_clave": clave })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn known_and_unknown_emails_get_the_same_answer(pool: PgPool) {
    seed_login(&pool).await;
    let (app, notifier) = app_with(pool);

    let known = post_json(app.clone(), "/password-recovery", serde_json::json!({ "email": EMAIL })).await;
    let unknown = post_json(
        app,
        "/password-recovery",
        serde_json::json!({ "email": "nadie@casas.example" }),
    )
    .await;

    assert_eq!(known.status(), StatusCode::OK);
    assert_eq!(unknown.status(), StatusCode::OK);
    assert_eq!(body_json(known).await, body_json(unknown).await);

    wait_for_email(&notifier).await;
    assert_eq!(notifier.sent().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_email_is_rejected(pool: PgPool) {
    let (app, _) = app_with(pool);

    let response = post_json(app, "/password-recovery", serde_json::json!({ "email": "no-arroba" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn token_resets_the_password_exactly_once(pool: PgPool) {
    seed_login(&pool).await;
    let (app, notifier) = app_with(pool);
    let token = request_link(app.clone(), &notifier).await;

    let first = post_json(app.clone(), "/reset-password", reset_body(&token, "nuevaClave99")).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["message"], "Contraseña actualizada correctamente");

    let second = post_json(app.clone(), "/reset-password", reset_body(&token, "otraClave99")).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(second).await["error"], "Token inválido");

    let old = post_json(
        app.clone(),
        "/login",
        serde_json::json!({ "email": EMAIL, "password": "secreto123" }),
    )
    .await;
    assert_eq!(old.status(), StatusCode::UNAUTHORIZED);

    let new = post_json(app, "/login", serde_json::json!({ "email": EMAIL, "password": "nuevaClave99" })).await;
    assert_eq!(new.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_token_is_refused_and_kept(pool: PgPool) {
    seed_login(&pool).await;
    let (app, notifier) = app_with(pool.clone());
    let token = request_link(app.clone(), &notifier).await;

    sqlx::query("UPDATE recuperaciones SET expires_at = NOW() - INTERVAL '1 minute'")
        .execute(&pool)
        .await
        .unwrap();

    let response = post_json(app, "/reset-password", reset_body(&token, "nuevaClave99")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "El token ha expirado");

    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recuperaciones")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mismatched_confirmation_is_a_400(pool: PgPool) {
    let (app, _) = app_with(pool);

    let body = serde_json::json!({
        "token": "whatever",
        "nueva_clave": "nuevaClave99",
        "confirm_clave": "nuevaClave98",
    });
    let response = post_json(app, "/reset-password", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Las contraseñas no coinciden");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn plaintext_token_is_never_stored(pool: PgPool) {
    seed_login(&pool).await;
    let (app, notifier) = app_with(pool.clone());
    let token = request_link(app, &notifier).await;

    let (stored,): (String,) = sqlx::query_as("SELECT token_hash FROM recuperaciones")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(stored, token);
    assert_eq!(stored, prefab_core::recovery::hash_token(&token));
}
