//! Shared harness for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use prefab_api::auth::jwt::{generate_access_token, JwtConfig};
use prefab_api::auth::password::hash_password;
use prefab_api::config::ServerConfig;
use prefab_api::router::build_app;
use prefab_api::state::AppState;
use prefab_cloud::MemoryStorage;
use prefab_core::roles::{RoleSet, ROLE_ADMIN, ROLE_SUPER_ADMIN};
use prefab_db::models::empresa::CreateEmpresa;
use prefab_db::models::rol::CreateRolUsuario;
use prefab_db::models::usuario::{CreateUsuario, UsuarioFields};
use prefab_db::repositories::{CredencialRepo, EmpresaRepo, RolUsuarioRepo, UsuarioRepo};
use prefab_events::MemoryNotifier;

pub type App = NormalizePath<Router>;

pub const FRONTEND_URL: &str = "http://localhost:5173";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![FRONTEND_URL.to_string()],
        request_timeout_secs: 30,
        frontend_url: FRONTEND_URL.to_string(),
        db_connect_attempts: 1,
        db_connect_backoff_secs: 0,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            expiry_hours: 1,
            issuer: "miApp".to_string(),
        },
    }
}

/// The production middleware stack over in-memory storage and email.
pub fn build_test_app(pool: PgPool) -> App {
    build_test_app_with(pool, Arc::new(MemoryStorage::new()), Arc::new(MemoryNotifier::new()))
}

pub fn build_test_app_with(
    pool: PgPool,
    storage: Arc<MemoryStorage>,
    notifier: Arc<MemoryNotifier>,
) -> App {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
        notifier,
    };
    build_app(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn token_with_roles(usuario_id: i64, roles: &[&str]) -> String {
    generate_access_token(usuario_id, &RoleSet::new(roles.iter().copied()), &test_config().jwt)
        .expect("token generation should succeed")
}

pub fn super_admin_token() -> String {
    token_with_roles(1, &[ROLE_SUPER_ADMIN])
}

pub fn admin_token() -> String {
    token_with_roles(1, &[ROLE_ADMIN])
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: App, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    builder(method, uri, token)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub async fn get(app: App, uri: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: App, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn get_with_header(app: App, uri: &str, authorization: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: App, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(app: App, uri: &str, token: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json_auth(app: App, uri: &str, token: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn delete_auth(app: App, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::DELETE, uri, Some(token)).body(Body::empty()).unwrap()).await
}

const BOUNDARY: &str = "prefab-test-boundary";

/// POST a `multipart/form-data` body of text fields and an optional `image`.
pub async fn post_multipart_auth(
    app: App,
    uri: &str,
    token: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> Response<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = builder(Method::POST, uri, Some(token))
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Seeds
// ---------------------------------------------------------------------------

pub async fn seed_empresa(pool: &PgPool, nombre: &str) -> i64 {
    let input = CreateEmpresa {
        nombre_empresa: nombre.to_string(),
        celular_empresa: "+56 9 5555 0000".to_string(),
        email_empresa: "contacto@casas.example".to_string(),
        ..Default::default()
    };
    EmpresaRepo::create(pool, &input)
        .await
        .expect("empresa insert should succeed")
        .id
}

pub async fn seed_usuario(pool: &PgPool, empresa_id: i64) -> i64 {
    let input = CreateUsuario {
        fields: UsuarioFields {
            primer_nombre: "Ana".into(),
            primer_apellido: "Rojas".into(),
            ..Default::default()
        },
        image: "memory://uploads/imagenes_usuarios/ana.png".into(),
    };
    UsuarioRepo::create(pool, empresa_id, &input)
        .await
        .expect("usuario insert should succeed")
        .expect("empresa should be live")
        .id
}

/// Give a usuario a login.
pub async fn seed_credential(pool: &PgPool, empresa_id: i64, usuario_id: i64, email: &str, password: &str) {
    let hash = hash_password(password).expect("hashing should succeed");
    let mut conn = pool.acquire().await.expect("acquire should succeed");
    CredencialRepo::insert(&mut conn, empresa_id, usuario_id, email, &hash)
        .await
        .expect("credential insert should succeed")
        .expect("chain should be live");
}

pub async fn assign_role(pool: &PgPool, usuario_id: i64, nombre_rol: &str) {
    let (rol_id,): (i64,) = sqlx::query_as("SELECT id FROM roles WHERE nombre_rol = $1")
        .bind(nombre_rol)
        .fetch_one(pool)
        .await
        .expect("seeded role should exist");
    RolUsuarioRepo::create(pool, rol_id, &CreateRolUsuario { usuario_id })
        .await
        .expect("assignment insert should succeed")
        .expect("rol should be live");
}
