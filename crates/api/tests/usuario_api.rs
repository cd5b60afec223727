//! Usuario uploads, contactos and credenciales through the admin tree.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth, post_multipart_auth, put_json_auth};
use prefab_cloud::MemoryStorage;
use prefab_events::MemoryNotifier;
use sqlx::PgPool;

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

const NAME_FIELDS: &[(&str, &str)] = &[("primer_nombre", "Ana"), ("primer_apellido", "Rojas")];

#[sqlx::test(migrations = "../../db/migrations")]
async fn usuario_create_requires_an_image(pool: PgPool) {
    let empresa = common::seed_empresa(&pool, "Casas Andes").await;
    let app = common::build_test_app(pool);

    let response = post_multipart_auth(
        app,
        &format!("/administracion/empresas/{empresa}/usuarios"),
        &common::super_admin_token(),
        NAME_FIELDS,
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "La imagen es obligatoria");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn usuario_create_uploads_under_its_folder(pool: PgPool) {
    let empresa = common::seed_empresa(&pool, "Casas Andes").await;
    let storage = Arc::new(MemoryStorage::new());
    let app = common::build_test_app_with(pool, storage.clone(), Arc::new(MemoryNotifier::new()));

    let response = post_multipart_auth(
        app.clone(),
        &format!("/administracion/empresas/{empresa}/usuarios"),
        &common::super_admin_token(),
        NAME_FIELDS,
        Some(("ana perfil.png", PNG)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Usuario creado con éxito");
    let image = json["usuario"]["image"].as_str().unwrap();
    assert!(image.starts_with("memory://uploads/imagenes_usuarios/"), "got: {image}");
    assert_eq!(storage.get(image).as_deref(), Some(PNG));

    let listed = body_json(get(app, &format!("/empresas/{empresa}/usuarios")).await).await;
    assert_eq!(listed["usuarios"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn usuario_create_under_a_dead_empresa_uploads_nothing(pool: PgPool) {
    let empresa = common::seed_empresa(&pool, "Casas Andes").await;
    sqlx::query("UPDATE empresas SET deleted_at = NOW() WHERE id = $1")
        .bind(empresa)
        .execute(&pool)
        .await
        .unwrap();
    let storage = Arc::new(MemoryStorage::new());
    let app = common::build_test_app_with(pool, storage.clone(), Arc::new(MemoryNotifier::new()));

    let response = post_multipart_auth(
        app,
        &format!("/administracion/empresas/{empresa}/usuarios"),
        &common::super_admin_token(),
        NAME_FIELDS,
        Some(("ana.png", PNG)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(storage.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contactos_listing_and_create(pool: PgPool) {
    let empresa = common::seed_empresa(&pool, "Casas Andes").await;
    let usuario = common::seed_usuario(&pool, empresa).await;
    let app = common::build_test_app(pool);
    let uri = format!("/empresas/{empresa}/usuarios/{usuario}/contactos");

    let empty = get(app.clone(), &uri).await;
    assert_eq!(empty.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(empty).await["error"], "Datos de Contacto no encontrados");

    let created = post_json_auth(
        app.clone(),
        &format!("/administracion{uri}"),
        &common::super_admin_token(),
        serde_json::json!({
            "email_laboral": "ana@casas.example",
            "celular_laboral": "+56 9 1111 2222",
            "direccion_laboral": "Av. Central 123",
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let listed = body_json(get(app, &uri).await).await;
    assert_eq!(listed["contactos"][0]["email_laboral"], "ana@casas.example");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_reads_of_usuario_data_need_a_token(pool: PgPool) {
    let empresa = common::seed_empresa(&pool, "Casas Andes").await;
    let usuario = common::seed_usuario(&pool, empresa).await;
    let app = common::build_test_app(pool);
    let uri = format!("/empresas/{empresa}/usuarios/{usuario}");
    let token = common::super_admin_token();

    post_json_auth(
        app.clone(),
        &format!("/administracion{uri}/contactos"),
        &token,
        serde_json::json!({
            "email_laboral": "ana@casas.example",
            "celular_laboral": "+56 9 1111 2222",
            "direccion_laboral": "Av. Central 123",
        }),
    )
    .await;

    for path in [uri.clone(), format!("{uri}/contactos")] {
        let public = get(app.clone(), &path).await;
        assert_eq!(public.status(), StatusCode::OK, "public {path}");

        let anonymous = get(app.clone(), &format!("/administracion{path}")).await;
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED, "anonymous {path}");

        let super_admin = get_auth(app.clone(), &format!("/administracion{path}"), &token).await;
        assert_eq!(super_admin.status(), StatusCode::OK, "super admin {path}");
    }

    let listed = body_json(get_auth(app, &format!("/administracion{uri}/contactos"), &token).await).await;
    assert_eq!(listed["contactos"][0]["email_laboral"], "ana@casas.example");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn credential_is_created_once_and_never_exposes_the_hash(pool: PgPool) {
    let empresa = common::seed_empresa(&pool, "Casas Andes").await;
    let usuario = common::seed_usuario(&pool, empresa).await;
    let app = common::build_test_app(pool);
    let token = common::super_admin_token();
    let uri = format!("/administracion/empresas/{empresa}/usuarios/{usuario}/credenciales");
    let body = serde_json::json!({ "email": "ana@casas.example", "password": "secreto123" });

    let created = post_json_auth(app.clone(), &uri, &token, body.clone()).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let json = body_json(created).await;
    assert_eq!(json["message"], "Credenciales de acceso creadas con éxito");
    assert!(json["credencial"].get("password_hash").is_none());
    assert!(json["credencial"].get("password").is_none());
    let credencial = json["credencial"]["id"].as_i64().unwrap();

    let again = post_json_auth(app.clone(), &uri, &token, body).await;
    assert_eq!(again.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(again).await["error"],
        "El Usuario ya cuenta con credenciales de acceso"
    );

    let shown = body_json(get_auth(app.clone(), &uri, &token).await).await;
    assert_eq!(shown["credencial"]["email"], "ana@casas.example");

    let updated = put_json_auth(
        app.clone(),
        &format!("{uri}/{credencial}"),
        &token,
        serde_json::json!({ "email": "ana.rojas@casas.example" }),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    let login = post_json(
        app,
        "/login",
        serde_json::json!({ "email": "ana.rojas@casas.example", "password": "secreto123" }),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn credential_create_under_another_empresa_is_not_found(pool: PgPool) {
    let andes = common::seed_empresa(&pool, "Casas Andes").await;
    let sur = common::seed_empresa(&pool, "Casas Sur").await;
    let usuario_sur = common::seed_usuario(&pool, sur).await;
    common::seed_credential(&pool, sur, usuario_sur, "luis@sur.example", "secreto123").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        &format!("/administracion/empresas/{andes}/usuarios/{usuario_sur}/credenciales"),
        &common::super_admin_token(),
        serde_json::json!({ "email": "otro@andes.example", "password": "secreto456" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Usuario no encontrado");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_across_usuarios_is_a_conflict(pool: PgPool) {
    let empresa = common::seed_empresa(&pool, "Casas Andes").await;
    let ana = common::seed_usuario(&pool, empresa).await;
    let otro = common::seed_usuario(&pool, empresa).await;
    common::seed_credential(&pool, empresa, ana, "ana@casas.example", "secreto123").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        &format!("/administracion/empresas/{empresa}/usuarios/{otro}/credenciales"),
        &common::super_admin_token(),
        serde_json::json!({ "email": "ana@casas.example", "password": "secreto456" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "El email ya se encuentra registrado");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn credenciales_are_not_public(pool: PgPool) {
    let empresa = common::seed_empresa(&pool, "Casas Andes").await;
    let usuario = common::seed_usuario(&pool, empresa).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/empresas/{empresa}/usuarios/{usuario}/credenciales")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
