//! Handlers for `/empresas/{empresa_id}/usuarios`.
//!
//! Writes take `multipart/form-data`: the name fields as text plus an
//! optional-on-update `image`.

use axum::extract::{Multipart, State};
use axum::response::Response;
use prefab_cloud::folders;
use prefab_core::entity::{EMPRESA, USUARIO};
use prefab_db::models::usuario::{CreateUsuario, UpdateUsuario, UsuarioFields};
use prefab_db::repositories::UsuarioRepo;

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::Ids;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::ensure_self_or_super_admin;
use crate::response;
use crate::state::AppState;
use crate::upload::ImageForm;

fn usuario_fields(form: &ImageForm) -> UsuarioFields {
    UsuarioFields {
        primer_nombre: form.text("primer_nombre"),
        segundo_nombre: form.text("segundo_nombre"),
        primer_apellido: form.text("primer_apellido"),
        segundo_apellido: form.text("segundo_apellido"),
    }
}

/// POST /administracion/empresas/{empresa_id}/usuarios
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id]): Ids<1>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = ImageForm::read(multipart).await?;
    let fields = usuario_fields(&form);
    form.require_image()?;
    fields.validate()?;

    if !UsuarioRepo::scope(empresa_id).ancestors_live(&state.pool).await? {
        return Err(not_found(&EMPRESA));
    }
    let image = form
        .store_required(state.storage.as_ref(), folders::USUARIOS)
        .await?;

    let input = CreateUsuario { fields, image };
    let usuario = UsuarioRepo::create(&state.pool, empresa_id, &input)
        .await?
        .ok_or_else(|| not_found(&EMPRESA))?;

    tracing::info!(usuario_id = usuario.id, empresa_id, user_id = user.usuario_id, "Usuario created");
    response::created(&USUARIO, &usuario)
}

/// GET /empresas/{empresa_id}/usuarios
///
/// An empty listing is a 404.
pub async fn list(State(state): State<AppState>, Ids([empresa_id]): Ids<1>) -> AppResult<Response> {
    let rows = UsuarioRepo::list(&state.pool, empresa_id).await?;
    let usuarios =
        scoped_listing(&state.pool, &UsuarioRepo::scope(empresa_id), &EMPRESA, &USUARIO, rows).await?;
    response::listed(&USUARIO, &usuarios)
}

/// GET /empresas/{empresa_id}/usuarios/{usuario_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let usuario = UsuarioRepo::find(&state.pool, empresa_id, id)
        .await?
        .ok_or_else(|| not_found(&USUARIO))?;
    response::found(&USUARIO, &usuario)
}

/// GET /administracion/empresas/{empresa_id}/usuarios/{usuario_id}
pub async fn admin_get(
    user: AuthUser,
    state: State<AppState>,
    ids: Ids<2>,
) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, ids.0[1])?;
    get(state, ids).await
}

/// PUT /administracion/empresas/{empresa_id}/usuarios/{usuario_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
    multipart: Multipart,
) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, id)?;

    let form = ImageForm::read(multipart).await?;
    let fields = usuario_fields(&form);
    fields.validate()?;

    if UsuarioRepo::find(&state.pool, empresa_id, id).await?.is_none() {
        return Err(not_found(&USUARIO));
    }
    let image = form
        .store_optional(state.storage.as_ref(), folders::USUARIOS)
        .await?;

    let input = UpdateUsuario { fields, image };
    let usuario = UsuarioRepo::update(&state.pool, empresa_id, id, &input)
        .await?
        .ok_or_else(|| not_found(&USUARIO))?;

    tracing::info!(usuario_id = id, empresa_id, user_id = user.usuario_id, "Usuario updated");
    response::updated(&USUARIO, &usuario)
}

/// DELETE /administracion/empresas/{empresa_id}/usuarios/{usuario_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, id)?;

    let outcome = UsuarioRepo::soft_delete(&state.pool, empresa_id, id).await?;
    tracing::info!(usuario_id = id, empresa_id, user_id = user.usuario_id, ?outcome, "Usuario delete");
    response::deleted(&USUARIO, outcome)
}
