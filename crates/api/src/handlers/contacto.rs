//! Handlers for `/empresas/{empresa_id}/usuarios/{usuario_id}/contactos`.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::{CONTACTO, USUARIO};
use prefab_db::models::usuario::{CreateContacto, UpdateContacto};
use prefab_db::repositories::ContactoRepo;

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::ensure_self_or_super_admin;
use crate::response;
use crate::state::AppState;

/// POST .../contactos
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, usuario_id]): Ids<2>,
    JsonBody(input): JsonBody<CreateContacto>,
) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, usuario_id)?;
    input.validate()?;

    let contacto = ContactoRepo::create(&state.pool, empresa_id, usuario_id, &input)
        .await?
        .ok_or_else(|| not_found(&USUARIO))?;

    tracing::info!(contacto_id = contacto.id, usuario_id, user_id = user.usuario_id, "Contacto created");
    response::created(&CONTACTO, &contacto)
}

/// GET .../contactos
///
/// An empty listing is a 404.
pub async fn list(
    State(state): State<AppState>,
    Ids([empresa_id, usuario_id]): Ids<2>,
) -> AppResult<Response> {
    let rows = ContactoRepo::list(&state.pool, empresa_id, usuario_id).await?;
    let scope = ContactoRepo::scope(empresa_id, usuario_id);
    let contactos = scoped_listing(&state.pool, &scope, &USUARIO, &CONTACTO, rows).await?;
    response::listed(&CONTACTO, &contactos)
}

/// GET .../contactos/{contacto_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, usuario_id, id]): Ids<3>,
) -> AppResult<Response> {
    let contacto = ContactoRepo::find(&state.pool, empresa_id, usuario_id, id)
        .await?
        .ok_or_else(|| not_found(&CONTACTO))?;
    response::found(&CONTACTO, &contacto)
}

/// Admin-tree reads of a usuario's contactos are limited to that usuario
/// or a super administrator.
pub async fn admin_list(user: AuthUser, state: State<AppState>, ids: Ids<2>) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, ids.0[1])?;
    list(state, ids).await
}

pub async fn admin_get(user: AuthUser, state: State<AppState>, ids: Ids<3>) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, ids.0[1])?;
    get(state, ids).await
}

/// PUT .../contactos/{contacto_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, usuario_id, id]): Ids<3>,
    JsonBody(input): JsonBody<UpdateContacto>,
) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, usuario_id)?;
    input.validate()?;

    let contacto = ContactoRepo::update(&state.pool, empresa_id, usuario_id, id, &input)
        .await?
        .ok_or_else(|| not_found(&CONTACTO))?;

    tracing::info!(contacto_id = id, usuario_id, user_id = user.usuario_id, "Contacto updated");
    response::updated(&CONTACTO, &contacto)
}

/// DELETE .../contactos/{contacto_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, usuario_id, id]): Ids<3>,
) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, usuario_id)?;

    let outcome = ContactoRepo::soft_delete(&state.pool, empresa_id, usuario_id, id).await?;
    tracing::info!(contacto_id = id, usuario_id, user_id = user.usuario_id, ?outcome, "Contacto delete");
    response::deleted(&CONTACTO, outcome)
}
