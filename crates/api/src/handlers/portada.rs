//! Handlers for `/empresas/{empresa_id}/portadas`.
//!
//! Writes take `multipart/form-data` with a `nombre_portada` text field and
//! an `image` file.

use axum::extract::{Multipart, State};
use axum::response::Response;
use prefab_cloud::folders;
use prefab_core::entity::{EMPRESA, PORTADA};
use prefab_db::models::portada::{validate_portada_fields, CreatePortada, UpdatePortada};
use prefab_db::repositories::PortadaRepo;

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::Ids;
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;
use crate::upload::ImageForm;

/// POST /administracion/empresas/{empresa_id}/portadas
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id]): Ids<1>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = ImageForm::read(multipart).await?;
    let nombre_portada = form.text("nombre_portada");
    form.require_image()?;
    validate_portada_fields(&nombre_portada)?;

    // Don't upload beneath a dead empresa.
    if !PortadaRepo::scope(empresa_id).ancestors_live(&state.pool).await? {
        return Err(not_found(&EMPRESA));
    }
    let image = form
        .store_required(state.storage.as_ref(), folders::PORTADAS)
        .await?;

    let input = CreatePortada {
        nombre_portada,
        image,
    };
    let portada = PortadaRepo::create(&state.pool, empresa_id, &input)
        .await?
        .ok_or_else(|| not_found(&EMPRESA))?;

    tracing::info!(portada_id = portada.id, empresa_id, user_id = user.usuario_id, "Portada created");
    response::created(&PORTADA, &portada)
}

/// GET /empresas/{empresa_id}/portadas
pub async fn list(State(state): State<AppState>, Ids([empresa_id]): Ids<1>) -> AppResult<Response> {
    let rows = PortadaRepo::list(&state.pool, empresa_id).await?;
    let portadas =
        scoped_listing(&state.pool, &PortadaRepo::scope(empresa_id), &EMPRESA, &PORTADA, rows).await?;
    response::listed(&PORTADA, &portadas)
}

/// GET /empresas/{empresa_id}/portadas/{portada_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let portada = PortadaRepo::find(&state.pool, empresa_id, id)
        .await?
        .ok_or_else(|| not_found(&PORTADA))?;
    response::found(&PORTADA, &portada)
}

/// PUT /administracion/empresas/{empresa_id}/portadas/{portada_id}
///
/// The image is replaced only when a new file is sent.
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = ImageForm::read(multipart).await?;
    let nombre_portada = form.text("nombre_portada");
    validate_portada_fields(&nombre_portada)?;

    if PortadaRepo::find(&state.pool, empresa_id, id).await?.is_none() {
        return Err(not_found(&PORTADA));
    }
    let image = form
        .store_optional(state.storage.as_ref(), folders::PORTADAS)
        .await?;

    let input = UpdatePortada {
        nombre_portada,
        image,
    };
    let portada = PortadaRepo::update(&state.pool, empresa_id, id, &input)
        .await?
        .ok_or_else(|| not_found(&PORTADA))?;

    tracing::info!(portada_id = id, empresa_id, user_id = user.usuario_id, "Portada updated");
    response::updated(&PORTADA, &portada)
}

/// DELETE /administracion/empresas/{empresa_id}/portadas/{portada_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let outcome = PortadaRepo::soft_delete(&state.pool, empresa_id, id).await?;
    tracing::info!(portada_id = id, empresa_id, user_id = user.usuario_id, ?outcome, "Portada delete");
    response::deleted(&PORTADA, outcome)
}
