//! Handlers for `/empresas/{empresa_id}/servicios`.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::{EMPRESA, SERVICIO};
use prefab_db::models::servicio::{CreateServicio, UpdateServicio};
use prefab_db::repositories::ServicioRepo;

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

/// POST /administracion/empresas/{empresa_id}/servicios
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id]): Ids<1>,
    JsonBody(input): JsonBody<CreateServicio>,
) -> AppResult<Response> {
    input.validate()?;
    let servicio = ServicioRepo::create(&state.pool, empresa_id, &input)
        .await?
        .ok_or_else(|| not_found(&EMPRESA))?;

    tracing::info!(servicio_id = servicio.id, empresa_id, user_id = user.usuario_id, "Servicio created");
    response::created(&SERVICIO, &servicio)
}

/// GET /empresas/{empresa_id}/servicios
pub async fn list(State(state): State<AppState>, Ids([empresa_id]): Ids<1>) -> AppResult<Response> {
    let rows = ServicioRepo::list(&state.pool, empresa_id).await?;
    let scope = ServicioRepo::scope(empresa_id);
    let servicios = scoped_listing(&state.pool, &scope, &EMPRESA, &SERVICIO, rows).await?;
    response::listed(&SERVICIO, &servicios)
}

/// GET /empresas/{empresa_id}/servicios/{servicio_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let servicio = ServicioRepo::find(&state.pool, empresa_id, id)
        .await?
        .ok_or_else(|| not_found(&SERVICIO))?;
    response::found(&SERVICIO, &servicio)
}

/// PUT /administracion/empresas/{empresa_id}/servicios/{servicio_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
    JsonBody(input): JsonBody<UpdateServicio>,
) -> AppResult<Response> {
    input.validate()?;
    let servicio = ServicioRepo::update(&state.pool, empresa_id, id, &input)
        .await?
        .ok_or_else(|| not_found(&SERVICIO))?;

    tracing::info!(servicio_id = id, empresa_id, user_id = user.usuario_id, "Servicio updated");
    response::updated(&SERVICIO, &servicio)
}

/// DELETE /administracion/empresas/{empresa_id}/servicios/{servicio_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let outcome = ServicioRepo::soft_delete(&state.pool, empresa_id, id).await?;
    tracing::info!(servicio_id = id, empresa_id, user_id = user.usuario_id, ?outcome, "Servicio delete");
    response::deleted(&SERVICIO, outcome)
}
