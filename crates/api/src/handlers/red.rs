//! Handlers for `/empresas/{empresa_id}/redes`.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::{EMPRESA, RED};
use prefab_db::models::red::{CreateRed, UpdateRed};
use prefab_db::repositories::RedRepo;

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

/// POST /administracion/empresas/{empresa_id}/redes
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id]): Ids<1>,
    JsonBody(input): JsonBody<CreateRed>,
) -> AppResult<Response> {
    input.validate()?;
    let red = RedRepo::create(&state.pool, empresa_id, &input)
        .await?
        .ok_or_else(|| not_found(&EMPRESA))?;

    tracing::info!(red_id = red.id, empresa_id, user_id = user.usuario_id, "Red created");
    response::created(&RED, &red)
}

/// GET /empresas/{empresa_id}/redes
pub async fn list(State(state): State<AppState>, Ids([empresa_id]): Ids<1>) -> AppResult<Response> {
    let rows = RedRepo::list(&state.pool, empresa_id).await?;
    let redes = scoped_listing(&state.pool, &RedRepo::scope(empresa_id), &EMPRESA, &RED, rows).await?;
    response::listed(&RED, &redes)
}

/// GET /empresas/{empresa_id}/redes/{red_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let red = RedRepo::find(&state.pool, empresa_id, id)
        .await?
        .ok_or_else(|| not_found(&RED))?;
    response::found(&RED, &red)
}

/// PUT /administracion/empresas/{empresa_id}/redes/{red_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
    JsonBody(input): JsonBody<UpdateRed>,
) -> AppResult<Response> {
    input.validate()?;
    let red = RedRepo::update(&state.pool, empresa_id, id, &input)
        .await?
        .ok_or_else(|| not_found(&RED))?;

    tracing::info!(red_id = id, empresa_id, user_id = user.usuario_id, "Red updated");
    response::updated(&RED, &red)
}

/// DELETE /administracion/empresas/{empresa_id}/redes/{red_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let outcome = RedRepo::soft_delete(&state.pool, empresa_id, id).await?;
    tracing::info!(red_id = id, empresa_id, user_id = user.usuario_id, ?outcome, "Red delete");
    response::deleted(&RED, outcome)
}
