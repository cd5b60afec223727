//! Handlers for `/tipos` (structure materials).

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::TIPO;
use prefab_db::models::catalogo::{CreateTipo, UpdateTipo};
use prefab_db::repositories::TipoRepo;

use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

/// POST /administracion/tipos
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTipo>,
) -> AppResult<Response> {
    input.validate()?;
    let tipo = TipoRepo::create(&state.pool, &input).await?;

    tracing::info!(tipo_id = tipo.id, user_id = user.usuario_id, "Tipo created");
    response::created(&TIPO, &tipo)
}

/// GET /tipos
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let tipos = TipoRepo::list(&state.pool).await?;
    response::listed(&TIPO, &tipos)
}

/// GET /tipos/{id}
pub async fn get(State(state): State<AppState>, Ids([id]): Ids<1>) -> AppResult<Response> {
    let tipo = TipoRepo::find(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(&TIPO))?;
    response::found(&TIPO, &tipo)
}

/// PUT /administracion/tipos/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([id]): Ids<1>,
    JsonBody(input): JsonBody<UpdateTipo>,
) -> AppResult<Response> {
    input.validate()?;
    let tipo = TipoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(&TIPO))?;

    tracing::info!(tipo_id = id, user_id = user.usuario_id, "Tipo updated");
    response::updated(&TIPO, &tipo)
}

/// DELETE /administracion/tipos/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([id]): Ids<1>,
) -> AppResult<Response> {
    let outcome = TipoRepo::soft_delete(&state.pool, id).await?;
    tracing::info!(tipo_id = id, user_id = user.usuario_id, ?outcome, "Tipo delete");
    response::deleted(&TIPO, outcome)
}
