//! Handlers for `/estilos`.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::ESTILO;
use prefab_db::models::catalogo::{CreateEstilo, UpdateEstilo};
use prefab_db::repositories::EstiloRepo;

use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

/// POST /administracion/estilos
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateEstilo>,
) -> AppResult<Response> {
    input.validate()?;
    let estilo = EstiloRepo::create(&state.pool, &input).await?;

    tracing::info!(estilo_id = estilo.id, user_id = user.usuario_id, "Estilo created");
    response::created(&ESTILO, &estilo)
}

/// GET /estilos
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let estilos = EstiloRepo::list(&state.pool).await?;
    response::listed(&ESTILO, &estilos)
}

/// GET /estilos/{id}
pub async fn get(State(state): State<AppState>, Ids([id]): Ids<1>) -> AppResult<Response> {
    let estilo = EstiloRepo::find(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(&ESTILO))?;
    response::found(&ESTILO, &estilo)
}

/// PUT /administracion/estilos/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([id]): Ids<1>,
    JsonBody(input): JsonBody<UpdateEstilo>,
) -> AppResult<Response> {
    input.validate()?;
    let estilo = EstiloRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(&ESTILO))?;

    tracing::info!(estilo_id = id, user_id = user.usuario_id, "Estilo updated");
    response::updated(&ESTILO, &estilo)
}

/// DELETE /administracion/estilos/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([id]): Ids<1>,
) -> AppResult<Response> {
    let outcome = EstiloRepo::soft_delete(&state.pool, id).await?;
    tracing::info!(estilo_id = id, user_id = user.usuario_id, ?outcome, "Estilo delete");
    response::deleted(&ESTILO, outcome)
}
