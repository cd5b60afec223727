//! Handlers for `/empresas/{empresa_id}/prefabricadas/{prefabricada_id}/precios`.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::{PRECIO, PREFABRICADA};
use prefab_db::models::precio::{CreatePrecio, UpdatePrecio};
use prefab_db::repositories::PrecioRepo;

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

/// POST .../precios
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id]): Ids<2>,
    JsonBody(input): JsonBody<CreatePrecio>,
) -> AppResult<Response> {
    input.validate()?;
    let precio = PrecioRepo::create(&state.pool, empresa_id, prefabricada_id, &input)
        .await?
        .ok_or_else(|| not_found(&PREFABRICADA))?;

    tracing::info!(precio_id = precio.id, prefabricada_id, user_id = user.usuario_id, "Precio created");
    response::created(&PRECIO, &precio)
}

/// GET .../precios
pub async fn list(
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id]): Ids<2>,
) -> AppResult<Response> {
    let rows = PrecioRepo::list(&state.pool, empresa_id, prefabricada_id).await?;
    let scope = PrecioRepo::scope(empresa_id, prefabricada_id);
    let precios = scoped_listing(&state.pool, &scope, &PREFABRICADA, &PRECIO, rows).await?;
    response::listed(&PRECIO, &precios)
}

/// GET .../precios/{precio_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, id]): Ids<3>,
) -> AppResult<Response> {
    let precio = PrecioRepo::find(&state.pool, empresa_id, prefabricada_id, id)
        .await?
        .ok_or_else(|| not_found(&PRECIO))?;
    response::found(&PRECIO, &precio)
}

/// PUT .../precios/{precio_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, id]): Ids<3>,
    JsonBody(input): JsonBody<UpdatePrecio>,
) -> AppResult<Response> {
    input.validate()?;
    let precio = PrecioRepo::update(&state.pool, empresa_id, prefabricada_id, id, &input)
        .await?
        .ok_or_else(|| not_found(&PRECIO))?;

    tracing::info!(precio_id = id, prefabricada_id, user_id = user.usuario_id, "Precio updated");
    response::updated(&PRECIO, &precio)
}

/// DELETE .../precios/{precio_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, id]): Ids<3>,
) -> AppResult<Response> {
    let outcome = PrecioRepo::soft_delete(&state.pool, empresa_id, prefabricada_id, id).await?;
    tracing::info!(precio_id = id, prefabricada_id, user_id = user.usuario_id, ?outcome, "Precio delete");
    response::deleted(&PRECIO, outcome)
}
