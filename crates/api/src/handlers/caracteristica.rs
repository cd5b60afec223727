//! Handlers for `/empresas/{empresa_id}/prefabricadas/{prefabricada_id}/caracteristicas`.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::{CARACTERISTICA, PREFABRICADA};
use prefab_db::models::prefabricada::{CreateCaracteristica, UpdateCaracteristica};
use prefab_db::repositories::CaracteristicaRepo;

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

/// POST .../caracteristicas
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id]): Ids<2>,
    JsonBody(input): JsonBody<CreateCaracteristica>,
) -> AppResult<Response> {
    input.validate()?;
    let caracteristica =
        CaracteristicaRepo::create(&state.pool, empresa_id, prefabricada_id, &input)
            .await?
            .ok_or_else(|| not_found(&PREFABRICADA))?;

    tracing::info!(
        caracteristica_id = caracteristica.id,
        prefabricada_id,
        user_id = user.usuario_id,
        "Caracteristica created",
    );
    response::created(&CARACTERISTICA, &caracteristica)
}

/// GET .../caracteristicas
pub async fn list(
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id]): Ids<2>,
) -> AppResult<Response> {
    let rows = CaracteristicaRepo::list(&state.pool, empresa_id, prefabricada_id).await?;
    let scope = CaracteristicaRepo::scope(empresa_id, prefabricada_id);
    let caracteristicas =
        scoped_listing(&state.pool, &scope, &PREFABRICADA, &CARACTERISTICA, rows).await?;
    response::listed(&CARACTERISTICA, &caracteristicas)
}

/// GET .../caracteristicas/{caracteristica_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, id]): Ids<3>,
) -> AppResult<Response> {
    let caracteristica = CaracteristicaRepo::find(&state.pool, empresa_id, prefabricada_id, id)
        .await?
        .ok_or_else(|| not_found(&CARACTERISTICA))?;
    response::found(&CARACTERISTICA, &caracteristica)
}

/// PUT .../caracteristicas/{caracteristica_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, id]): Ids<3>,
    JsonBody(input): JsonBody<UpdateCaracteristica>,
) -> AppResult<Response> {
    input.validate()?;
    let caracteristica =
        CaracteristicaRepo::update(&state.pool, empresa_id, prefabricada_id, id, &input)
            .await?
            .ok_or_else(|| not_found(&CARACTERISTICA))?;

    tracing::info!(caracteristica_id = id, prefabricada_id, user_id = user.usuario_id, "Caracteristica updated");
    response::updated(&CARACTERISTICA, &caracteristica)
}

/// DELETE .../caracteristicas/{caracteristica_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, id]): Ids<3>,
) -> AppResult<Response> {
    let outcome =
        CaracteristicaRepo::soft_delete(&state.pool, empresa_id, prefabricada_id, id).await?;
    tracing::info!(caracteristica_id = id, prefabricada_id, user_id = user.usuario_id, ?outcome, "Caracteristica delete");
    response::deleted(&CARACTERISTICA, outcome)
}
