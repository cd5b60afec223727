//! Handlers for `.../prefabricadas/{prefabricada_id}/precios/{precio_id}/incluyes`.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::{INCLUYE, PRECIO};
use prefab_core::types::DbId;
use prefab_db::models::precio::{CreateIncluye, UpdateIncluye};
use prefab_db::repositories::{IncluyeRepo, PrecioPath};

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

fn precio_path([empresa_id, prefabricada_id, precio_id]: [DbId; 3]) -> PrecioPath {
    PrecioPath {
        empresa_id,
        prefabricada_id,
        precio_id,
    }
}

/// POST .../incluyes
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids(ids): Ids<3>,
    JsonBody(input): JsonBody<CreateIncluye>,
) -> AppResult<Response> {
    input.validate()?;
    let path = precio_path(ids);
    let incluye = IncluyeRepo::create(&state.pool, path, &input)
        .await?
        .ok_or_else(|| not_found(&PRECIO))?;

    tracing::info!(incluye_id = incluye.id, precio_id = path.precio_id, user_id = user.usuario_id, "Incluye created");
    response::created(&INCLUYE, &incluye)
}

/// GET .../incluyes
///
/// An empty listing is a 404.
pub async fn list(State(state): State<AppState>, Ids(ids): Ids<3>) -> AppResult<Response> {
    let path = precio_path(ids);
    let rows = IncluyeRepo::list(&state.pool, path).await?;
    let incluyes =
        scoped_listing(&state.pool, &IncluyeRepo::scope(path), &PRECIO, &INCLUYE, rows).await?;
    response::listed(&INCLUYE, &incluyes)
}

/// GET .../incluyes/{incluye_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, precio_id, id]): Ids<4>,
) -> AppResult<Response> {
    let path = precio_path([empresa_id, prefabricada_id, precio_id]);
    let incluye = IncluyeRepo::find(&state.pool, path, id)
        .await?
        .ok_or_else(|| not_found(&INCLUYE))?;
    response::found(&INCLUYE, &incluye)
}

/// PUT .../incluyes/{incluye_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, precio_id, id]): Ids<4>,
    JsonBody(input): JsonBody<UpdateIncluye>,
) -> AppResult<Response> {
    input.validate()?;
    let path = precio_path([empresa_id, prefabricada_id, precio_id]);
    let incluye = IncluyeRepo::update(&state.pool, path, id, &input)
        .await?
        .ok_or_else(|| not_found(&INCLUYE))?;

    tracing::info!(incluye_id = id, precio_id, user_id = user.usuario_id, "Incluye updated");
    response::updated(&INCLUYE, &incluye)
}

/// DELETE .../incluyes/{incluye_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, precio_id, id]): Ids<4>,
) -> AppResult<Response> {
    let path = precio_path([empresa_id, prefabricada_id, precio_id]);
    let outcome = IncluyeRepo::soft_delete(&state.pool, path, id).await?;
    tracing::info!(incluye_id = id, precio_id, user_id = user.usuario_id, ?outcome, "Incluye delete");
    response::deleted(&INCLUYE, outcome)
}
