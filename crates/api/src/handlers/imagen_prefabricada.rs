//! Handlers for `/empresas/{empresa_id}/prefabricadas/{prefabricada_id}/imagenesPrefabricadas`.

use axum::extract::{Multipart, State};
use axum::response::Response;
use prefab_cloud::folders;
use prefab_core::entity::{IMAGEN_PREFABRICADA, PREFABRICADA};
use prefab_db::repositories::ImagenPrefabricadaRepo;

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::Ids;
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;
use crate::upload::ImageForm;

/// POST .../imagenesPrefabricadas
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id]): Ids<2>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = ImageForm::read(multipart).await?;
    form.require_image()?;

    let scope = ImagenPrefabricadaRepo::scope(empresa_id, prefabricada_id);
    if !scope.ancestors_live(&state.pool).await? {
        return Err(not_found(&PREFABRICADA));
    }
    let image = form
        .store_required(state.storage.as_ref(), folders::PREFABRICADAS)
        .await?;

    let imagen = ImagenPrefabricadaRepo::create(&state.pool, empresa_id, prefabricada_id, &image)
        .await?
        .ok_or_else(|| not_found(&PREFABRICADA))?;

    tracing::info!(imagen_id = imagen.id, prefabricada_id, user_id = user.usuario_id, "Imagen prefabricada created");
    response::created(&IMAGEN_PREFABRICADA, &imagen)
}

/// GET .../imagenesPrefabricadas
pub async fn list(
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id]): Ids<2>,
) -> AppResult<Response> {
    let rows = ImagenPrefabricadaRepo::list(&state.pool, empresa_id, prefabricada_id).await?;
    let scope = ImagenPrefabricadaRepo::scope(empresa_id, prefabricada_id);
    let imagenes =
        scoped_listing(&state.pool, &scope, &PREFABRICADA, &IMAGEN_PREFABRICADA, rows).await?;
    response::listed(&IMAGEN_PREFABRICADA, &imagenes)
}

/// GET .../imagenesPrefabricadas/{imagen_prefabricada_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, id]): Ids<3>,
) -> AppResult<Response> {
    let imagen = ImagenPrefabricadaRepo::find(&state.pool, empresa_id, prefabricada_id, id)
        .await?
        .ok_or_else(|| not_found(&IMAGEN_PREFABRICADA))?;
    response::found(&IMAGEN_PREFABRICADA, &imagen)
}

/// PUT .../imagenesPrefabricadas/{imagen_prefabricada_id}
///
/// Without a new file the row is returned unchanged.
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, id]): Ids<3>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = ImageForm::read(multipart).await?;
    let current = ImagenPrefabricadaRepo::find(&state.pool, empresa_id, prefabricada_id, id)
        .await?
        .ok_or_else(|| not_found(&IMAGEN_PREFABRICADA))?;

    let Some(image) = form
        .store_optional(state.storage.as_ref(), folders::PREFABRICADAS)
        .await?
    else {
        return response::updated(&IMAGEN_PREFABRICADA, &current);
    };

    let imagen =
        ImagenPrefabricadaRepo::update(&state.pool, empresa_id, prefabricada_id, id, &image)
            .await?
            .ok_or_else(|| not_found(&IMAGEN_PREFABRICADA))?;

    tracing::info!(imagen_id = id, prefabricada_id, user_id = user.usuario_id, "Imagen prefabricada updated");
    response::updated(&IMAGEN_PREFABRICADA, &imagen)
}

/// DELETE .../imagenesPrefabricadas/{imagen_prefabricada_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, prefabricada_id, id]): Ids<3>,
) -> AppResult<Response> {
    let outcome =
        ImagenPrefabricadaRepo::soft_delete(&state.pool, empresa_id, prefabricada_id, id).await?;
    tracing::info!(imagen_id = id, prefabricada_id, user_id = user.usuario_id, ?outcome, "Imagen prefabricada delete");
    response::deleted(&IMAGEN_PREFABRICADA, outcome)
}
