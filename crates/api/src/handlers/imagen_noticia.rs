//! Handlers for `/empresas/{empresa_id}/noticiasEmpresa/{noticia_id}/imagenesNoticiasEmpresa`.

use axum::extract::{Multipart, State};
use axum::response::Response;
use prefab_cloud::folders;
use prefab_core::entity::{IMAGEN_NOTICIA, NOTICIA};
use prefab_db::repositories::ImagenNoticiaRepo;

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::Ids;
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;
use crate::upload::ImageForm;

/// POST .../imagenesNoticiasEmpresa
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, noticia_id]): Ids<2>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = ImageForm::read(multipart).await?;
    form.require_image()?;

    let scope = ImagenNoticiaRepo::scope(empresa_id, noticia_id);
    if !scope.ancestors_live(&state.pool).await? {
        return Err(not_found(&NOTICIA));
    }
    let image = form
        .store_required(state.storage.as_ref(), folders::NOTICIAS)
        .await?;

    let imagen = ImagenNoticiaRepo::create(&state.pool, empresa_id, noticia_id, &image)
        .await?
        .ok_or_else(|| not_found(&NOTICIA))?;

    tracing::info!(imagen_id = imagen.id, noticia_id, user_id = user.usuario_id, "Imagen noticia created");
    response::created(&IMAGEN_NOTICIA, &imagen)
}

/// GET .../imagenesNoticiasEmpresa
pub async fn list(
    State(state): State<AppState>,
    Ids([empresa_id, noticia_id]): Ids<2>,
) -> AppResult<Response> {
    let rows = ImagenNoticiaRepo::list(&state.pool, empresa_id, noticia_id).await?;
    let scope = ImagenNoticiaRepo::scope(empresa_id, noticia_id);
    let imagenes = scoped_listing(&state.pool, &scope, &NOTICIA, &IMAGEN_NOTICIA, rows).await?;
    response::listed(&IMAGEN_NOTICIA, &imagenes)
}

/// GET .../imagenesNoticiasEmpresa/{imagen_noticia_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, noticia_id, id]): Ids<3>,
) -> AppResult<Response> {
    let imagen = ImagenNoticiaRepo::find(&state.pool, empresa_id, noticia_id, id)
        .await?
        .ok_or_else(|| not_found(&IMAGEN_NOTICIA))?;
    response::found(&IMAGEN_NOTICIA, &imagen)
}

/// PUT .../imagenesNoticiasEmpresa/{imagen_noticia_id}
///
/// Without a new file the row is returned unchanged.
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, noticia_id, id]): Ids<3>,
    multipart: Multipart,
) -> AppResult<Response> {
    let form = ImageForm::read(multipart).await?;
    let current = ImagenNoticiaRepo::find(&state.pool, empresa_id, noticia_id, id)
        .await?
        .ok_or_else(|| not_found(&IMAGEN_NOTICIA))?;

    let Some(image) = form
        .store_optional(state.storage.as_ref(), folders::NOTICIAS)
        .await?
    else {
        return response::updated(&IMAGEN_NOTICIA, &current);
    };

    let imagen = ImagenNoticiaRepo::update(&state.pool, empresa_id, noticia_id, id, &image)
        .await?
        .ok_or_else(|| not_found(&IMAGEN_NOTICIA))?;

    tracing::info!(imagen_id = id, noticia_id, user_id = user.usuario_id, "Imagen noticia updated");
    response::updated(&IMAGEN_NOTICIA, &imagen)
}

/// DELETE .../imagenesNoticiasEmpresa/{imagen_noticia_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, noticia_id, id]): Ids<3>,
) -> AppResult<Response> {
    let outcome = ImagenNoticiaRepo::soft_delete(&state.pool, empresa_id, noticia_id, id).await?;
    tracing::info!(imagen_id = id, noticia_id, user_id = user.usuario_id, ?outcome, "Imagen noticia delete");
    response::deleted(&IMAGEN_NOTICIA, outcome)
}
