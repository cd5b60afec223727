//! Handlers for `/empresas/{empresa_id}/noticiasEmpresa`.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use prefab_core::entity::{EMPRESA, NOTICIA};
use prefab_db::models::noticia::{CreateNoticia, UpdateNoticia};
use prefab_db::repositories::NoticiaRepo;

use super::scoped_listing;
use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response;
use crate::state::AppState;

/// POST /administracion/empresas/{empresa_id}/noticiasEmpresa
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id]): Ids<1>,
    JsonBody(input): JsonBody<CreateNoticia>,
) -> AppResult<Response> {
    input.validate()?;
    let noticia = NoticiaRepo::create(&state.pool, empresa_id, &input)
        .await?
        .ok_or_else(|| not_found(&EMPRESA))?;

    tracing::info!(noticia_id = noticia.id, empresa_id, user_id = user.usuario_id, "Noticia created");
    response::created(&NOTICIA, &noticia)
}

/// GET /empresas/{empresa_id}/noticiasEmpresa?page=&limit=
///
/// Newest first. Responds `{noticias, pagination: {page, limit, total}}`;
/// an empty page is a 404.
pub async fn list(
    State(state): State<AppState>,
    Ids([empresa_id]): Ids<1>,
    Query(params): Query<PageParams>,
) -> AppResult<Response> {
    let mut page = NoticiaRepo::list_page(&state.pool, empresa_id, params.page()).await?;
    let scope = NoticiaRepo::scope(empresa_id);
    page.noticias = scoped_listing(&state.pool, &scope, &EMPRESA, &NOTICIA, page.noticias).await?;
    Ok(Json(page).into_response())
}

/// GET /empresas/{empresa_id}/noticiasEmpresa/{noticia_id}
///
/// Embeds the noticia's live images.
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let noticia = NoticiaRepo::find_detail(&state.pool, empresa_id, id)
        .await?
        .ok_or_else(|| not_found(&NOTICIA))?;
    response::found(&NOTICIA, &noticia)
}

/// PUT /administracion/empresas/{empresa_id}/noticiasEmpresa/{noticia_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
    JsonBody(input): JsonBody<UpdateNoticia>,
) -> AppResult<Response> {
    input.validate()?;
    let noticia = NoticiaRepo::update(&state.pool, empresa_id, id, &input)
        .await?
        .ok_or_else(|| not_found(&NOTICIA))?;

    tracing::info!(noticia_id = id, empresa_id, user_id = user.usuario_id, "Noticia updated");
    response::updated(&NOTICIA, &noticia)
}

/// DELETE /administracion/empresas/{empresa_id}/noticiasEmpresa/{noticia_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let outcome = NoticiaRepo::soft_delete(&state.pool, empresa_id, id).await?;
    tracing::info!(noticia_id = id, empresa_id, user_id = user.usuario_id, ?outcome, "Noticia delete");
    response::deleted(&NOTICIA, outcome)
}
