//! Handlers for `/categorias` and their tipo associations.
//!
//! Categoria writes carry the full `tipos` set; the association routes
//! under `/categorias/{id}/tipos` link and unlink one tipo at a time.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::{CATEGORIA, TIPO, TIPO_CATEGORIA};
use prefab_core::error::CoreError;
use prefab_core::types::DbId;
use prefab_core::validation::require_positive;
use prefab_db::models::catalogo::{CreateCategoria, TipoRef, UpdateCategoria};
use prefab_db::repositories::{CategoriaRepo, CategoriaWrite, TipoCategoriaRepo, TipoRepo};

use crate::error::{not_found, AppError, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

fn unknown_tipo(tipo_id: DbId) -> AppError {
    AppError::Core(CoreError::Validation(format!(
        "{} (tipo_id {tipo_id})",
        TIPO.not_found
    )))
}

/// POST /administracion/categorias
///
/// Links every tipo in `tipos` in the same transaction; an unknown or
/// deleted tipo rolls the whole write back with a 400.
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategoria>,
) -> AppResult<Response> {
    input.validate()?;
    match CategoriaRepo::create(&state.pool, &input).await? {
        CategoriaWrite::Written(categoria) => {
            tracing::info!(
                categoria_id = categoria.categoria.id,
                tipos = categoria.tipos.len(),
                user_id = user.usuario_id,
                "Categoria created",
            );
            response::created(&CATEGORIA, &categoria)
        }
        CategoriaWrite::TipoNotFound(tipo_id) => Err(unknown_tipo(tipo_id)),
        CategoriaWrite::CategoriaNotFound => Err(not_found(&CATEGORIA)),
    }
}

/// GET /categorias
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let categorias = CategoriaRepo::list(&state.pool).await?;
    response::listed(&CATEGORIA, &categorias)
}

/// GET /categorias/{id}
pub async fn get(State(state): State<AppState>, Ids([id]): Ids<1>) -> AppResult<Response> {
    let categoria = CategoriaRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(&CATEGORIA))?;
    response::found(&CATEGORIA, &categoria)
}

/// PUT /administracion/categorias/{id}
///
/// `tipos` replaces the association set.
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([id]): Ids<1>,
    JsonBody(input): JsonBody<UpdateCategoria>,
) -> AppResult<Response> {
    input.validate()?;
    match CategoriaRepo::update(&state.pool, id, &input).await? {
        CategoriaWrite::Written(categoria) => {
            tracing::info!(categoria_id = id, user_id = user.usuario_id, "Categoria updated");
            response::updated(&CATEGORIA, &categoria)
        }
        CategoriaWrite::TipoNotFound(tipo_id) => Err(unknown_tipo(tipo_id)),
        CategoriaWrite::CategoriaNotFound => Err(not_found(&CATEGORIA)),
    }
}

/// DELETE /administracion/categorias/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([id]): Ids<1>,
) -> AppResult<Response> {
    let outcome = CategoriaRepo::soft_delete(&state.pool, id).await?;
    tracing::info!(categoria_id = id, user_id = user.usuario_id, ?outcome, "Categoria delete");
    response::deleted(&CATEGORIA, outcome)
}

// ---------------------------------------------------------------------------
// Associations
// ---------------------------------------------------------------------------

/// GET /categorias/{id}/tipos
pub async fn list_tipos(
    State(state): State<AppState>,
    Ids([categoria_id]): Ids<1>,
) -> AppResult<Response> {
    if CategoriaRepo::find(&state.pool, categoria_id).await?.is_none() {
        return Err(not_found(&CATEGORIA));
    }
    let tipos = TipoCategoriaRepo::list(&state.pool, categoria_id).await?;
    response::listed(&TIPO_CATEGORIA, &tipos)
}

/// POST /administracion/categorias/{id}/tipos
///
/// A pair that is already linked is a 409 from `uq_tipos_categorias_pair`.
pub async fn add_tipo(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([categoria_id]): Ids<1>,
    JsonBody(input): JsonBody<TipoRef>,
) -> AppResult<Response> {
    require_positive(input.tipo_id, "tipo_id")?;
    if CategoriaRepo::find(&state.pool, categoria_id).await?.is_none() {
        return Err(not_found(&CATEGORIA));
    }
    if !TipoRepo::exists(&state.pool, input.tipo_id).await? {
        return Err(unknown_tipo(input.tipo_id));
    }

    let link = TipoCategoriaRepo::create(&state.pool, categoria_id, input.tipo_id)
        .await?
        .ok_or_else(|| not_found(&CATEGORIA))?;

    tracing::info!(categoria_id, tipo_id = input.tipo_id, user_id = user.usuario_id, "Tipo linked");
    response::created(&TIPO_CATEGORIA, &link)
}

/// DELETE /administracion/categorias/{id}/tipos/{tipo_categoria_id}
pub async fn remove_tipo(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([categoria_id, id]): Ids<2>,
) -> AppResult<Response> {
    let outcome = TipoCategoriaRepo::soft_delete(&state.pool, categoria_id, id).await?;
    tracing::info!(categoria_id, tipo_categoria_id = id, user_id = user.usuario_id, ?outcome, "Tipo unlink");
    response::deleted(&TIPO_CATEGORIA, outcome)
}
