//! Handlers for `/empresas/{empresa_id}/prefabricadas`.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use prefab_core::entity::{Entity, CATEGORIA, EMPRESA, ESTILO, PREFABRICADA, TIPO};
use prefab_core::error::CoreError;
use prefab_db::models::prefabricada::{CreatePrefabricada, UpdatePrefabricada};
use prefab_db::repositories::{CategoriaRepo, EstiloRepo, PrefabricadaRepo, TipoRepo};
use prefab_db::DbPool;

use crate::error::{not_found, AppError, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::query::PrefabricadaParams;
use crate::response;
use crate::state::AppState;

/// Reject writes that point at a categoria, estilo or tipo that is missing
/// or soft-deleted. The foreign keys alone don't see soft deletes.
async fn ensure_catalog_refs(pool: &DbPool, input: &CreatePrefabricada) -> AppResult<()> {
    let categoria = CategoriaRepo::scope().exists(pool, input.categoria_id).await?;
    let estilo = EstiloRepo::scope().exists(pool, input.estilo_id).await?;
    let tipo = TipoRepo::exists(pool, input.tipo_id).await?;

    let missing: Option<&Entity> = match (categoria, estilo, tipo) {
        (false, _, _) => Some(&CATEGORIA),
        (_, false, _) => Some(&ESTILO),
        (_, _, false) => Some(&TIPO),
        _ => None,
    };
    match missing {
        Some(entity) => Err(AppError::Core(CoreError::Validation(entity.not_found.into()))),
        None => Ok(()),
    }
}

/// POST /administracion/empresas/{empresa_id}/prefabricadas
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id]): Ids<1>,
    JsonBody(input): JsonBody<CreatePrefabricada>,
) -> AppResult<Response> {
    input.validate()?;
    ensure_catalog_refs(&state.pool, &input).await?;

    let prefabricada = PrefabricadaRepo::create(&state.pool, empresa_id, &input)
        .await?
        .ok_or_else(|| not_found(&EMPRESA))?;

    tracing::info!(
        prefabricada_id = prefabricada.id,
        empresa_id,
        user_id = user.usuario_id,
        "Prefabricada created",
    );
    response::created(&PREFABRICADA, &prefabricada)
}

/// GET /empresas/{empresa_id}/prefabricadas?page=&limit=&categoria_id=&tipo_id=&destacada=&oferta=
///
/// Responds `{prefabricadas, page, limit}`, each row with its live images,
/// caracteristicas and precios embedded. An empty page is `200 []`.
pub async fn list(
    State(state): State<AppState>,
    Ids([empresa_id]): Ids<1>,
    Query(params): Query<PrefabricadaParams>,
) -> AppResult<Response> {
    let page =
        PrefabricadaRepo::list_page(&state.pool, empresa_id, params.filter(), params.page()).await?;
    if page.prefabricadas.is_empty()
        && !PrefabricadaRepo::scope(empresa_id)
            .ancestors_live(&state.pool)
            .await?
    {
        return Err(not_found(&EMPRESA));
    }
    Ok(Json(page).into_response())
}

/// GET /empresas/{empresa_id}/prefabricadas/{prefabricada_id}
pub async fn get(
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let prefabricada = PrefabricadaRepo::find_detail(&state.pool, empresa_id, id)
        .await?
        .ok_or_else(|| not_found(&PREFABRICADA))?;
    response::found(&PREFABRICADA, &prefabricada)
}

/// PUT /administracion/empresas/{empresa_id}/prefabricadas/{prefabricada_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
    JsonBody(input): JsonBody<UpdatePrefabricada>,
) -> AppResult<Response> {
    input.validate()?;
    ensure_catalog_refs(&state.pool, &input).await?;

    let prefabricada = PrefabricadaRepo::update(&state.pool, empresa_id, id, &input)
        .await?
        .ok_or_else(|| not_found(&PREFABRICADA))?;

    tracing::info!(prefabricada_id = id, empresa_id, user_id = user.usuario_id, "Prefabricada updated");
    response::updated(&PREFABRICADA, &prefabricada)
}

/// DELETE /administracion/empresas/{empresa_id}/prefabricadas/{prefabricada_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, id]): Ids<2>,
) -> AppResult<Response> {
    let outcome = PrefabricadaRepo::soft_delete(&state.pool, empresa_id, id).await?;
    tracing::info!(prefabricada_id = id, empresa_id, user_id = user.usuario_id, ?outcome, "Prefabricada delete");
    response::deleted(&PREFABRICADA, outcome)
}
