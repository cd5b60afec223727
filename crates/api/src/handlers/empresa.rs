//! Handlers for `/empresas`.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::EMPRESA;
use prefab_db::models::empresa::{CreateEmpresa, UpdateEmpresa};
use prefab_db::repositories::EmpresaRepo;

use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

/// POST /administracion/empresas
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateEmpresa>,
) -> AppResult<Response> {
    input.validate()?;
    let empresa = EmpresaRepo::create(&state.pool, &input).await?;

    tracing::info!(empresa_id = empresa.id, user_id = user.usuario_id, "Empresa created");
    response::created(&EMPRESA, &empresa)
}

/// GET /empresas
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let empresas = EmpresaRepo::list(&state.pool).await?;
    response::listed(&EMPRESA, &empresas)
}

/// GET /empresas/{empresa_id}
///
/// Embeds the empresa's live servicios and redes.
pub async fn get(State(state): State<AppState>, Ids([id]): Ids<1>) -> AppResult<Response> {
    let empresa = EmpresaRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(&EMPRESA))?;
    response::found(&EMPRESA, &empresa)
}

/// PUT /administracion/empresas/{empresa_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([id]): Ids<1>,
    JsonBody(input): JsonBody<UpdateEmpresa>,
) -> AppResult<Response> {
    input.validate()?;
    let empresa = EmpresaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(&EMPRESA))?;

    tracing::info!(empresa_id = id, user_id = user.usuario_id, "Empresa updated");
    response::updated(&EMPRESA, &empresa)
}

/// DELETE /administracion/empresas/{empresa_id}
///
/// Children stay in place; every scoped read and insert below a deleted
/// empresa stops resolving.
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([id]): Ids<1>,
) -> AppResult<Response> {
    let outcome = EmpresaRepo::soft_delete(&state.pool, id).await?;
    tracing::info!(empresa_id = id, user_id = user.usuario_id, ?outcome, "Empresa delete");
    response::deleted(&EMPRESA, outcome)
}
