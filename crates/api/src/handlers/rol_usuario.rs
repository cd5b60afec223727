//! Handlers for `/administracion/roles/{rol_id}/roles_usuarios`.
//!
//! The assigned usuario must be live; a dead or unknown one is a 400.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::{ROL, ROL_USUARIO, USUARIO};
use prefab_core::error::CoreError;
use prefab_core::types::DbId;
use prefab_db::models::rol::{CreateRolUsuario, UpdateRolUsuario};
use prefab_db::repositories::{RolUsuarioRepo, UsuarioRepo};
use prefab_db::DbPool;

use super::scoped_listing;
use crate::error::{not_found, AppError, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

async fn ensure_usuario_live(pool: &DbPool, usuario_id: DbId) -> AppResult<()> {
    if UsuarioRepo::exists_live(pool, usuario_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(USUARIO.not_found.into())))
    }
}

/// POST /administracion/roles/{rol_id}/roles_usuarios
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([rol_id]): Ids<1>,
    JsonBody(input): JsonBody<CreateRolUsuario>,
) -> AppResult<Response> {
    input.validate()?;
    ensure_usuario_live(&state.pool, input.usuario_id).await?;

    let asignacion = RolUsuarioRepo::create(&state.pool, rol_id, &input)
        .await?
        .ok_or_else(|| not_found(&ROL))?;

    tracing::info!(
        rol_usuario_id = asignacion.id,
        rol_id,
        usuario_id = input.usuario_id,
        user_id = user.usuario_id,
        "Rol assigned",
    );
    response::created(&ROL_USUARIO, &asignacion)
}

/// GET /administracion/roles/{rol_id}/roles_usuarios
pub async fn list(State(state): State<AppState>, Ids([rol_id]): Ids<1>) -> AppResult<Response> {
    let rows = RolUsuarioRepo::list(&state.pool, rol_id).await?;
    let asignaciones =
        scoped_listing(&state.pool, &RolUsuarioRepo::scope(rol_id), &ROL, &ROL_USUARIO, rows).await?;
    response::listed(&ROL_USUARIO, &asignaciones)
}

/// GET /administracion/roles/{rol_id}/roles_usuarios/{id}
pub async fn get(State(state): State<AppState>, Ids([rol_id, id]): Ids<2>) -> AppResult<Response> {
    let asignacion = RolUsuarioRepo::find(&state.pool, rol_id, id)
        .await?
        .ok_or_else(|| not_found(&ROL_USUARIO))?;
    response::found(&ROL_USUARIO, &asignacion)
}

/// PUT /administracion/roles/{rol_id}/roles_usuarios/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([rol_id, id]): Ids<2>,
    JsonBody(input): JsonBody<UpdateRolUsuario>,
) -> AppResult<Response> {
    input.validate()?;
    ensure_usuario_live(&state.pool, input.usuario_id).await?;

    let asignacion = RolUsuarioRepo::update(&state.pool, rol_id, id, &input)
        .await?
        .ok_or_else(|| not_found(&ROL_USUARIO))?;

    tracing::info!(rol_usuario_id = id, rol_id, user_id = user.usuario_id, "Rol assignment updated");
    response::updated(&ROL_USUARIO, &asignacion)
}

/// DELETE /administracion/roles/{rol_id}/roles_usuarios/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([rol_id, id]): Ids<2>,
) -> AppResult<Response> {
    let outcome = RolUsuarioRepo::soft_delete(&state.pool, rol_id, id).await?;
    tracing::info!(rol_usuario_id = id, rol_id, user_id = user.usuario_id, ?outcome, "Rol assignment delete");
    response::deleted(&ROL_USUARIO, outcome)
}
