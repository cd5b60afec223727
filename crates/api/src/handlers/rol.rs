//! Handlers for `/administracion/roles`.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::ROL;
use prefab_db::models::rol::{CreateRol, UpdateRol};
use prefab_db::repositories::RolRepo;

use crate::error::{not_found, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response;
use crate::state::AppState;

/// POST /administracion/roles
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateRol>,
) -> AppResult<Response> {
    input.validate()?;
    let rol = RolRepo::create(&state.pool, &input).await?;

    tracing::info!(rol_id = rol.id, nombre = %rol.nombre_rol, user_id = user.usuario_id, "Rol created");
    response::created(&ROL, &rol)
}

/// GET /administracion/roles
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let roles = ROL.check_listing(RolRepo::list(&state.pool).await?)?;
    response::listed(&ROL, &roles)
}

/// GET /administracion/roles/{rol_id}
pub async fn get(State(state): State<AppState>, Ids([id]): Ids<1>) -> AppResult<Response> {
    let rol = RolRepo::find(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(&ROL))?;
    response::found(&ROL, &rol)
}

/// PUT /administracion/roles/{rol_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([id]): Ids<1>,
    JsonBody(input): JsonBody<UpdateRol>,
) -> AppResult<Response> {
    input.validate()?;
    let rol = RolRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(&ROL))?;

    tracing::info!(rol_id = id, user_id = user.usuario_id, "Rol updated");
    response::updated(&ROL, &rol)
}

/// DELETE /administracion/roles/{rol_id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([id]): Ids<1>,
) -> AppResult<Response> {
    let outcome = RolRepo::soft_delete(&state.pool, id).await?;
    tracing::info!(rol_id = id, user_id = user.usuario_id, ?outcome, "Rol delete");
    response::deleted(&ROL, outcome)
}
