//! Handlers for `/administracion/empresas/{empresa_id}/usuarios/{usuario_id}/credenciales`.
//!
//! Writes hold one transaction across the existence check, the password
//! hash and the row write.

use axum::extract::State;
use axum::response::Response;
use prefab_core::entity::{CREDENCIAL, USUARIO};
use prefab_core::error::CoreError;
use prefab_db::models::credencial::{CreateCredencial, UpdateCredencial};
use prefab_db::repositories::CredencialRepo;

use crate::auth::password::hash_password_blocking;
use crate::error::{not_found, AppError, AppResult};
use crate::extract::{Ids, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::ensure_self_or_super_admin;
use crate::response;
use crate::state::AppState;

const ALREADY_HAS_CREDENTIAL: &str = "El Usuario ya cuenta con credenciales de acceso";

/// GET .../credenciales
pub async fn get(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, usuario_id]): Ids<2>,
) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, usuario_id)?;

    let credencial = CredencialRepo::find_for_usuario(&state.pool, empresa_id, usuario_id)
        .await?
        .ok_or_else(|| not_found(&CREDENCIAL))?;
    response::found(&CREDENCIAL, &credencial)
}

/// POST .../credenciales
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, usuario_id]): Ids<2>,
    JsonBody(input): JsonBody<CreateCredencial>,
) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, usuario_id)?;
    input.validate()?;

    let mut tx = state.pool.begin().await?;
    if !CredencialRepo::scope(empresa_id, usuario_id)
        .ancestors_live(&mut *tx)
        .await?
    {
        return Err(not_found(&USUARIO));
    }
    if CredencialRepo::usuario_has_credential(&mut tx, usuario_id).await? {
        return Err(AppError::Core(CoreError::Conflict(ALREADY_HAS_CREDENTIAL.into())));
    }

    let password_hash = hash_password_blocking(input.password)
        .await
        .map_err(AppError::InternalError)?;
    let credencial =
        CredencialRepo::insert(&mut tx, empresa_id, usuario_id, input.email.trim(), &password_hash)
            .await?
            .ok_or_else(|| not_found(&USUARIO))?;
    tx.commit().await?;

    tracing::info!(credencial_id = credencial.id, usuario_id, user_id = user.usuario_id, "Credencial created");
    response::created(&CREDENCIAL, &credencial)
}

/// PUT .../credenciales/{credencial_id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Ids([empresa_id, usuario_id, id]): Ids<3>,
    JsonBody(input): JsonBody<UpdateCredencial>,
) -> AppResult<Response> {
    ensure_self_or_super_admin(&user, usuario_id)?;
    input.validate()?;

    let mut tx = state.pool.begin().await?;
    let password_hash = match input.password {
        Some(password) => Some(
            hash_password_blocking(password)
                .await
                .map_err(AppError::InternalError)?,
        ),
        None => None,
    };
    let credencial = CredencialRepo::update(
        &mut tx,
        empresa_id,
        usuario_id,
        id,
        input.email.trim(),
        password_hash.as_deref(),
    )
    .await?
    .ok_or_else(|| not_found(&CREDENCIAL))?;
    tx.commit().await?;

    tracing::info!(credencial_id = id, usuario_id, user_id = user.usuario_id, "Credencial updated");
    response::updated(&CREDENCIAL, &credencial)
}
