//! Login and password-recovery handlers.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use prefab_core::error::CoreError;
use prefab_core::recovery::{expires_at, hash_token, issue_token, recovery_link};
use prefab_core::roles::RoleSet;
use prefab_db::models::credencial::LoginRequest;
use prefab_db::models::recuperacion::{RecoveryRequest, ResetPasswordRequest};
use prefab_db::repositories::{CredencialRepo, RecuperacionRepo, Redemption, RolRepo};
use prefab_events::RecoveryEmail;
use serde::Serialize;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Credenciales inválidas";

/// Returned whether or not the email is registered.
pub const RECOVERY_ACCEPTED: &str =
    "Si el correo está registrado, recibirás un enlace para restablecer tu contraseña";

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}

/// POST /login
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Response> {
    let credencial = CredencialRepo::find_login(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    let valid = verify_password_blocking(input.password, credencial.password_hash)
        .await
        .map_err(AppError::InternalError)?;
    if !valid {
        tracing::info!(usuario_id = credencial.usuario_id, "Login rejected");
        return Err(invalid_credentials());
    }

    let roles = RoleSet::new(RolRepo::names_for_usuario(&state.pool, credencial.usuario_id).await?);
    let token = generate_access_token(credencial.usuario_id, &roles, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(usuario_id = credencial.usuario_id, "Login succeeded");
    Ok(Json(LoginResponse { token }).into_response())
}

/// POST /password-recovery
///
/// Always answers 200 with the same message so the endpoint cannot be used
/// to learn which emails are registered. The email goes out on a detached
/// task; delivery failures are only logged.
pub async fn password_recovery(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RecoveryRequest>,
) -> AppResult<Response> {
    input.validate()?;
    let email = input.email.trim();

    if let Some(credencial) = CredencialRepo::find_login(&state.pool, email).await? {
        let (token, token_hash) = issue_token();
        RecuperacionRepo::create(
            &state.pool,
            &token_hash,
            credencial.usuario_id,
            expires_at(Utc::now()),
        )
        .await?;

        let link = recovery_link(&state.config.frontend_url, &token);
        let email = RecoveryEmail::new(email, link);
        let notifier = state.notifier.clone();
        let usuario_id = credencial.usuario_id;
        tokio::spawn(async move {
            match notifier.send_recovery(email).await {
                Ok(()) => tracing::info!(usuario_id, "Recovery email sent"),
                Err(e) => tracing::error!(usuario_id, error = %e, "Recovery email failed"),
            }
        });
    }

    Ok(response::message(RECOVERY_ACCEPTED))
}

/// POST /reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ResetPasswordRequest>,
) -> AppResult<Response> {
    input.validate()?;

    let token_hash = hash_token(&input.token);
    if let Some(rejected) = RecuperacionRepo::rejection(&state.pool, &token_hash, Utc::now()).await? {
        return Err(redemption_error(rejected));
    }

    let new_hash = hash_password_blocking(input.nueva_clave)
        .await
        .map_err(AppError::InternalError)?;

    match RecuperacionRepo::redeem(&state.pool, &token_hash, &new_hash, Utc::now()).await? {
        Redemption::Redeemed => {
            tracing::info!("Password reset via recovery token");
            Ok(response::message("Contraseña actualizada correctamente"))
        }
        rejected => Err(redemption_error(rejected)),
    }
}

fn redemption_error(outcome: Redemption) -> AppError {
    match outcome {
        Redemption::Expired => {
            AppError::Core(CoreError::Unauthorized("El token ha expirado".into()))
        }
        Redemption::NotFound | Redemption::Redeemed => {
            AppError::Core(CoreError::NotFound("Token inválido".into()))
        }
    }
}
