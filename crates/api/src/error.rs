use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prefab_cloud::StorageError;
use prefab_core::entity::Entity;
use prefab_core::error::CoreError;
use serde_json::json;

const INTERNAL_MESSAGE: &str = "Error interno del servidor";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{"error": "..."}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `prefab_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error. The message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// The generic not-found error for `entity`.
pub fn not_found(entity: &Entity) -> AppError {
    AppError::Core(entity.not_found_error())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                CoreError::AlreadyDeleted(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on `uq_*` constraints map to 409.
/// - Foreign-key violations on `fk_*` constraints map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Recurso no encontrado".to_string()),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") if constraint.starts_with("uq_") => {
                    return (StatusCode::CONFLICT, conflict_message(constraint).to_string());
                }
                Some("23503") if constraint.starts_with("fk_") => {
                    return (
                        StatusCode::BAD_REQUEST,
                        "El registro referenciado no existe".to_string(),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}

fn conflict_message(constraint: &str) -> &'static str {
    match constraint {
        "uq_credenciales_email" => "El email ya se encuentra registrado",
        "uq_credenciales_usuario_id" => "El Usuario ya cuenta con credenciales de acceso",
        "uq_roles_nombre_rol" => "El rol ya existe",
        "uq_roles_usuarios_pair" => "El Usuario ya tiene asignado este rol",
        "uq_tipos_categorias_pair" => "El tipo ya está asociado a la categoría",
        _ => "El registro ya existe",
    }
}
