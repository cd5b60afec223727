//! Route definitions for login and password recovery.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /login              -> login
/// POST /password-recovery  -> password_recovery
/// POST /reset-password     -> reset_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/password-recovery", post(auth::password_recovery))
        .route("/reset-password", post(auth::reset_password))
}
