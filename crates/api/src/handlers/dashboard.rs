use axum::extract::State;
use axum::Json;
use prefab_db::models::dashboard::DashboardCounts;
use prefab_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /administracion/
pub async fn summary(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<DashboardCounts>> {
    let counts = DashboardRepo::counts(&state.pool).await?;
    tracing::debug!(user_id = user.usuario_id, "Dashboard viewed");
    Ok(Json(counts))
}
