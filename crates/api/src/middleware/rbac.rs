//! Role-based access control.
//!
//! Roles are flat tags: no role implies another.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use prefab_core::error::CoreError;
use prefab_core::roles::ROLE_SUPER_ADMIN;
use prefab_core::types::DbId;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `super_administrador` role. Rejects with 403 otherwise.
///
/// Mounted as a route layer over `/administracion`, and usable directly as
/// a handler argument.
pub struct RequireSuperAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.roles.contains(ROLE_SUPER_ADMIN) {
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "Acceso denegado: Se requiere rol de {ROLE_SUPER_ADMIN}"
            ))));
        }
        Ok(RequireSuperAdmin(user))
    }
}

/// Allow the usuario itself or any super admin.
pub fn ensure_self_or_super_admin(user: &AuthUser, usuario_id: DbId) -> Result<(), AppError> {
    if user.roles.is_super_admin() || user.usuario_id == usuario_id {
        return Ok(());
    }
    Err(AppError::Core(CoreError::Forbidden(
        "No tienes permiso para acceder a este usuario".into(),
    )))
}

#[cfg(test)]
mod tests {
    use prefab_core::roles::{RoleSet, ROLE_ADMIN};

    use super::*;

    fn user(id: DbId, roles: &[&str]) -> AuthUser {
        AuthUser {
            usuario_id: id,
            roles: RoleSet::new(roles.iter().copied()),
        }
    }

    #[test]
    fn owner_passes() {
        assert!(ensure_self_or_super_admin(&user(7, &[ROLE_ADMIN]), 7).is_ok());
    }

    #[test]
    fn super_admin_bypasses_ownership() {
        assert!(ensure_self_or_super_admin(&user(1, &[ROLE_SUPER_ADMIN]), 7).is_ok());
    }

    #[test]
    fn other_usuario_is_forbidden() {
        let err = ensure_self_or_super_admin(&user(1, &[ROLE_ADMIN]), 7).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::Forbidden(_))));
    }
}
