use axum::routing::get;
use axum::Router;

use super::Tree;
use crate::handlers::{rol, rol_usuario};
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// GET    /                                   -> rol::list
/// POST   /                                   -> rol::create          (admin)
/// GET    /{rol_id}                           -> rol::get
/// PUT    /{rol_id}                           -> rol::update          (admin)
/// DELETE /{rol_id}                           -> rol::delete          (admin)
/// GET    /{rol_id}/roles_usuarios            -> rol_usuario::list
/// POST   /{rol_id}/roles_usuarios            -> rol_usuario::create  (admin)
/// GET    /{rol_id}/roles_usuarios/{id}       -> rol_usuario::get
/// PUT    /{rol_id}/roles_usuarios/{id}       -> rol_usuario::update  (admin)
/// DELETE /{rol_id}/roles_usuarios/{id}       -> rol_usuario::delete  (admin)
/// ```
pub fn router(tree: Tree) -> Router<AppState> {
    Router::new()
        .route("/", tree.with_writes(get(rol::list), |r| r.post(rol::create)))
        .route(
            "/{rol_id}",
            tree.with_writes(get(rol::get), |r| r.put(rol::update).delete(rol::delete)),
        )
        .route(
            "/{rol_id}/roles_usuarios",
            tree.with_writes(get(rol_usuario::list), |r| r.post(rol_usuario::create)),
        )
        .route(
            "/{rol_id}/roles_usuarios/{id}",
            tree.with_writes(get(rol_usuario::get), |r| {
                r.put(rol_usuario::update).delete(rol_usuario::delete)
            }),
        )
}
