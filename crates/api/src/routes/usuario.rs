use axum::routing::{get, post, put};
use axum::Router;

use super::Tree;
use crate::handlers::{contacto, credencial, usuario};
use crate::state::AppState;

/// Routes mounted at `/empresas/{empresa_id}/usuarios`.
///
/// ```text
/// GET    /                                            -> usuario::list
/// POST   /                                            -> usuario::create      (admin, multipart)
/// GET    /{usuario_id}                                -> usuario::get         (admin: admin_get)
/// PUT    /{usuario_id}                                -> usuario::update      (admin, multipart)
/// DELETE /{usuario_id}                                -> usuario::delete      (admin)
/// /{usuario_id}/contactos[/{contacto_id}]             -> contacto::*          (admin reads: admin_*)
/// GET    /{usuario_id}/credenciales                   -> credencial::get      (admin only)
/// POST   /{usuario_id}/credenciales                   -> credencial::create   (admin only)
/// PUT    /{usuario_id}/credenciales/{credencial_id}   -> credencial::update   (admin only)
/// ```
pub fn router(tree: Tree) -> Router<AppState> {
    let router = Router::new()
        .route("/", tree.with_writes(get(usuario::list), |r| r.post(usuario::create)))
        .route(
            "/{usuario_id}",
            tree.with_writes(tree.reads(get(usuario::get), get(usuario::admin_get)), |r| {
                r.put(usuario::update).delete(usuario::delete)
            }),
        )
        .route(
            "/{usuario_id}/contactos",
            tree.with_writes(tree.reads(get(contacto::list), get(contacto::admin_list)), |r| {
                r.post(contacto::create)
            }),
        )
        .route(
            "/{usuario_id}/contactos/{contacto_id}",
            tree.with_writes(tree.reads(get(contacto::get), get(contacto::admin_get)), |r| {
                r.put(contacto::update).delete(contacto::delete)
            }),
        );

    match tree {
        Tree::Public => router,
        Tree::Admin => router
            .route(
                "/{usuario_id}/credenciales",
                get(credencial::get).merge(post(credencial::create)),
            )
            .route("/{usuario_id}/credenciales/{credencial_id}", put(credencial::update)),
    }
}
