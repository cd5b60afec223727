//! Route definitions for the shared catalog: tipos, categorias, estilos.

use axum::routing::{delete, get};
use axum::Router;

use super::Tree;
use crate::handlers::{categoria, estilo, tipo};
use crate::state::AppState;

/// Routes mounted at `/tipos`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create        (admin)
/// GET    /{id}  -> get
/// PUT    /{id}  -> update        (admin)
/// DELETE /{id}  -> delete        (admin)
/// ```
pub fn tipo_router(tree: Tree) -> Router<AppState> {
    Router::new()
        .route("/", tree.with_writes(get(tipo::list), |r| r.post(tipo::create)))
        .route(
            "/{id}",
            tree.with_writes(get(tipo::get), |r| r.put(tipo::update).delete(tipo::delete)),
        )
}

/// Routes mounted at `/categorias`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create        (admin)
/// GET    /{id}                            -> get
/// PUT    /{id}                            -> update        (admin)
/// DELETE /{id}                            -> delete        (admin)
/// GET    /{id}/tipos                      -> list_tipos
/// POST   /{id}/tipos                      -> add_tipo      (admin)
/// DELETE /{id}/tipos/{tipo_categoria_id}  -> remove_tipo   (admin)
/// ```
pub fn categoria_router(tree: Tree) -> Router<AppState> {
    let router = Router::new()
        .route("/", tree.with_writes(get(categoria::list), |r| r.post(categoria::create)))
        .route(
            "/{id}",
            tree.with_writes(get(categoria::get), |r| {
                r.put(categoria::update).delete(categoria::delete)
            }),
        )
        .route(
            "/{id}/tipos",
            tree.with_writes(get(categoria::list_tipos), |r| r.post(categoria::add_tipo)),
        );

    match tree {
        Tree::Public => router,
        Tree::Admin => router.route("/{id}/tipos/{tipo_categoria_id}", delete(categoria::remove_tipo)),
    }
}

/// Routes mounted at `/estilos`. Same shape as [`tipo_router`].
pub fn estilo_router(tree: Tree) -> Router<AppState> {
    Router::new()
        .route("/", tree.with_writes(get(estilo::list), |r| r.post(estilo::create)))
        .route(
            "/{id}",
            tree.with_writes(get(estilo::get), |r| r.put(estilo::update).delete(estilo::delete)),
        )
}
