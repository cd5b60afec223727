use axum::routing::get;
use axum::Router;

use super::Tree;
use crate::handlers::{imagen_noticia, noticia};
use crate::state::AppState;

/// Routes mounted at `/empresas/{empresa_id}/noticiasEmpresa`.
///
/// ```text
/// GET    /                                                   -> noticia::list (?page&limit)
/// POST   /                                                   -> noticia::create        (admin)
/// GET    /{noticia_id}                                       -> noticia::get
/// PUT    /{noticia_id}                                       -> noticia::update        (admin)
/// DELETE /{noticia_id}                                       -> noticia::delete        (admin)
/// GET    /{noticia_id}/imagenesNoticiasEmpresa               -> imagen_noticia::list
/// POST   /{noticia_id}/imagenesNoticiasEmpresa               -> imagen_noticia::create (admin)
/// GET    /{noticia_id}/imagenesNoticiasEmpresa/{imagen_id}   -> imagen_noticia::get
/// PUT    /{noticia_id}/imagenesNoticiasEmpresa/{imagen_id}   -> imagen_noticia::update (admin)
/// DELETE /{noticia_id}/imagenesNoticiasEmpresa/{imagen_id}   -> imagen_noticia::delete (admin)
/// ```
pub fn router(tree: Tree) -> Router<AppState> {
    Router::new()
        .route("/", tree.with_writes(get(noticia::list), |r| r.post(noticia::create)))
        .route(
            "/{noticia_id}",
            tree.with_writes(get(noticia::get), |r| r.put(noticia::update).delete(noticia::delete)),
        )
        .route(
            "/{noticia_id}/imagenesNoticiasEmpresa",
            tree.with_writes(get(imagen_noticia::list), |r| r.post(imagen_noticia::create)),
        )
        .route(
            "/{noticia_id}/imagenesNoticiasEmpresa/{imagen_id}",
            tree.with_writes(get(imagen_noticia::get), |r| {
                r.put(imagen_noticia::update).delete(imagen_noticia::delete)
            }),
        )
}
