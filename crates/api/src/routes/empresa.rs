//! Route definitions for `/empresas` and the tenant page content under it.

use axum::routing::get;
use axum::Router;

use super::{noticia, prefabricada, usuario, Tree};
use crate::handlers::{empresa, portada, red, servicio};
use crate::state::AppState;

/// Routes mounted at `/empresas`.
///
/// ```text
/// GET    /                                      -> empresa::list
/// POST   /                                      -> empresa::create    (admin)
/// GET    /{empresa_id}                          -> empresa::get
/// PUT    /{empresa_id}                          -> empresa::update    (admin)
/// DELETE /{empresa_id}                          -> empresa::delete    (admin)
///
/// /{empresa_id}/servicios[/{servicio_id}]       -> servicio::*
/// /{empresa_id}/redes[/{red_id}]                -> red::*
/// /{empresa_id}/portadas[/{portada_id}]         -> portada::*  (multipart writes)
/// /{empresa_id}/noticiasEmpresa                 -> see noticia::router
/// /{empresa_id}/prefabricadas                   -> see prefabricada::router
/// /{empresa_id}/usuarios                        -> see usuario::router
/// ```
pub fn router(tree: Tree) -> Router<AppState> {
    Router::new()
        .route("/", tree.with_writes(get(empresa::list), |r| r.post(empresa::create)))
        .route(
            "/{empresa_id}",
            tree.with_writes(get(empresa::get), |r| r.put(empresa::update).delete(empresa::delete)),
        )
        .route(
            "/{empresa_id}/servicios",
            tree.with_writes(get(servicio::list), |r| r.post(servicio::create)),
        )
        .route(
            "/{empresa_id}/servicios/{servicio_id}",
            tree.with_writes(get(servicio::get), |r| {
                r.put(servicio::update).delete(servicio::delete)
            }),
        )
        .route(
            "/{empresa_id}/redes",
            tree.with_writes(get(red::list), |r| r.post(red::create)),
        )
        .route(
            "/{empresa_id}/redes/{red_id}",
            tree.with_writes(get(red::get), |r| r.put(red::update).delete(red::delete)),
        )
        .route(
            "/{empresa_id}/portadas",
            tree.with_writes(get(portada::list), |r| r.post(portada::create)),
        )
        .route(
            "/{empresa_id}/portadas/{portada_id}",
            tree.with_writes(get(portada::get), |r| {
                r.put(portada::update).delete(portada::delete)
            }),
        )
        .nest("/{empresa_id}/noticiasEmpresa", noticia::router(tree))
        .nest("/{empresa_id}/prefabricadas", prefabricada::router(tree))
        .nest("/{empresa_id}/usuarios", usuario::router(tree))
}
