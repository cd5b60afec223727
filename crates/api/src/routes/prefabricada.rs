//! Route definitions for prefabricadas and everything hanging off them.

use axum::routing::get;
use axum::Router;

use super::Tree;
use crate::handlers::{caracteristica, imagen_prefabricada, incluye, precio, prefabricada};
use crate::state::AppState;

/// Routes mounted at `/empresas/{empresa_id}/prefabricadas`.
///
/// ```text
/// GET  /                        -> prefabricada::list (?page&limit&categoria_id&tipo_id&destacada&oferta)
/// POST /                        -> prefabricada::create  (admin)
/// /{prefabricada_id}            -> prefabricada::get, update, delete
///
/// /{prefabricada_id}/imagenesPrefabricadas[/{imagen_id}]              -> imagen_prefabricada::*
/// /{prefabricada_id}/caracteristicas[/{caracteristica_id}]            -> caracteristica::*
/// /{prefabricada_id}/precios[/{precio_id}]                            -> precio::*
/// /{prefabricada_id}/precios/{precio_id}/incluyes[/{incluye_id}]      -> incluye::*
/// ```
pub fn router(tree: Tree) -> Router<AppState> {
    Router::new()
        .route("/", tree.with_writes(get(prefabricada::list), |r| r.post(prefabricada::create)))
        .route(
            "/{prefabricada_id}",
            tree.with_writes(get(prefabricada::get), |r| {
                r.put(prefabricada::update).delete(prefabricada::delete)
            }),
        )
        .route(
            "/{prefabricada_id}/imagenesPrefabricadas",
            tree.with_writes(get(imagen_prefabricada::list), |r| {
                r.post(imagen_prefabricada::create)
            }),
        )
        .route(
            "/{prefabricada_id}/imagenesPrefabricadas/{imagen_id}",
            tree.with_writes(get(imagen_prefabricada::get), |r| {
                r.put(imagen_prefabricada::update).delete(imagen_prefabricada::delete)
            }),
        )
        .route(
            "/{prefabricada_id}/caracteristicas",
            tree.with_writes(get(caracteristica::list), |r| r.post(caracteristica::create)),
        )
        .route(
            "/{prefabricada_id}/caracteristicas/{caracteristica_id}",
            tree.with_writes(get(caracteristica::get), |r| {
                r.put(caracteristica::update).delete(caracteristica::delete)
            }),
        )
        .route(
            "/{prefabricada_id}/precios",
            tree.with_writes(get(precio::list), |r| r.post(precio::create)),
        )
        .route(
            "/{prefabricada_id}/precios/{precio_id}",
            tree.with_writes(get(precio::get), |r| r.put(precio::update).delete(precio::delete)),
        )
        .route(
            "/{prefabricada_id}/precios/{precio_id}/incluyes",
            tree.with_writes(get(incluye::list), |r| r.post(incluye::create)),
        )
        .route(
            "/{prefabricada_id}/precios/{precio_id}/incluyes/{incluye_id}",
            tree.with_writes(get(incluye::get), |r| r.put(incluye::update).delete(incluye::delete)),
        )
}
