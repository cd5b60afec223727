//! HTTP handlers, one module per resource.
//!
//! Reads are shared between the public tree and `/administracion`; writes
//! are only routed under `/administracion`.

pub mod auth;
pub mod caracteristica;
pub mod categoria;
pub mod contacto;
pub mod credencial;
pub mod dashboard;
pub mod empresa;
pub mod estilo;
pub mod imagen_noticia;
pub mod imagen_prefabricada;
pub mod incluye;
pub mod noticia;
pub mod portada;
pub mod precio;
pub mod prefabricada;
pub mod red;
pub mod rol;
pub mod rol_usuario;
pub mod servicio;
pub mod tipo;
pub mod usuario;

use prefab_core::entity::Entity;
use prefab_db::scope::Scope;
use prefab_db::DbPool;

use crate::error::{not_found, AppResult};

/// Apply the listing policy to rows read under `scope`.
///
/// An empty result under a broken ownership chain is reported as the
/// parent's not-found error. A live parent with no children gets the
/// entity's own empty-list handling.
pub(crate) async fn scoped_listing<T>(
    pool: &DbPool,
    scope: &Scope,
    parent: &Entity,
    entity: &Entity,
    rows: Vec<T>,
) -> AppResult<Vec<T>> {
    if rows.is_empty() && !scope.ancestors_live(pool).await? {
        return Err(not_found(parent));
    }
    Ok(entity.check_listing(rows)?)
}
