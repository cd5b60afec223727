//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or a connection, for transactional steps) as the
//! first argument. Nested entities are always addressed through their
//! [`Scope`](crate::scope::Scope); `None` from a scoped method means the row
//! or one of its ancestors is absent, deleted, or belongs elsewhere.

use std::collections::HashMap;

use prefab_core::types::DbId;

pub mod caracteristica_repo;
pub mod categoria_repo;
pub mod contacto_repo;
pub mod credencial_repo;
pub mod dashboard_repo;
pub mod empresa_repo;
pub mod estilo_repo;
pub mod imagen_noticia_repo;
pub mod imagen_prefabricada_repo;
pub mod incluye_repo;
pub mod noticia_repo;
pub mod portada_repo;
pub mod precio_repo;
pub mod prefabricada_repo;
pub mod recuperacion_repo;
pub mod red_repo;
pub mod rol_repo;
pub mod rol_usuario_repo;
pub mod servicio_repo;
pub mod tipo_categoria_repo;
pub mod tipo_repo;
pub mod usuario_repo;

pub use caracteristica_repo::CaracteristicaRepo;
pub use categoria_repo::{CategoriaRepo, CategoriaWrite};
pub use contacto_repo::ContactoRepo;
pub use credencial_repo::CredencialRepo;
pub use dashboard_repo::DashboardRepo;
pub use empresa_repo::EmpresaRepo;
pub use estilo_repo::EstiloRepo;
pub use imagen_noticia_repo::ImagenNoticiaRepo;
pub use imagen_prefabricada_repo::ImagenPrefabricadaRepo;
pub use incluye_repo::{IncluyeRepo, PrecioPath};
pub use noticia_repo::NoticiaRepo;
pub use portada_repo::PortadaRepo;
pub use precio_repo::PrecioRepo;
pub use prefabricada_repo::PrefabricadaRepo;
pub use recuperacion_repo::{RecuperacionRepo, Redemption};
pub use red_repo::RedRepo;
pub use rol_repo::RolRepo;
pub use rol_usuario_repo::RolUsuarioRepo;
pub use servicio_repo::ServicioRepo;
pub use tipo_categoria_repo::TipoCategoriaRepo;
pub use tipo_repo::TipoRepo;
pub use usuario_repo::UsuarioRepo;

/// Bucket rows by a parent id, keeping their relative order.
pub(crate) fn group_by<T>(rows: Vec<T>, key: impl Fn(&T) -> DbId) -> HashMap<DbId, Vec<T>> {
    let mut groups: HashMap<DbId, Vec<T>> = HashMap::new();
    for row in rows {
        groups.entry(key(&row)).or_default().push(row);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_by_keeps_order_within_bucket() {
        let rows = vec![(1, "a"), (2, "b"), (1, "c")];
        let groups = group_by(rows, |r| r.0);
        assert_eq!(groups[&1], vec![(1, "a"), (1, "c")]);
        assert_eq!(groups[&2], vec![(2, "b")]);
    }
}
