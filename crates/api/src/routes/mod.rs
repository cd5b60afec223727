pub mod auth;
pub mod catalogo;
pub mod empresa;
pub mod health;
pub mod noticia;
pub mod prefabricada;
pub mod rol;
pub mod usuario;

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::dashboard;
use crate::middleware::rbac::RequireSuperAdmin;
use crate::state::AppState;

/// Which of the two mirrored trees a resource router is mounted in.
///
/// Both trees serve the same reads; only the admin tree adds writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tree {
    Public,
    Admin,
}

impl Tree {
    /// Attach `writes` to `reads` in the admin tree only.
    pub(crate) fn with_writes(
        self,
        reads: MethodRouter<AppState>,
        writes: impl FnOnce(MethodRouter<AppState>) -> MethodRouter<AppState>,
    ) -> MethodRouter<AppState> {
        match self {
            Tree::Public => reads,
            Tree::Admin => writes(reads),
        }
    }

    /// `public` in the public tree, `admin` in the admin tree. For reads the
    /// admin tree serves with an extra ownership check.
    pub(crate) fn reads(
        self,
        public: MethodRouter<AppState>,
        admin: MethodRouter<AppState>,
    ) -> MethodRouter<AppState> {
        match self {
            Tree::Public => public,
            Tree::Admin => admin,
        }
    }
}

/// Build the resource tree.
///
/// Route hierarchy (every read below is mirrored under `/administracion`,
/// where writes are added):
///
/// ```text
/// POST /login                                      login
/// POST /password-recovery                          request a recovery link
/// POST /reset-password                             redeem a recovery token
///
/// /tipos, /categorias, /estilos                    catalog
/// /categorias/{id}/tipos                           tipo associations
/// /empresas                                        tenants
/// /empresas/{id}/servicios|redes|portadas          tenant page content
/// /empresas/{id}/noticiasEmpresa                   news (paged)
///     /{id}/imagenesNoticiasEmpresa                news images
/// /empresas/{id}/prefabricadas                     products (paged, filtered)
///     /{id}/imagenesPrefabricadas                  product images
///     /{id}/caracteristicas                        features
///     /{id}/precios                                prices
///         /{id}/incluyes                           price line items
/// /empresas/{id}/usuarios                          staff
///     /{id}/contactos                              staff contact data
///     /{id}/credenciales                           login credentials (admin only)
/// /roles                                           roles
///     /{id}/roles_usuarios                         role assignments
///
/// GET /administracion                              dashboard counts
/// ```
///
/// Everything under `/administracion` requires a super administrator.
pub fn api_routes(state: AppState) -> Router<AppState> {
    let admin = resource_tree(Tree::Admin)
        .route("/", get(dashboard::summary))
        .route_layer(axum::middleware::from_extractor_with_state::<RequireSuperAdmin, AppState>(
            state,
        ));

    Router::new()
        .merge(auth::router())
        .merge(resource_tree(Tree::Public))
        .nest("/administracion", admin)
}

fn resource_tree(tree: Tree) -> Router<AppState> {
    Router::new()
        .nest("/tipos", catalogo::tipo_router(tree))
        .nest("/categorias", catalogo::categoria_router(tree))
        .nest("/estilos", catalogo::estilo_router(tree))
        .nest("/empresas", empresa::router(tree))
        .nest("/roles", rol::router(tree))
}
