//! Per-entity response vocabulary.
//!
//! Each managed noun has one [`Entity`] descriptor holding its JSON keys and
//! the user-facing messages for every outcome of the CRUD lifecycle. Handlers
//! never spell these strings out themselves.

use crate::error::CoreError;

/// JSON keys and user-facing messages for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    /// Envelope key for a single row (`{"precio": {...}}`).
    pub key: &'static str,
    /// Envelope key for a collection (`{"precios": [...]}`).
    pub plural: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub not_found: &'static str,
    pub already_deleted: &'static str,
    /// When set, an empty listing is reported as 404 with this message
    /// instead of `200 []`.
    pub empty_list: Option<&'static str>,
}

impl Entity {
    pub fn not_found_error(&self) -> CoreError {
        CoreError::NotFound(self.not_found.to_string())
    }

    pub fn already_deleted_error(&self) -> CoreError {
        CoreError::AlreadyDeleted(self.already_deleted.to_string())
    }

    /// Apply the listing policy: `Err(NotFound)` for an empty result on
    /// endpoints that signal emptiness, otherwise the rows unchanged.
    pub fn check_listing<T>(&self, rows: Vec<T>) -> Result<Vec<T>, CoreError> {
        match self.empty_list {
            Some(msg) if rows.is_empty() => Err(CoreError::NotFound(msg.to_string())),
            _ => Ok(rows),
        }
    }
}

pub const EMPRESA: Entity = Entity {
    key: "empresa",
    plural: "empresas",
    created: "Empresa creada con éxito",
    updated: "Datos de Empresa actualizados exitosamente",
    deleted: "Empresa eliminada exitosamente",
    not_found: "Empresa no encontrada",
    already_deleted: "La empresa ya está eliminada",
    empty_list: None,
};

pub const USUARIO: Entity = Entity {
    key: "usuario",
    plural: "usuarios",
    created: "Usuario creado con éxito",
    updated: "Datos de Usuario actualizados con éxito",
    deleted: "Usuario eliminado exitosamente",
    not_found: "Usuario no encontrado",
    already_deleted: "El Usuario ya se encuentra eliminado",
    empty_list: Some("Sin Usuarios guardados"),
};

pub const CONTACTO: Entity = Entity {
    key: "contacto",
    plural: "contactos",
    created: "Datos de Contacto creados exitosamente",
    updated: "Datos de Contacto actualizados exitosamente",
    deleted: "Datos de Contacto eliminados exitosamente",
    not_found: "Datos de Contacto no encontrados",
    already_deleted: "Los Datos de Contacto ya han sido eliminados",
    empty_list: Some("Datos de Contacto no encontrados"),
};

/// Credentials are never soft-deleted through the API; the delete messages
/// exist for completeness of the descriptor.
pub const CREDENCIAL: Entity = Entity {
    key: "credencial",
    plural: "credenciales",
    created: "Credenciales de acceso creadas con éxito",
    updated: "Datos de acceso actualizados exitosamente",
    deleted: "Credenciales eliminadas exitosamente",
    not_found: "Credenciales no encontradas",
    already_deleted: "Las Credenciales ya se encuentran eliminadas",
    empty_list: None,
};

pub const RED: Entity = Entity {
    key: "red",
    plural: "redes_sociales",
    created: "Red Social creada con éxito",
    updated: "Datos actualizados exitosamente",
    deleted: "Red Social eliminada exitosamente",
    not_found: "Red social no encontrada",
    already_deleted: "Los datos de la Red Social ya se encuentran eliminados",
    empty_list: None,
};

pub const SERVICIO: Entity = Entity {
    key: "servicio",
    plural: "servicios",
    created: "Servicio creado con éxito",
    updated: "Servicio actualizado exitosamente",
    deleted: "Servicio eliminado exitosamente",
    not_found: "Servicio no encontrado",
    already_deleted: "El Servicio ya se encuentra eliminado",
    empty_list: None,
};

pub const PORTADA: Entity = Entity {
    key: "portada",
    plural: "portadas",
    created: "Portada creada con éxito",
    updated: "Portada actualizada exitosamente",
    deleted: "Portada eliminada exitosamente",
    not_found: "Portada no encontrada",
    already_deleted: "La Portada ya se encuentra eliminada",
    empty_list: None,
};

pub const NOTICIA: Entity = Entity {
    key: "noticia",
    plural: "noticias",
    created: "Noticia creada con éxito",
    updated: "Datos actualizados exitosamente",
    deleted: "Noticia eliminada exitosamente",
    not_found: "Noticia no encontrada",
    already_deleted: "La Noticia ya se encuentra eliminada",
    empty_list: Some("Sin Noticias/Actividades por el momento"),
};

pub const IMAGEN_NOTICIA: Entity = Entity {
    key: "imagen_noticia",
    plural: "imagenes_noticia",
    created: "Imagen guardada con éxito",
    updated: "Imagen actualizada con éxito",
    deleted: "Imagen eliminada exitosamente",
    not_found: "Imagen no encontrada",
    already_deleted: "La imagen ya se encuentra eliminada",
    empty_list: None,
};

pub const PREFABRICADA: Entity = Entity {
    key: "prefabricada",
    plural: "prefabricadas",
    created: "Prefabricada creada con éxito",
    updated: "Datos actualizados exitosamente",
    deleted: "Prefabricada eliminada exitosamente",
    not_found: "Prefabricada no encontrada",
    already_deleted: "La prefabricada ya se encuentra eliminada",
    empty_list: None,
};

pub const IMAGEN_PREFABRICADA: Entity = Entity {
    key: "imagen_prefabricada",
    plural: "imagenes_prefabricadas",
    created: "Imagen guardada con éxito",
    updated: "Cambios guardados con éxito",
    deleted: "Imagen eliminada exitosamente",
    not_found: "Imagen no encontrada",
    already_deleted: "La imagen ya se encuentra eliminada",
    empty_list: None,
};

pub const CARACTERISTICA: Entity = Entity {
    key: "caracteristica",
    plural: "caracteristicas",
    created: "Característica guardada con éxito",
    updated: "Característica actualizada exitosamente",
    deleted: "Característica eliminada exitosamente",
    not_found: "Característica no encontrada",
    already_deleted: "La Característica ya se encuentra eliminada",
    empty_list: None,
};

pub const PRECIO: Entity = Entity {
    key: "precio",
    plural: "precios",
    created: "Precio guardado con éxito",
    updated: "Precio actualizado exitosamente",
    deleted: "Precio eliminado exitosamente",
    not_found: "Precio no encontrado",
    already_deleted: "El Precio ya se encuentra eliminado",
    empty_list: None,
};

pub const INCLUYE: Entity = Entity {
    key: "incluye",
    plural: "incluyes",
    created: "Incluye creado con éxito",
    updated: "Datos actualizados con éxito",
    deleted: "Incluye eliminado exitosamente",
    not_found: "Incluye no encontrado",
    already_deleted: "El Incluye ya se encuentra eliminado",
    empty_list: Some("Incluyes no encontrados"),
};

pub const CATEGORIA: Entity = Entity {
    key: "categoria",
    plural: "categorias",
    created: "Categoría creada con éxito",
    updated: "Categoría actualizada exitosamente",
    deleted: "Categoría eliminada exitosamente",
    not_found: "Categoría no encontrada",
    already_deleted: "La Categoría ya está eliminada",
    empty_list: None,
};

pub const TIPO: Entity = Entity {
    key: "tipo",
    plural: "tipos",
    created: "Tipo de estructura creado con éxito",
    updated: "Tipo de Estructura actualizado exitosamente",
    deleted: "Tipo de estructura eliminado exitosamente",
    not_found: "Tipo estructura no encontrado",
    already_deleted: "El Tipo de estructura ya está eliminado",
    empty_list: None,
};

/// A categoria/tipo link addressed on its own.
pub const TIPO_CATEGORIA: Entity = Entity {
    key: "tipo_categoria",
    plural: "tipos",
    created: "Tipo asociado a la categoría con éxito",
    updated: "Asociación actualizada exitosamente",
    deleted: "Tipo desvinculado de la categoría exitosamente",
    not_found: "Asociación no encontrada",
    already_deleted: "La asociación ya se encuentra eliminada",
    empty_list: None,
};

pub const ESTILO: Entity = Entity {
    key: "estilo",
    plural: "estilos",
    created: "Estilo creado con éxito",
    updated: "Estilo actualizado exitosamente",
    deleted: "Estilo eliminado exitosamente",
    not_found: "Estilo no encontrado",
    already_deleted: "El Estilo ya está eliminado",
    empty_list: None,
};

pub const ROL: Entity = Entity {
    key: "rol",
    plural: "roles",
    created: "Rol creado con éxito",
    updated: "Rol actualizado con éxito",
    deleted: "Rol eliminado con éxito",
    not_found: "Rol no encontrado",
    already_deleted: "Rol seleccionado ya se encuentra eliminado",
    empty_list: Some("Roles no encontrados"),
};

pub const ROL_USUARIO: Entity = Entity {
    key: "rol_usuario",
    plural: "roles_usuarios",
    created: "Rol_usuario creado con éxito",
    updated: "Datos actualizados con éxito",
    deleted: "Rol_usuario eliminado exitosamente",
    not_found: "Rol_usuario no encontrado",
    already_deleted: "Rol_usuario ya se encuentra eliminado",
    empty_list: Some("Datos no encontrados"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_is_404_only_where_configured() {
        let empty: Vec<i32> = Vec::new();
        assert!(PRECIO.check_listing(empty.clone()).is_ok());

        let err = INCLUYE.check_listing(empty).unwrap_err();
        assert_eq!(err.message(), "Incluyes no encontrados");
    }

    #[test]
    fn non_empty_listing_passes_through() {
        let rows = ROL.check_listing(vec![1, 2]).expect("non-empty list should pass");
        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn lifecycle_errors_carry_entity_messages() {
        assert_eq!(
            PREFABRICADA.already_deleted_error().message(),
            "La prefabricada ya se encuentra eliminada"
        );
        assert_eq!(PREFABRICADA.not_found_error().message(), "Prefabricada no encontrada");
    }
}
