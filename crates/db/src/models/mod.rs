//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs for live rows (never exposing
//!   `deleted_at` or password hashes)
//! - `Deserialize` create DTOs with a `validate()` method; updates are full
//!   replacements and reuse the create shape unless noted
//! - embedded read models (`*Detail`) where a response nests children

pub mod catalogo;
pub mod credencial;
pub mod dashboard;
pub mod empresa;
pub mod noticia;
pub mod portada;
pub mod precio;
pub mod prefabricada;
pub mod recuperacion;
pub mod red;
pub mod rol;
pub mod servicio;
pub mod usuario;
