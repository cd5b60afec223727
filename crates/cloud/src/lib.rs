//! Object storage for uploaded images.
//!
//! Handlers call [`ObjectStorage::upload`] and persist the returned public
//! URL. [`S3Storage`] is used when AWS is configured; [`MemoryStorage`]
//! backs tests and local runs.

pub mod memory;
pub mod naming;
pub mod s3;

use async_trait::async_trait;

pub use memory::MemoryStorage;
pub use s3::{S3Config, S3Storage};

/// Per-entity folders uploads are stored under.
pub mod folders {
    pub const USUARIOS: &str = "imagenes_usuarios";
    pub const PORTADAS: &str = "portadas";
    pub const NOTICIAS: &str = "imagenes_noticias";
    pub const PREFABRICADAS: &str = "imagenes_prefabricadas";
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Empty upload")]
    Empty,

    #[error("Storage upload failed: {0}")]
    Upload(String),
}

/// Store a file, get back its public URL.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        folder: &str,
        filename: &str,
    ) -> Result<String, StorageError>;
}
