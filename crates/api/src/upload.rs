//! `multipart/form-data` bodies for the entities that carry an image.
//!
//! The whole form is read first so text fields can be validated before
//! anything is uploaded. The binary part is always named `image`.

use std::collections::HashMap;

use axum::extract::Multipart;
use prefab_cloud::ObjectStorage;

use crate::error::{AppError, AppResult};

const IMAGE_FIELD: &str = "image";
const DEFAULT_FILENAME: &str = "imagen";
const IMAGE_REQUIRED: &str = "La imagen es obligatoria";

/// An uploaded file held in memory.
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A parsed multipart form.
#[derive(Debug, Default)]
pub struct ImageForm {
    fields: HashMap<String, String>,
    image: Option<ImagePart>,
}

impl ImageForm {
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = ImageForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name == IMAGE_FIELD {
                let filename = field.file_name().unwrap_or(DEFAULT_FILENAME).to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // A file input left blank still submits an empty part.
                if !bytes.is_empty() {
                    form.image = Some(ImagePart {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            } else if !name.is_empty() {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    /// Text field `name`, empty when absent.
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Upload the image to `folder` and return its public URL. Errors with
    /// `400 "La imagen es obligatoria"` when no image was sent.
    pub async fn store_required(
        self,
        storage: &dyn ObjectStorage,
        folder: &str,
    ) -> AppResult<String> {
        self.store_optional(storage, folder)
            .await?
            .ok_or_else(|| AppError::BadRequest(IMAGE_REQUIRED.into()))
    }

    /// Upload the image if one was sent.
    pub async fn store_optional(
        self,
        storage: &dyn ObjectStorage,
        folder: &str,
    ) -> AppResult<Option<String>> {
        let Some(image) = self.image else {
            return Ok(None);
        };
        let url = storage.upload(image.bytes, folder, &image.filename).await?;
        tracing::debug!(folder, url = %url, "Image uploaded");
        Ok(Some(url))
    }

    /// Fail early, before any text validation or upload, when a create
    /// request carries no image.
    pub fn require_image(&self) -> AppResult<()> {
        if self.has_image() {
            Ok(())
        } else {
            Err(AppError::BadRequest(IMAGE_REQUIRED.into()))
        }
    }
}

#[cfg(test)]
impl ImageForm {
    pub fn from_parts(fields: &[(&str, &str)], image: Option<ImagePart>) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image,
        }
    }
}
