//! Amazon S3 storage.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use crate::naming::{content_type, object_key};
use crate::{ObjectStorage, StorageError};

/// Bucket settings for [`S3Storage`].
#[derive(Debug, Clone)]
pub struct S3Config {
    pub region: String,
    pub bucket: String,
    /// Static keys; when absent the default provider chain is used.
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl S3Config {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless both `AWS_REGION` and `AWS_S3_BUCKET` are set.
    ///
    /// | Variable                | Required | Default |
    /// |-------------------------|----------|---------|
    /// | `AWS_REGION`            | yes      | -       |
    /// | `AWS_S3_BUCKET`         | yes      | -       |
    /// | `AWS_ACCESS_KEY_ID`     | no       | -       |
    /// | `AWS_SECRET_ACCESS_KEY` | no       | -       |
    pub fn from_env() -> Option<Self> {
        let region = std::env::var("AWS_REGION").ok().filter(|v| !v.is_empty())?;
        let bucket = std::env::var("AWS_S3_BUCKET").ok().filter(|v| !v.is_empty())?;
        Some(Self {
            region,
            bucket,
            access_key_id: std::env::var("AWS_ACCESS_KEY_ID").ok(),
            secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
        })
    }

    /// Public URL of an object in this bucket.
    pub fn public_url(&self, key: &str) -> String {
        format!("https://{}.s3.{}.amazonaws.com/{key}", self.bucket, self.region)
    }
}

pub struct S3Storage {
    client: Client,
    config: S3Config,
}

impl S3Storage {
    pub async fn connect(config: S3Config) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
        if let (Some(key), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
            loader = loader.credentials_provider(Credentials::new(
                key.clone(),
                secret.clone(),
                None,
                None,
                "environment",
            ));
        }
        let sdk_config = loader.load().await;
        tracing::info!(bucket = %config.bucket, region = %config.region, "S3 storage configured");
        Self {
            client: Client::new(&sdk_config),
            config,
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        folder: &str,
        filename: &str,
    ) -> Result<String, StorageError> {
        if bytes.is_empty() {
            return Err(StorageError::Empty);
        }
        let key = object_key(folder, filename);
        let mime = content_type(&bytes);

        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(&key)
            .content_type(mime)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload(DisplayErrorContext(e).to_string()))?;

        tracing::debug!(key = %key, content_type = mime, "Object uploaded");
        Ok(self.config.public_url(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_format() {
        let config = S3Config {
            region: "sa-east-1".into(),
            bucket: "prefabricadas".into(),
            access_key_id: None,
            secret_access_key: None,
        };
        assert_eq!(
            config.public_url("portadas/abc-frente.png"),
            "https://prefabricadas.s3.sa-east-1.amazonaws.com/portadas/abc-frente.png"
        );
    }
}
