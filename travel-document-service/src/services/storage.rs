use super::image::EncodedImage;
use super::naming::is_safe_filename;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("refusing to store under name {0:?}")]
    InvalidName(String),
}

/// Write-once content store for generated images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<(), StorageError>;
}

pub struct LocalImageStore {
    base_path: PathBuf,
}

impl LocalImageStore {
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<(), StorageError> {
        if !is_safe_filename(filename) {
            return Err(StorageError::InvalidName(filename.to_string()));
        }

        let path = self.base_path.join(filename);
        fs::write(&path, data).await?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Image stored");
        Ok(())
    }
}

/// Where a generated image ends up and how clients reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedImage {
    pub filename: String,
    /// Public URL path for stored files, or a `data:` URI when inline.
    pub content_ref: String,
}

#[derive(Clone)]
pub enum ImagePublisher {
    File {
        store: Arc<dyn ImageStore>,
        public_path: String,
    },
    Inline,
}

impl ImagePublisher {
    pub async fn publish(&self, image: &EncodedImage) -> Result<PublishedImage, StorageError> {
        let filename = image.suggested_filename.clone();

        match self {
            ImagePublisher::File { store, public_path } => {
                store.save(&filename, &image.bytes).await?;
                let content_ref = format!("{}/{}", public_path.trim_end_matches('/'), filename);
                Ok(PublishedImage {
                    filename,
                    content_ref,
                })
            }
            ImagePublisher::Inline => Ok(PublishedImage {
                filename,
                content_ref: image.data_uri(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::image::{ImageFormat, ImageKind};
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("travel-doc-store-{}", Uuid::new_v4()))
    }

    fn sample_image(name: &str) -> EncodedImage {
        EncodedImage {
            kind: ImageKind::QrCode,
            format: ImageFormat::Png,
            bytes: vec![0x89, b'P', b'N', b'G'],
            suggested_filename: name.to_string(),
        }
    }

    #[tokio::test]
    async fn new_creates_missing_directory() {
        let dir = temp_dir().join("nested");
        let store = LocalImageStore::new(&dir).await.unwrap();

        assert!(store.base_path().is_dir());
        let _ = fs::remove_dir_all(dir.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn file_publisher_writes_and_returns_public_url() {
        let dir = temp_dir();
        let store = Arc::new(LocalImageStore::new(&dir).await.unwrap());
        let publisher = ImagePublisher::File {
            store,
            public_path: "/static/images/".to_string(),
        };

        let published = publisher
            .publish(&sample_image("qr_code_20250910_131507_deadbeef.png"))
            .await
            .unwrap();

        assert_eq!(published.filename, "qr_code_20250910_131507_deadbeef.png");
        assert_eq!(
            published.content_ref,
            "/static/images/qr_code_20250910_131507_deadbeef.png"
        );
        let written = fs::read(dir.join(&published.filename)).await.unwrap();
        assert_eq!(written, vec![0x89, b'P', b'N', b'G']);

        let _ = fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn inline_publisher_returns_data_uri() {
        let published = ImagePublisher::Inline
            .publish(&sample_image("barcode_x.png"))
            .await
            .unwrap();

        assert!(published.content_ref.starts_with("data:image/png;base64,"));
        assert_eq!(published.filename, "barcode_x.png");
    }

    #[tokio::test]
    async fn traversal_names_are_refused() {
        let dir = temp_dir();
        let store = LocalImageStore::new(&dir).await.unwrap();

        let err = store.save("../escape.png", b"x").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidName(_)));

        let _ = fs::remove_dir_all(dir).await;
    }
}
