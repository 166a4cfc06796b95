//! Profile Image Storage
//!
//! Opaque storage collaborator for user-uploaded profile images. The
//! application hands over raw bytes and receives back a reference string
//! it can persist; it never interprets the reference. Format validation
//! happens before data reaches this module.

use std::path::PathBuf;

use thiserror::Error;

use crate::crypto::{random_bytes, to_hex};

/// Sentinel reference for accounts that never uploaded an image
pub const DEFAULT_IMAGE_REF: &str = "default.jpg";

/// Image storage errors
#[derive(Debug, Error)]
pub enum ImageStoreError {
    /// Empty upload
    #[error("Image data is empty")]
    EmptyData,

    /// Filesystem failure
    #[error("Image storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Image storage trait
#[trait_variant::make(ImageStore: Send)]
pub trait LocalImageStore {
    /// Store raw image data and return an opaque reference
    async fn store(&self, data: &[u8]) -> Result<String, ImageStoreError>;
}

/// Filesystem-backed image store
///
/// Writes each upload under `root` with a random hex name. References
/// are bare file names, never paths, so they can be embedded in URLs.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn random_name() -> String {
        format!("{}.jpg", to_hex(&random_bytes(8)))
    }
}

impl ImageStore for FsImageStore {
    async fn store(&self, data: &[u8]) -> Result<String, ImageStoreError> {
        if data.is_empty() {
            return Err(ImageStoreError::EmptyData);
        }

        tokio::fs::create_dir_all(&self.root).await?;

        let name = Self::random_name();
        let path = self.root.join(&name);
        tokio::fs::write(&path, data).await?;

        tracing::debug!(image_ref = %name, "Stored profile image");

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> FsImageStore {
        let dir = std::env::temp_dir().join(format!("image-store-{}", to_hex(&random_bytes(6))));
        FsImageStore::new(dir)
    }

    // Calls are qualified: `LocalImageStore` has a blanket impl for
    // `ImageStore` types, so method syntax is ambiguous here.
    #[tokio::test]
    async fn test_store_returns_bare_name() {
        let store = temp_store();
        let image_ref = ImageStore::store(&store, b"\xff\xd8\xff\xe0fakejpeg")
            .await
            .unwrap();
        assert!(image_ref.ends_with(".jpg"));
        assert!(!image_ref.contains('/'));
    }

    #[tokio::test]
    async fn test_store_writes_bytes() {
        let store = temp_store();
        let data = b"\xff\xd8\xff\xe0fakejpeg".to_vec();
        let image_ref = ImageStore::store(&store, &data).await.unwrap();
        let written = tokio::fs::read(store.root.join(&image_ref)).await.unwrap();
        assert_eq!(written, data);
    }

    #[tokio::test]
    async fn test_store_rejects_empty_data() {
        let store = temp_store();
        let result = ImageStore::store(&store, b"").await;
        assert!(matches!(result, Err(ImageStoreError::EmptyData)));
    }

    #[tokio::test]
    async fn test_distinct_names() {
        let store = temp_store();
        let a = ImageStore::store(&store, b"one").await.unwrap();
        let b = ImageStore::store(&store, b"two").await.unwrap();
        assert_ne!(a, b);
    }
}
