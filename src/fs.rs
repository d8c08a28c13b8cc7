use std::collections::HashMap;

use async_trait::async_trait;

/// An object that can be used to get blobs.
#[async_trait]
pub trait BlobStorageProvider: Sync {
    /// Returns the contents of `blob_name`, or `None` if it does not exist.
    async fn maybe_get(&self, blob_name: &str) -> Result<Option<Vec<u8>>, std::io::Error>;
}

/// A [`BlobStorageProvider`] for local disk
pub struct LocalDisk;

#[async_trait]
impl BlobStorageProvider for LocalDisk {
    async fn maybe_get(&self, blob_name: &str) -> Result<Option<Vec<u8>>, std::io::Error> {
        if std::path::Path::new(blob_name).try_exists()? {
            Ok(Some(std::fs::read(blob_name)?))
        } else {
            Ok(None)
        }
    }
}

/// An in-memory [`BlobStorageProvider`], keyed by blob name
#[async_trait]
impl BlobStorageProvider for HashMap<String, Vec<u8>> {
    async fn maybe_get(&self, blob_name: &str) -> Result<Option<Vec<u8>>, std::io::Error> {
        Ok(self.get(blob_name).cloned())
    }
}
