use serde::de::DeserializeOwned;

use crate::model::Records;
use crate::BlobStorageProvider;

#[derive(Debug)]
pub enum Error {
    /// An error originating from trying to read the blob
    Read(std::io::Error),
    /// The blob is not valid JSON or does not follow the expected schema
    Parse(serde_json::Error),
    /// The blob does not exist
    NotFound(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::NotFound(_) => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(e) => std::fmt::Display::fmt(&e, f),
            Self::Parse(e) => std::fmt::Display::fmt(&e, f),
            Self::NotFound(blob_name) => write!(f, "{blob_name} not found"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Read(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Returns the records of the JSON dataset at `key`.
/// The dataset is either a list of records or an object with a `data` list.
pub async fn get_json<D: DeserializeOwned>(
    key: &str,
    client: &dyn BlobStorageProvider,
) -> Result<Vec<D>, Error> {
    let content = client
        .maybe_get(key)
        .await?
        .ok_or_else(|| Error::NotFound(key.to_string()))?;

    let records: Records<D> = serde_json::from_slice(&content)?;
    Ok(records.into())
}
