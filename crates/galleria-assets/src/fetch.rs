//! Transport: getting raw bytes for a resource location
//!
//! Locations starting with `http://` or `https://` are fetched over the
//! network; everything else is read from disk, with relative paths resolved
//! against the transport's base path.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;

use crate::error::TransportError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared byte transport used by every in-flight load.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base_path: PathBuf,
}

impl Transport {
    /// Create a transport resolving relative locations against `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_path: base_path.into(),
        }
    }

    /// Create a transport with an injected HTTP client.
    pub fn with_client(base_path: impl Into<PathBuf>, client: Client) -> Self {
        Self {
            client,
            base_path: base_path.into(),
        }
    }

    /// The base path relative file locations resolve against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a location that names a file on disk.
    fn resolve(&self, location: &str) -> PathBuf {
        let path = Path::new(location);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Fetch the raw bytes at `location`.
    pub async fn fetch(&self, location: &str) -> Result<Vec<u8>, TransportError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let response = self.client.get(location).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status(status.as_u16()));
            }
            Ok(response.bytes().await?.to_vec())
        } else {
            let path = self.resolve(location);
            Ok(tokio::fs::read(&path).await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn resolves_relative_against_base() {
        let transport = Transport::new("/var/tour/assets");
        assert_eq!(
            transport.resolve("models/hall.gltf"),
            PathBuf::from("/var/tour/assets/models/hall.gltf")
        );
    }

    #[test]
    fn keeps_absolute_paths() {
        let transport = Transport::new("/var/tour/assets");
        assert_eq!(
            transport.resolve("/elsewhere/hall.gltf"),
            PathBuf::from("/elsewhere/hall.gltf")
        );
    }

    #[tokio::test]
    async fn reads_local_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("notes.json")).unwrap();
        file.write_all(b"{\"era\":\"Western Zhou\"}").unwrap();

        let transport = Transport::new(dir.path());
        let bytes = transport.fetch("notes.json").await.unwrap();
        assert_eq!(bytes, b"{\"era\":\"Western Zhou\"}");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let transport = Transport::new(dir.path());
        let err = transport.fetch("ghost.bin").await.unwrap_err();
        assert!(matches!(err, TransportError::Io(_)));
    }
}
