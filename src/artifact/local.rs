//! Local filesystem artifact store

use super::traits::ArtifactStore;
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

/// [`ArtifactStore`] backed by the local filesystem via `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalArtifactStore;

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn exists(&self, path: &Path) -> bool {
        match tokio::fs::try_exists(path).await {
            Ok(exists) => exists,
            Err(e) => {
                debug!(?path, error = %e, "could not check artifact, treating as missing");
                false
            }
        }
    }

    async fn remove(&self, path: &Path) -> std::io::Result<()> {
        tokio::fs::remove_file(path).await
    }
}
