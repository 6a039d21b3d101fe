//! Traits for artifact storage and save confirmation

use async_trait::async_trait;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Storage holding the files the engine produces
///
/// The gate only needs to ask whether a file exists and to remove a
/// rejected one. Tests substitute an in-memory implementation.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Whether `path` exists right now
    async fn exists(&self, path: &Path) -> bool;

    /// Remove the file at `path`
    async fn remove(&self, path: &Path) -> std::io::Result<()>;
}

/// Caller decision on whether a downloaded file should be kept
///
/// Passed per call to [`MediaDownloader::download`](crate::MediaDownloader::download);
/// returning `false` deletes the file and turns the download into an error.
///
/// # Examples
///
/// ```
/// use ytdlp_bridge::artifact::{ConfirmFn, SaveConfirmation};
/// use std::path::Path;
///
/// # #[tokio::main]
/// # async fn main() {
/// let only_mp4 = ConfirmFn(|path: std::path::PathBuf| async move {
///     path.extension().is_some_and(|ext| ext == "mp4")
/// });
/// assert!(only_mp4.confirm(Path::new("/tmp/clip.mp4")).await);
/// assert!(!only_mp4.confirm(Path::new("/tmp/clip.webm")).await);
/// # }
/// ```
#[async_trait]
pub trait SaveConfirmation: Send + Sync {
    /// Decide whether to keep the file at `path`
    async fn confirm(&self, path: &Path) -> bool;
}

/// Adapter turning an async closure into a [`SaveConfirmation`]
pub struct ConfirmFn<F>(pub F);

#[async_trait]
impl<F, Fut> SaveConfirmation for ConfirmFn<F>
where
    F: Fn(PathBuf) -> Fut + Send + Sync,
    Fut: Future<Output = bool> + Send,
{
    async fn confirm(&self, path: &Path) -> bool {
        (self.0)(path.to_path_buf()).await
    }
}
