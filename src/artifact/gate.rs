//! Existence check and save confirmation for downloaded files

use super::traits::{ArtifactStore, SaveConfirmation};
use crate::error::{Error, Result};
use crate::types::{ArtifactRecord, ProcessOutcome};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Final check between a parsed record and a successful result
pub struct ArtifactGate<'a> {
    store: &'a dyn ArtifactStore,
}

impl<'a> ArtifactGate<'a> {
    /// Create a gate over `store`
    pub fn new(store: &'a dyn ArtifactStore) -> Self {
        Self { store }
    }

    /// Admit the file described by `record`
    ///
    /// Returns the absolute path of the file. The path is made absolute
    /// against the current directory, since yt-dlp prints it as written in
    /// the template.
    ///
    /// # Errors
    ///
    /// - [`Error::ArtifactMissing`] if the file does not exist, carrying the
    ///   engine's stdout and stderr
    /// - [`Error::SaveCancelled`] if `confirm` rejects the file; the file is
    ///   removed first, and a failed removal is only logged
    pub async fn admit(
        &self,
        record: &ArtifactRecord,
        outcome: &ProcessOutcome,
        confirm: Option<&dyn SaveConfirmation>,
    ) -> Result<PathBuf> {
        let path = std::path::absolute(&record.file_path)?;

        if !self.store.exists(&path).await {
            return Err(Error::ArtifactMissing {
                path,
                stdout: outcome.stdout.clone(),
                stderr: outcome.stderr.clone(),
            });
        }

        let Some(confirm) = confirm else {
            return Ok(path);
        };

        debug!(?path, "awaiting save confirmation");
        if confirm.confirm(&path).await {
            return Ok(path);
        }

        match self.store.remove(&path).await {
            Ok(()) => info!(?path, "removed rejected artifact"),
            Err(e) => warn!(?path, error = %e, "failed to remove rejected artifact"),
        }
        Err(Error::SaveCancelled { path })
    }
}
