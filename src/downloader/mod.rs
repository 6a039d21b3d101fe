//! Request orchestration
//!
//! [`MediaDownloader`] ties the pieces together for each request:
//! validate, build arguments, run yt-dlp, interpret its output, gate the
//! artifact and assemble the result. The submodule:
//! - [`assemble`] - Success envelopes

pub mod assemble;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

use crate::artifact::{ArtifactGate, ArtifactStore, LocalArtifactStore, SaveConfirmation};
use crate::config::Config;
use crate::engine::{self, ProcessRunner, TokioProcessRunner};
use crate::error::{Error, Result};
use crate::types::{
    DownloadRequest, DownloadResult, InfoRequest, InfoResult, ProcessOutcome, Stage,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Envelope message prefix for unexpected failures while reading engine output
pub const OUTPUT_UNINTERPRETABLE: &str = "failed to interpret yt-dlp output";

/// Front door for downloads and metadata fetches
///
/// Holds only immutable configuration and shared collaborators, so one
/// instance can serve any number of concurrent requests. Every request gets
/// its own process and buffers.
///
/// Both operations return an envelope instead of `Err`: every failure
/// becomes `status: error` with a message.
#[derive(Clone)]
pub struct MediaDownloader {
    config: Arc<Config>,
    runner: Arc<dyn ProcessRunner>,
    store: Arc<dyn ArtifactStore>,
}

impl MediaDownloader {
    /// Create a downloader that spawns the real engine and checks the local filesystem
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_components(
            config,
            Arc::new(TokioProcessRunner),
            Arc::new(LocalArtifactStore),
        )
    }

    /// Create a downloader configured from the environment (see [`Config::from_env`])
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    /// Create a downloader whose engine path is resolved through PATH up front
    ///
    /// A missing engine then fails here instead of on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid or a bare
    /// engine name is not found in PATH.
    pub fn with_located_engine(mut config: Config) -> Result<Self> {
        config.validate()?;
        config.ytdlp_path = config.locate_engine()?;
        Self::new(config)
    }

    /// Create a downloader with explicit collaborators
    pub fn with_components(
        config: Config,
        runner: Arc<dyn ProcessRunner>,
        store: Arc<dyn ArtifactStore>,
    ) -> Result<Self> {
        config.validate()?;
        debug!(
            ytdlp_path = %config.ytdlp_path.display(),
            runner = runner.name(),
            "media downloader ready"
        );
        Ok(Self {
            config: Arc::new(config),
            runner,
            store,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Download the resource named by `request`
    ///
    /// When `confirm` is given it is asked, after the file exists, whether
    /// to keep it; rejection deletes the file and yields an error envelope.
    pub async fn download(
        &self,
        request: &DownloadRequest,
        confirm: Option<&dyn SaveConfirmation>,
    ) -> DownloadResult {
        match self.try_download(request, confirm).await {
            Ok(result) => {
                info!(
                    url = %request.url,
                    file_path = ?result.file_path,
                    "download complete"
                );
                result
            }
            Err(e) => {
                warn!(url = %request.url, code = e.error_code(), error = %e, "download failed");
                DownloadResult::error(envelope_message(&e))
            }
        }
    }

    /// Fetch metadata for `request` without downloading
    pub async fn get_info(&self, request: &InfoRequest) -> InfoResult {
        match self.try_get_info(request).await {
            Ok(result) => {
                info!(url = %request.url, "info fetched");
                result
            }
            Err(e) => {
                warn!(url = %request.url, code = e.error_code(), error = %e, "info fetch failed");
                InfoResult::error(envelope_message(&e))
            }
        }
    }

    async fn try_download(
        &self,
        request: &DownloadRequest,
        confirm: Option<&dyn SaveConfirmation>,
    ) -> Result<DownloadResult> {
        debug!(url = %request.url, stage = %Stage::Validating, "download requested");
        let default_dir = self.config.default_output_dir();
        let args = engine::build_download_args(request, &default_dir)?;

        let outcome = self.invoke(&args).await?;

        debug!(url = %request.url, stage = %Stage::Parsing, "interpreting engine output");
        let record = engine::extract_download_record(&outcome.stdout)?;

        debug!(
            url = %request.url,
            stage = %Stage::Gating,
            file = %record.file_path,
            "checking artifact"
        );
        let path = ArtifactGate::new(self.store.as_ref())
            .admit(&record, &outcome, confirm)
            .await?;

        debug!(url = %request.url, stage = %Stage::Assembling, "building result");
        Ok(assemble::download_success(
            record,
            path,
            request.extract_audio_only,
        ))
    }

    async fn try_get_info(&self, request: &InfoRequest) -> Result<InfoResult> {
        debug!(url = %request.url, stage = %Stage::Validating, "info requested");
        let args = engine::build_info_args(request)?;

        let outcome = self.invoke(&args).await?;

        debug!(url = %request.url, stage = %Stage::Parsing, "decoding info dump");
        let info = engine::parse_info_record(&outcome.stdout)?;

        Ok(assemble::info_success(info))
    }

    /// Run the engine and turn a non-zero exit into [`Error::EngineExit`]
    async fn invoke(&self, args: &[String]) -> Result<ProcessOutcome> {
        debug!(stage = %Stage::Invoking, runner = self.runner.name(), "running yt-dlp");
        let outcome = self.runner.run(&self.config.ytdlp_path, args).await?;

        if !outcome.success() {
            return Err(Error::EngineExit {
                code: outcome.exit_code,
                stderr: outcome.stderr,
            });
        }
        Ok(outcome)
    }
}

/// Message placed in an error envelope
///
/// Expected failures keep their own message; an I/O failure is reported as
/// output that could not be interpreted.
fn envelope_message(e: &Error) -> String {
    match e {
        Error::Io(source) => format!("{OUTPUT_UNINTERPRETABLE}: {source}"),
        other => other.to_string(),
    }
}
