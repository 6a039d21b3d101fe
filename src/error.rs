//! Error types for ytdlp-bridge
//!
//! Every failure a request can hit has its own variant, so callers can tell
//! "the engine could not be started" apart from "the engine ran but printed
//! nothing usable". Each variant also carries a machine-readable code for
//! logs and tool hosts.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ytdlp-bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ytdlp-bridge
#[derive(Debug, Error)]
pub enum Error {
    /// Request rejected before the engine was started
    #[error("{0}")]
    Validation(String),

    /// The engine binary could not be located or spawned
    #[error("failed to execute yt-dlp: {0}")]
    EngineInvocation(String),

    /// The engine ran and exited with a non-zero code
    #[error("yt-dlp exited with code {code}: {stderr}")]
    EngineExit {
        /// Exit code reported by the process (-1 when killed by a signal)
        code: i32,
        /// Everything the engine wrote to stderr
        stderr: String,
    },

    /// The engine exited with code 0 without printing anything
    #[error("yt-dlp exited successfully but printed nothing")]
    EmptyOutput,

    /// No stdout line decoded into a record with both `_filename` and `ext`
    #[error("no valid JSON record with file information found in yt-dlp output")]
    NoValidRecord,

    /// The info dump could not be decoded
    #[error("failed to parse yt-dlp output: {0}")]
    MalformedOutput(String),

    /// The engine reported success but the file is not on disk
    #[error("file was not created or could not be found: {path}\nstderr: {stderr}\nstdout: {stdout}")]
    ArtifactMissing {
        /// Path the engine claimed to have written
        path: PathBuf,
        /// Captured engine stdout
        stdout: String,
        /// Captured engine stderr
        stderr: String,
    },

    /// The caller's confirmation rejected the file
    #[error("saving the file was cancelled by the caller: {path}")]
    SaveCancelled {
        /// Path of the discarded artifact
        path: PathBuf,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "ytdlp_path")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation_error",
            Error::EngineInvocation(_) => "engine_invocation_failed",
            Error::EngineExit { .. } => "engine_exit_failed",
            Error::EmptyOutput => "empty_output",
            Error::NoValidRecord => "no_valid_record",
            Error::MalformedOutput(_) => "malformed_output",
            Error::ArtifactMissing { .. } => "artifact_missing",
            Error::SaveCancelled { .. } => "save_cancelled",
            Error::Config { .. } => "config_error",
            Error::Io(_) => "io_error",
        }
    }
}
