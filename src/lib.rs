//! # ytdlp-bridge
//!
//! Async orchestration of the `yt-dlp` command-line downloader.
//!
//! ## Design Philosophy
//!
//! ytdlp-bridge is designed to be:
//! - **Thin** - yt-dlp does the downloading; this crate builds its arguments,
//!   runs it and interprets what it prints
//! - **Envelope-based** - Every failure becomes a `status: error` result with
//!   a readable message, never a panic
//! - **Library-first** - No CLI or UI; the [`tools`] module adapts the two
//!   operations for agent hosts
//! - **Substitutable** - Process execution and file checks sit behind traits
//!
//! ## Quick Start
//!
//! ```no_run
//! use ytdlp_bridge::{Config, DownloadRequest, MediaDownloader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         output_dir: Some("/srv/media".into()),
//!         ..Default::default()
//!     };
//!     let downloader = MediaDownloader::new(config)?;
//!
//!     let request = DownloadRequest {
//!         extract_audio_only: true,
//!         audio_container_preference: Some("mp3".to_string()),
//!         ..DownloadRequest::new("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!     };
//!     let result = downloader.download(&request, None).await;
//!     println!("{:?}: {}", result.status, result.message);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Artifact existence checks and save confirmation
pub mod artifact;
/// Configuration types
pub mod config;
/// Request orchestration
pub mod downloader;
/// yt-dlp argument building, process execution and output parsing
pub mod engine;
/// Error types
pub mod error;
/// Agent tool boundary
pub mod tools;
/// Core types
pub mod types;

// Re-export commonly used types
pub use artifact::{ArtifactStore, ConfirmFn, LocalArtifactStore, SaveConfirmation};
pub use config::Config;
pub use downloader::MediaDownloader;
pub use engine::{ProcessRunner, TokioProcessRunner};
pub use error::{Error, Result};
pub use tools::{ToolDefinition, ToolError};
pub use types::{
    ArtifactRecord, DownloadRequest, DownloadResult, InfoRequest, InfoResult, ProcessOutcome,
    Stage, Status, VideoInfoRecord,
};
