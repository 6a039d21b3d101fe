//! Request, record and result types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Default quality preference
pub const DEFAULT_QUALITY: &str = "best";

/// Parameters of a download request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Resource locator passed to the engine (required, non-empty)
    #[serde(default)]
    pub url: String,

    /// Quality preference (default: "best")
    ///
    /// Accepted for compatibility; it is not translated into an engine
    /// argument.
    #[serde(default = "default_quality")]
    pub quality_preference: String,

    /// Preferred video container (default when building arguments: "mp4")
    #[serde(default)]
    pub video_container_preference: Option<String>,

    /// Preferred audio container, honoured only for m4a, mp3, ogg and opus
    #[serde(default)]
    pub audio_container_preference: Option<String>,

    /// Explicit output path; a literal extension is replaced by the engine's
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// Output directory for this request when no explicit path is given
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Extract the audio track only
    #[serde(default)]
    pub extract_audio_only: bool,
}

impl DownloadRequest {
    /// Create a request for `url` with every preference at its default
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl Default for DownloadRequest {
    fn default() -> Self {
        Self {
            url: String::new(),
            quality_preference: default_quality(),
            video_container_preference: None,
            audio_container_preference: None,
            output_path: None,
            output_dir: None,
            extract_audio_only: false,
        }
    }
}

fn default_quality() -> String {
    DEFAULT_QUALITY.to_string()
}

/// Parameters of a metadata-only request
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRequest {
    /// Resource locator passed to the engine (required, non-empty)
    #[serde(default)]
    pub url: String,
}

impl InfoRequest {
    /// Create an info request for `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Exit code and captured output of one engine run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Exit code (-1 when the process was terminated by a signal)
    pub exit_code: i32,
    /// Everything written to stdout
    pub stdout: String,
    /// Everything written to stderr
    pub stderr: String,
}

impl ProcessOutcome {
    /// Whether the process exited with code 0
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// A decoded engine record describing a produced file
///
/// Only records carrying non-empty `_filename` and `ext` strings are
/// considered download results.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtifactRecord {
    /// Path the engine wrote to (the `_filename` field, as printed)
    pub file_path: String,
    /// Final file extension
    pub ext: String,
    /// Final audio codec, when reported
    pub acodec: Option<String>,
    /// The complete decoded record
    pub metadata: Value,
}

impl ArtifactRecord {
    /// Build a record from a decoded JSON value, if it is a download result
    pub fn from_value(value: Value) -> Option<Self> {
        let file_path = non_empty_str(&value, "_filename")?;
        let ext = non_empty_str(&value, "ext")?;
        let acodec = value
            .get("acodec")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self {
            file_path,
            ext,
            acodec,
            metadata: value,
        })
    }
}

fn non_empty_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Metadata printed by `--dump-json`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoInfoRecord {
    /// Media title
    #[serde(default)]
    pub title: Option<String>,
    /// Uploader name
    #[serde(default)]
    pub uploader: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    /// Thumbnail URL
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Available formats, as printed by the engine
    #[serde(default)]
    pub formats: Option<Vec<Value>>,
}

impl VideoInfoRecord {
    /// Take the known fields from a decoded dump, skipping any of the wrong type
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            title: text("title"),
            uploader: text("uploader"),
            duration: value.get("duration").and_then(Value::as_f64),
            thumbnail: text("thumbnail"),
            formats: value.get("formats").and_then(Value::as_array).cloned(),
        }
    }
}

/// Outcome status of an operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The operation completed
    Success,
    /// The operation failed; see the message
    Error,
}

/// Result envelope of a download
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DownloadResult {
    /// Outcome status
    pub status: Status,
    /// Human-readable message
    pub message: String,
    /// Absolute path of the saved file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    /// Filename as printed by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Final container/extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_video_format: Option<String>,
    /// Final audio codec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_audio_format: Option<String>,
    /// Full engine record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl DownloadResult {
    /// An error envelope carrying only a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            file_path: None,
            filename: None,
            final_video_format: None,
            final_audio_format: None,
            metadata: None,
        }
    }

    /// Whether the status is [`Status::Success`]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Result envelope of a metadata fetch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfoResult {
    /// Outcome status
    pub status: Status,
    /// Error message (absent on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Media title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_title: Option<String>,
    /// Uploader name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Available formats
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_formats: Option<Vec<Value>>,
}

impl InfoResult {
    /// An error envelope carrying only a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            video_title: None,
            uploader: None,
            duration: None,
            thumbnail_url: None,
            available_formats: None,
        }
    }

    /// Whether the status is [`Status::Success`]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Step of a request, used in log fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Checking the request
    Validating,
    /// Running the engine
    Invoking,
    /// Interpreting engine output
    Parsing,
    /// Checking and confirming the artifact
    Gating,
    /// Building the result envelope
    Assembling,
}

impl Stage {
    /// Lowercase stage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Validating => "validating",
            Stage::Invoking => "invoking",
            Stage::Parsing => "parsing",
            Stage::Gating => "gating",
            Stage::Assembling => "assembling",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
