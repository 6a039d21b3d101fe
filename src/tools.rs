//! Agent tool boundary
//!
//! Exposes [`MediaDownloader::get_info`] and [`MediaDownloader::download`]
//! as two tools that take JSON parameters and return a short text summary.
//! An agent host registers them from [`tool_definitions`] and dispatches
//! calls through [`call_tool`].
//!
//! Error envelopes from the downloader are turned into
//! [`ToolError::User`] so the host can show the message as-is; malformed
//! parameters become [`ToolError::InvalidParams`].

use crate::downloader::MediaDownloader;
use crate::types::{DownloadRequest, DownloadResult, InfoRequest, InfoResult, Status};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Name of the metadata tool
pub const GET_VIDEO_INFO: &str = "get_video_info";
/// Name of the download tool
pub const DOWNLOAD_VIDEO: &str = "download_video";

const FALLBACK_ERROR: &str = "unknown error";
const UNKNOWN_FIELD: &str = "unknown";

/// Errors surfaced to the agent host
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    /// The operation ran and failed; the message is meant for the end user
    #[error("{0}")]
    User(String),

    /// The parameters did not match the tool's schema
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// No tool is registered under this name
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

/// Parameters of the `get_video_info` tool
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetVideoInfoParams {
    /// Absolute URL of the video
    pub url: String,
}

/// Parameters of the `download_video` tool
///
/// Keys outside the schema are ignored, as for `get_video_info`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DownloadVideoParams {
    /// Absolute URL of the video
    pub url: String,
    /// Free-form quality preference
    #[serde(default)]
    pub quality_preference: Option<String>,
    /// Preferred video container
    #[serde(default)]
    pub video_container_preference: Option<String>,
    /// Preferred audio container
    #[serde(default)]
    pub audio_container_preference: Option<String>,
    /// Explicit output path
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// Extract the audio track only
    #[serde(default)]
    pub extract_audio_only: bool,
}

impl From<DownloadVideoParams> for DownloadRequest {
    fn from(params: DownloadVideoParams) -> Self {
        let mut request = DownloadRequest::new(params.url);
        if let Some(quality) = params.quality_preference {
            request.quality_preference = quality;
        }
        request.video_container_preference = params.video_container_preference;
        request.audio_container_preference = params.audio_container_preference;
        request.output_path = params.output_path;
        request.extract_audio_only = params.extract_audio_only;
        request
    }
}

/// A tool as advertised to an agent host
#[derive(Clone, Debug, Serialize)]
pub struct ToolDefinition {
    /// Tool name used for dispatch
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// JSON schema of the parameters object
    pub parameters: Value,
}

/// Definitions of every tool this module serves
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_VIDEO_INFO,
            description: "Fetch information about a video without downloading it",
            parameters: json!({
                "type": "object",
                "properties": {
                    "url": { "type": "string", "format": "uri" }
                },
                "required": ["url"]
            }),
        },
        ToolDefinition {
            name: DOWNLOAD_VIDEO,
            description: "Download a video or its audio track using yt-dlp",
            parameters: json!({
                "type": "object",
                "properties": {
                    "url": { "type": "string", "format": "uri" },
                    "quality_preference": { "type": "string" },
                    "video_container_preference": { "type": "string" },
                    "audio_container_preference": { "type": "string" },
                    "output_path": { "type": "string" },
                    "extract_audio_only": { "type": "boolean", "default": false }
                },
                "required": ["url"]
            }),
        },
    ]
}

/// Dispatch a tool call by name
pub async fn call_tool(
    downloader: &MediaDownloader,
    name: &str,
    params: Value,
) -> Result<String, ToolError> {
    match name {
        GET_VIDEO_INFO => get_video_info(downloader, params).await,
        DOWNLOAD_VIDEO => download_video(downloader, params).await,
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}

/// Run the `get_video_info` tool
pub async fn get_video_info(
    downloader: &MediaDownloader,
    params: Value,
) -> Result<String, ToolError> {
    let params: GetVideoInfoParams = decode(params)?;
    check_url(&params.url)?;

    let result = downloader.get_info(&InfoRequest::new(params.url)).await;
    if result.status == Status::Error {
        return Err(user_error(result.message));
    }
    Ok(info_summary(&result))
}

/// Run the `download_video` tool
pub async fn download_video(
    downloader: &MediaDownloader,
    params: Value,
) -> Result<String, ToolError> {
    let params: DownloadVideoParams = decode(params)?;
    check_url(&params.url)?;

    let result = downloader.download(&params.into(), None).await;
    if result.status == Status::Error {
        return Err(user_error(Some(result.message)));
    }
    Ok(download_summary(&result))
}

fn decode<T: for<'de> Deserialize<'de>>(params: Value) -> Result<T, ToolError> {
    serde_json::from_value(params).map_err(|e| ToolError::InvalidParams(e.to_string()))
}

fn check_url(raw: &str) -> Result<(), ToolError> {
    url::Url::parse(raw)
        .map(|_| ())
        .map_err(|e| {
            debug!(url = raw, error = %e, "rejected tool url");
            ToolError::InvalidParams(format!("url: {e}"))
        })
}

fn user_error(message: Option<String>) -> ToolError {
    ToolError::User(
        message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
    )
}

/// Text summary of a successful info fetch
pub fn info_summary(result: &InfoResult) -> String {
    let duration = result
        .duration
        .map(|d| d.to_string())
        .unwrap_or_else(|| UNKNOWN_FIELD.to_string());

    let mut text = format!(
        "Title: {}\nUploader: {}\nDuration: {} sec\n",
        result.video_title.as_deref().unwrap_or(UNKNOWN_FIELD),
        result.uploader.as_deref().unwrap_or(UNKNOWN_FIELD),
        duration,
    );

    if let Some(formats) = &result.available_formats {
        let names: Vec<&str> = formats.iter().filter_map(format_name).collect();
        let _ = write!(text, "Available formats: {}", names.join(", "));
    }
    text
}

/// Human-readable name of one entry of `formats`
fn format_name(format: &Value) -> Option<&str> {
    format
        .get("format")
        .or_else(|| format.get("format_id"))
        .and_then(Value::as_str)
}

/// Text summary of a successful download
pub fn download_summary(result: &DownloadResult) -> String {
    let saved = result
        .file_path
        .as_ref()
        .map(|p| p.display().to_string())
        .or_else(|| result.filename.clone())
        .unwrap_or_else(|| UNKNOWN_FIELD.to_string());

    let mut text = format!("File saved: {saved}\n");
    if let Some(ext) = &result.final_video_format {
        let _ = writeln!(text, "Format: {ext}");
    }
    if let Some(acodec) = &result.final_audio_format {
        let _ = writeln!(text, "Audio: {acodec}");
    }
    text
}
