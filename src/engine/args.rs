//! Command-line construction for yt-dlp invocations

use crate::error::{Error, Result};
use crate::types::{DownloadRequest, InfoRequest};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Template token yt-dlp replaces with the final file extension
pub const EXT_PLACEHOLDER: &str = "%(ext)s";

/// Template token yt-dlp replaces with the media title
pub const TITLE_PLACEHOLDER: &str = "%(title)s";

/// Audio containers passed through to `--audio-format`
pub const AUDIO_FORMATS: [&str; 4] = ["m4a", "mp3", "ogg", "opus"];

/// Video container used when the request names none
pub const DEFAULT_VIDEO_CONTAINER: &str = "mp4";

/// Message of the validation error for a missing locator
pub const URL_REQUIRED: &str = "URL is required";

/// Return the trimmed locator, or a validation error if it is empty
pub fn require_url(url: &str) -> Result<&str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::Validation(URL_REQUIRED.to_string()));
    }
    Ok(url)
}

/// Directory the artifact will land in
///
/// An explicit output path wins, then the request's own directory, then
/// `default_dir`.
pub fn resolve_output_dir(request: &DownloadRequest, default_dir: &Path) -> PathBuf {
    match &request.output_path {
        Some(path) => match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
        None => request
            .output_dir
            .clone()
            .unwrap_or_else(|| default_dir.to_path_buf()),
    }
}

/// Output template handed to `-o`
pub fn output_template(request: &DownloadRequest, default_dir: &Path) -> String {
    match &request.output_path {
        Some(path) => {
            let path = path.to_string_lossy();
            if path.contains(EXT_PLACEHOLDER) {
                path.into_owned()
            } else {
                replace_literal_extension(&path).unwrap_or_else(|| path.into_owned())
            }
        }
        None => resolve_output_dir(request, default_dir)
            .join(format!("{TITLE_PLACEHOLDER}.{EXT_PLACEHOLDER}"))
            .to_string_lossy()
            .into_owned(),
    }
}

/// Swap a trailing `.<alnum>` extension for the extension placeholder
fn replace_literal_extension(path: &str) -> Option<String> {
    let dot = path.rfind('.')?;
    let ext = &path[dot + 1..];
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(format!("{}.{}", &path[..dot], EXT_PLACEHOLDER))
}

/// Build the argument list for a download
///
/// Fails with a validation error when the locator is empty.
pub fn build_download_args(request: &DownloadRequest, default_dir: &Path) -> Result<Vec<String>> {
    let url = require_url(&request.url)?;
    let template = output_template(request, default_dir);

    let mut args = vec![
        url.to_string(),
        "-o".to_string(),
        template,
        "--no-playlist".to_string(),
        "--print-json".to_string(),
    ];

    debug!(
        quality = %request.quality_preference,
        "quality preference is not translated into yt-dlp arguments"
    );

    if request.extract_audio_only {
        args.push("-x".to_string());
        if let Some(format) = request.audio_container_preference.as_deref() {
            if AUDIO_FORMATS.contains(&format) {
                args.push("--audio-format".to_string());
                args.push(format.to_string());
            } else {
                debug!(format, "ignoring unsupported audio container preference");
            }
        }
    } else {
        let container = request
            .video_container_preference
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_VIDEO_CONTAINER);
        args.push("-f".to_string());
        args.push(format!("best[ext={container}]/best"));
        args.push("--merge-output-format".to_string());
        args.push(container.to_string());
    }

    Ok(args)
}

/// Build the argument list for a metadata dump
pub fn build_info_args(request: &InfoRequest) -> Result<Vec<String>> {
    let url = require_url(&request.url)?;
    Ok(vec!["--dump-json".to_string(), url.to_string()])
}
