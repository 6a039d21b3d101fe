//! Result envelopes for successful operations

use crate::types::{ArtifactRecord, DownloadResult, InfoResult, Status, VideoInfoRecord};
use std::path::PathBuf;

/// Success message for audio-only downloads
pub const AUDIO_EXTRACTED: &str = "Audio extracted successfully.";

/// Success message for video downloads
pub const VIDEO_DOWNLOADED: &str = "Video downloaded successfully.";

/// Build the success envelope for an admitted download
pub(crate) fn download_success(
    record: ArtifactRecord,
    file_path: PathBuf,
    audio_only: bool,
) -> DownloadResult {
    let message = if audio_only {
        AUDIO_EXTRACTED
    } else {
        VIDEO_DOWNLOADED
    };

    DownloadResult {
        status: Status::Success,
        message: message.to_string(),
        file_path: Some(file_path),
        filename: Some(record.file_path),
        final_video_format: Some(record.ext),
        final_audio_format: record.acodec,
        metadata: Some(record.metadata),
    }
}

/// Build the success envelope for a metadata fetch
pub(crate) fn info_success(info: VideoInfoRecord) -> InfoResult {
    InfoResult {
        status: Status::Success,
        message: None,
        video_title: info.title,
        uploader: info.uploader,
        duration: info.duration,
        thumbnail_url: info.thumbnail,
        available_formats: info.formats,
    }
}
