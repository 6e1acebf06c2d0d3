//! Swing Analysis Lifecycle
//!
//! The "analysis" is a fixed-delay timer plus a canned report; there is
//! no real processing. This module holds the phase machine and the
//! upload checks applied before a clip is accepted.

/// How long the fake analysis runs before completing
pub const ANALYSIS_DELAY_MS: u32 = 3_000;

/// Simulated upload latency before the video is accepted
pub const UPLOAD_DELAY_MS: u32 = 1_000;

/// Upload size ceiling
pub const MAX_VIDEO_BYTES: f64 = 50.0 * 1024.0 * 1024.0;

/// Where the swing module currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    /// No video accepted yet
    #[default]
    Idle,
    /// Analysis timer running
    Analyzing,
    /// Report available, overlay active
    Complete,
}

/// Why an uploaded file was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoFileError {
    NotAVideo,
    TooLarge,
}

impl VideoFileError {
    pub fn title(self) -> &'static str {
        match self {
            VideoFileError::NotAVideo => "Invalid file type",
            VideoFileError::TooLarge => "File too large",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            VideoFileError::NotAVideo => "Please upload a video file.",
            VideoFileError::TooLarge => "Please upload a video smaller than 50MB.",
        }
    }
}

/// MIME prefix and size checks; no partial effect on rejection
pub fn validate_video_file(mime_type: &str, size: f64) -> Result<(), VideoFileError> {
    if !mime_type.starts_with("video/") {
        return Err(VideoFileError::NotAVideo);
    }
    if size > MAX_VIDEO_BYTES {
        return Err(VideoFileError::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_video_at_the_size_cap() {
        assert_eq!(validate_video_file("video/mp4", MAX_VIDEO_BYTES), Ok(()));
        assert_eq!(validate_video_file("video/webm", 1024.0), Ok(()));
    }

    #[test]
    fn test_rejects_non_video_mime() {
        assert_eq!(
            validate_video_file("image/png", 1024.0),
            Err(VideoFileError::NotAVideo)
        );
        assert_eq!(
            validate_video_file("", 1024.0),
            Err(VideoFileError::NotAVideo)
        );
    }

    #[test]
    fn test_rejects_oversized_video() {
        assert_eq!(
            validate_video_file("video/mp4", MAX_VIDEO_BYTES + 1.0),
            Err(VideoFileError::TooLarge)
        );
    }

    #[test]
    fn test_type_check_runs_before_size_check() {
        assert_eq!(
            validate_video_file("application/zip", MAX_VIDEO_BYTES * 2.0),
            Err(VideoFileError::NotAVideo)
        );
    }

    #[test]
    fn test_error_messages_are_distinct() {
        assert_ne!(
            VideoFileError::NotAVideo.message(),
            VideoFileError::TooLarge.message()
        );
    }
}
