//! Application constants.
//!
//! Centralizes embed templates and player dimensions so the resolver
//! branches stay free of magic strings.

/// Player display dimensions in pixels.
pub mod display {
    /// Height of video players (YouTube, RuTube, VK).
    pub const VIDEO_HEIGHT: u32 = 315;

    /// Height of the Google Drive audio preview.
    pub const DRIVE_PREVIEW_HEIGHT: u32 = 100;

    /// Background hint for the VK player.
    pub const VK_BACKGROUND: &str = "#000";
}

/// Embed URL prefixes for each provider.
pub mod embed {
    /// `YouTube` embed prefix, followed by the video id.
    pub const YOUTUBE: &str = "https://www.youtube.com/embed/";

    /// Query suffix appended after the `YouTube` video id.
    pub const YOUTUBE_SUFFIX: &str = "?autoplay=0";

    /// `RuTube` embed prefix, followed by the video id.
    pub const RUTUBE: &str = "https://rutube.ru/play/embed/";

    /// VK external player endpoint; owner and video ids go in the query.
    pub const VK_PLAYER: &str = "https://vk.com/video_ext.php";

    /// Google Drive file prefix, followed by `{id}/preview` or `{id}/view`.
    pub const GOOGLE_DRIVE_FILE: &str = "https://drive.google.com/file/d/";
}

/// Iframe permission lists.
pub mod allow {
    /// Permissions requested by the `YouTube` player.
    pub const YOUTUBE: &[&str] = &[
        "accelerometer",
        "autoplay",
        "clipboard-write",
        "encrypted-media",
        "gyroscope",
        "picture-in-picture",
    ];

    /// Permissions requested by the `RuTube` player.
    pub const RUTUBE: &[&str] = &["autoplay", "encrypted-media"];

    /// Permissions requested by the VK player.
    pub const VK: &[&str] = &["autoplay", "encrypted-media", "fullscreen", "picture-in-picture"];

    /// Permissions requested by the Google Drive preview.
    pub const GOOGLE_DRIVE: &[&str] = &["autoplay"];
}
