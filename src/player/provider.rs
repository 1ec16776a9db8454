//! Provider classification by substring inspection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The hosting service a media source link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderTag {
    /// `youtube.com` and `youtu.be` links.
    Youtube,
    /// `rutube.ru` links.
    Rutube,
    /// `vkvideo.ru/video...` links, embeddable through the VK player.
    VkVideoProxy,
    /// `vk.com/video...` links, which cannot be embedded without a signing hash.
    VkVideoOfficial,
    /// `vk.com/audio...` links.
    VkAudio,
    /// `drive.google.com` files.
    GoogleDrive,
    /// `dropbox.com` shared files.
    Dropbox,
    /// Anything else, treated as a direct media file.
    #[default]
    Direct,
}

/// Substring rules in priority order. First match wins.
const RULES: &[(&[&str], ProviderTag)] = &[
    (&["youtube.com", "youtu.be"], ProviderTag::Youtube),
    (&["rutube.ru"], ProviderTag::Rutube),
    (&["vkvideo.ru/video"], ProviderTag::VkVideoProxy),
    (&["vk.com/video"], ProviderTag::VkVideoOfficial),
    (&["vk.com/audio"], ProviderTag::VkAudio),
    (&["drive.google.com"], ProviderTag::GoogleDrive),
    (&["dropbox.com"], ProviderTag::Dropbox),
];

impl ProviderTag {
    /// Returns all provider tags in classification priority order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Youtube,
            Self::Rutube,
            Self::VkVideoProxy,
            Self::VkVideoOfficial,
            Self::VkAudio,
            Self::GoogleDrive,
            Self::Dropbox,
            Self::Direct,
        ]
    }

    /// Returns the stable kebab-case code of this provider.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Rutube => "rutube",
            Self::VkVideoProxy => "vk-video-proxy",
            Self::VkVideoOfficial => "vk-video-official",
            Self::VkAudio => "vk-audio",
            Self::GoogleDrive => "google-drive",
            Self::Dropbox => "dropbox",
            Self::Direct => "direct",
        }
    }

    /// Returns the human-readable service name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Youtube => "YouTube",
            Self::Rutube => "RuTube",
            Self::VkVideoProxy | Self::VkVideoOfficial | Self::VkAudio => "VK",
            Self::GoogleDrive => "Google Drive",
            Self::Dropbox => "Dropbox",
            Self::Direct => "Direct link",
        }
    }
}

impl fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw source string into exactly one provider.
///
/// Matching is a case-insensitive substring search evaluated in a fixed
/// priority order, so `vk.com/video` is checked before `vk.com/audio`.
/// Empty input classifies as [`ProviderTag::Direct`].
pub fn classify(url: &str) -> ProviderTag {
    if url.is_empty() {
        return ProviderTag::Direct;
    }

    let lower = url.to_lowercase();
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map_or(ProviderTag::Direct, |&(_, tag)| tag)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_classify_youtube_forms() {
        assert_eq!(classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), ProviderTag::Youtube);
        assert_eq!(classify("https://youtu.be/dQw4w9WgXcQ"), ProviderTag::Youtube);
        assert_eq!(classify("HTTPS://WWW.YOUTUBE.COM/watch?v=abc"), ProviderTag::Youtube);
    }

    #[test]
    fn test_classify_vk_priority() {
        assert_eq!(classify("https://vkvideo.ru/video-12345_6789"), ProviderTag::VkVideoProxy);
        assert_eq!(classify("https://vk.com/video-12345_6789"), ProviderTag::VkVideoOfficial);
        assert_eq!(classify("https://m.vk.com/video123_456"), ProviderTag::VkVideoOfficial);
        assert_eq!(classify("vk.com/audio-2001_42"), ProviderTag::VkAudio);
        // A VK page that is neither video nor audio is not a VK source
        assert_eq!(classify("https://vk.com/club1"), ProviderTag::Direct);
    }

    #[test]
    fn test_classify_storage_providers() {
        assert_eq!(classify("https://drive.google.com/file/d/abc/view"), ProviderTag::GoogleDrive);
        assert_eq!(classify("https://www.dropbox.com/s/x/song.mp3?dl=0"), ProviderTag::Dropbox);
        assert_eq!(classify("https://rutube.ru/video/abc/"), ProviderTag::Rutube);
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(classify(""), ProviderTag::Direct);
        assert_eq!(classify("not a url"), ProviderTag::Direct);
        assert_eq!(classify("https://example.com/song.mp3"), ProviderTag::Direct);
    }

    #[test]
    fn test_first_rule_wins() {
        // Mentions both YouTube and Dropbox; YouTube has priority
        assert_eq!(
            classify("https://youtube.com/redirect?q=https://dropbox.com/s/x"),
            ProviderTag::Youtube
        );
    }

    #[test]
    fn test_tag_codes() {
        let codes: Vec<_> = ProviderTag::all().iter().map(|t| t.as_str()).collect();
        assert_eq!(
            codes,
            [
                "youtube",
                "rutube",
                "vk-video-proxy",
                "vk-video-official",
                "vk-audio",
                "google-drive",
                "dropbox",
                "direct"
            ]
        );
        let json = serde_json::to_string(&ProviderTag::VkVideoProxy).unwrap();
        assert_eq!(json, "\"vk-video-proxy\"");
    }
}
