//! Resolution descriptors handed to the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::labels::Locale;
use super::provider::ProviderTag;

/// Horizontal size hint for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Stretch to the container width.
    Full,
}

/// Why a recognized source could not be turned into a player.
///
/// Displays and serializes as its stable code, e.g. `invalid-youtube-link`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    /// No video id in a `YouTube` link.
    #[error("invalid-youtube-link")]
    InvalidYoutubeLink,
    /// No `/video/` or `/play/` id in a `RuTube` link.
    #[error("invalid-rutube-link")]
    InvalidRutubeLink,
    /// Missing owner or video id in a VK video link.
    #[error("invalid-vk-proxy-link")]
    InvalidVkProxyLink,
    /// No file id in a Google Drive link.
    #[error("invalid-google-drive-link")]
    InvalidGoogleDriveLink,
    /// Not a well-formed URL.
    #[error("invalid-url")]
    InvalidUrl,
}

impl FailureReason {
    /// Short diagnostic suitable for showing to the person editing song data.
    #[must_use]
    pub const fn message(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ru, Self::InvalidYoutubeLink) => "Некорректная ссылка на YouTube",
            (Locale::Ru, Self::InvalidRutubeLink) => "Некорректная ссылка на RuTube",
            (Locale::Ru, Self::InvalidVkProxyLink) => "Некорректная ссылка на видео ВК",
            (Locale::Ru, Self::InvalidGoogleDriveLink) => "Ошибка Google Drive",
            (Locale::Ru, Self::InvalidUrl) => "Некорректная ссылка",
            (Locale::En, Self::InvalidYoutubeLink) => "Invalid YouTube link",
            (Locale::En, Self::InvalidRutubeLink) => "Invalid RuTube link",
            (Locale::En, Self::InvalidVkProxyLink) => "Invalid VK video link",
            (Locale::En, Self::InvalidGoogleDriveLink) => "Invalid Google Drive link",
            (Locale::En, Self::InvalidUrl) => "Invalid link",
        }
    }
}

/// The outcome of resolving one media source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResolvedSource {
    /// An inline player for a recognized provider.
    Embed {
        /// Provider the source was classified as.
        provider: ProviderTag,
        /// URL to load inside the player frame.
        embed_url: String,
        /// Link for opening the media on the provider's site.
        original_url: String,
        /// Width hint.
        #[serde(skip_serializing_if = "Option::is_none")]
        display_width: Option<Dimension>,
        /// Height hint in pixels.
        #[serde(skip_serializing_if = "Option::is_none")]
        display_height: Option<u32>,
        /// Frame permissions requested by the player.
        allow: Vec<String>,
        /// Whether the player may go fullscreen.
        allow_fullscreen: bool,
        /// Background color hint behind the player.
        #[serde(skip_serializing_if = "Option::is_none")]
        background: Option<String>,
        /// Caption of the "open externally" link.
        open_label: String,
    },

    /// No player is possible; only an outbound link.
    LinkOnly {
        /// Provider the source was classified as.
        provider: ProviderTag,
        /// Where the link points.
        target_url: String,
        /// Caption of the link.
        label: String,
        /// Why no player is offered, if worth telling.
        #[serde(skip_serializing_if = "Option::is_none")]
        notice: Option<String>,
    },

    /// A direct media file played by a native audio element.
    Media {
        /// Provider the source was classified as.
        provider: ProviderTag,
        /// URL for the audio element.
        playback_url: String,
        /// URL for the download link.
        download_url: String,
        /// Caption of the download link.
        download_label: String,
    },

    /// The provider was recognized but the link is unusable.
    Failure {
        /// Provider the source was classified as.
        provider: ProviderTag,
        /// What went wrong.
        reason: FailureReason,
    },
}

impl ResolvedSource {
    /// Provider this descriptor was built for.
    #[must_use]
    pub const fn provider(&self) -> ProviderTag {
        match self {
            Self::Embed { provider, .. }
            | Self::LinkOnly { provider, .. }
            | Self::Media { provider, .. }
            | Self::Failure { provider, .. } => *provider,
        }
    }

    /// Failure reason, if this is a failure.
    #[must_use]
    pub const fn failure(&self) -> Option<FailureReason> {
        match self {
            Self::Failure { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Whether the presentation layer can show something playable or clickable.
    #[must_use]
    pub const fn is_renderable(&self) -> bool {
        !matches!(self, Self::Failure { .. })
    }
}

impl fmt::Display for ResolvedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embed { provider, embed_url, display_height, .. } => {
                write!(f, "[{provider}] embed {embed_url}")?;
                if let Some(h) = display_height {
                    write!(f, " ({h}px)")?;
                }
                Ok(())
            }
            Self::LinkOnly { provider, target_url, .. } => write!(f, "[{provider}] link {target_url}"),
            Self::Media { provider, playback_url, .. } => write!(f, "[{provider}] media {playback_url}"),
            Self::Failure { provider, reason } => write!(f, "[{provider}] failure {reason}"),
        }
    }
}
