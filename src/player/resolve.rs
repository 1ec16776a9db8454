//! Building player descriptors from a classified source.

use crate::constants::{allow, display, embed};

use super::extract::{self, VkVideoId};
use super::labels::{self, Locale};
use super::provider::ProviderTag;
use super::types::{Dimension, FailureReason, ResolvedSource};

/// A per-provider handler: trimmed source text in, descriptor out.
type Handler = fn(&Resolver, &str) -> ResolvedSource;

/// Turns classified source links into player descriptors.
///
/// Holds only the caption locale, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    locale: Locale,
}

impl Resolver {
    /// Create a resolver producing captions in the given locale.
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Locale used for captions.
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Classify and resolve a raw source value.
    ///
    /// Returns `None` when there is nothing to render: absent, empty or
    /// whitespace-only input.
    pub fn resolve_source(&self, raw: Option<&str>) -> Option<ResolvedSource> {
        let raw = raw?;
        if raw.trim().is_empty() {
            return None;
        }
        let tag = super::classify(raw);
        Some(self.resolve(raw, tag))
    }

    /// Resolve a source already classified as `tag`.
    ///
    /// Empty input is not special-cased here; go through
    /// [`Resolver::resolve_source`] to get "nothing to render" for it.
    pub fn resolve(&self, raw: &str, tag: ProviderTag) -> ResolvedSource {
        let resolved = handler(tag)(self, raw.trim());
        tracing::debug!("Resolved {tag} source {raw:?}: {resolved}");
        resolved
    }

    fn open_label(&self, provider: ProviderTag) -> String {
        labels::open_label(provider, self.locale).to_string()
    }

    fn video_embed(&self, provider: ProviderTag, embed_url: String, original_url: &str, allow: &[&str]) -> ResolvedSource {
        ResolvedSource::Embed {
            provider,
            embed_url,
            original_url: original_url.to_string(),
            display_width: Some(Dimension::Full),
            display_height: Some(display::VIDEO_HEIGHT),
            allow: allow.iter().map(ToString::to_string).collect(),
            allow_fullscreen: true,
            background: None,
            open_label: self.open_label(provider),
        }
    }
}

/// Dispatch table from provider to handler.
const fn handler(tag: ProviderTag) -> Handler {
    match tag {
        ProviderTag::Youtube => resolve_youtube,
        ProviderTag::Rutube => resolve_rutube,
        ProviderTag::VkVideoProxy => resolve_vk_proxy,
        ProviderTag::VkVideoOfficial => resolve_vk_official,
        ProviderTag::VkAudio => resolve_vk_audio,
        ProviderTag::GoogleDrive => resolve_google_drive,
        ProviderTag::Dropbox => resolve_dropbox,
        ProviderTag::Direct => resolve_direct,
    }
}

const fn failure(provider: ProviderTag, reason: FailureReason) -> ResolvedSource {
    ResolvedSource::Failure { provider, reason }
}

fn resolve_youtube(resolver: &Resolver, raw: &str) -> ResolvedSource {
    let tag = ProviderTag::Youtube;
    let Some(id) = extract::parse_url(raw).and_then(|u| extract::youtube_video_id(&u)) else {
        return failure(tag, FailureReason::InvalidYoutubeLink);
    };
    let embed_url = format!("{}{id}{}", embed::YOUTUBE, embed::YOUTUBE_SUFFIX);
    resolver.video_embed(tag, embed_url, raw, allow::YOUTUBE)
}

fn resolve_rutube(resolver: &Resolver, raw: &str) -> ResolvedSource {
    let tag = ProviderTag::Rutube;
    let Some(id) = extract::parse_url(raw).and_then(|u| extract::rutube_video_id(&u)) else {
        return failure(tag, FailureReason::InvalidRutubeLink);
    };
    let embed_url = format!("{}{id}", embed::RUTUBE);
    resolver.video_embed(tag, embed_url, raw, allow::RUTUBE)
}

fn resolve_vk_proxy(resolver: &Resolver, raw: &str) -> ResolvedSource {
    let tag = ProviderTag::VkVideoProxy;
    let Some(VkVideoId { owner_id, video_id }) = extract::parse_url(raw).and_then(|u| extract::vk_video_id(&u))
    else {
        return failure(tag, FailureReason::InvalidVkProxyLink);
    };
    let embed_url = format!("{}?oid={owner_id}&id={video_id}&hd=2", embed::VK_PLAYER);
    let mut source = resolver.video_embed(tag, embed_url, raw, allow::VK);
    if let ResolvedSource::Embed { background, .. } = &mut source {
        *background = Some(display::VK_BACKGROUND.to_string());
    }
    source
}

fn resolve_vk_official(resolver: &Resolver, raw: &str) -> ResolvedSource {
    let tag = ProviderTag::VkVideoOfficial;
    ResolvedSource::LinkOnly {
        provider: tag,
        target_url: raw.to_string(),
        label: resolver.open_label(tag),
        notice: Some(labels::vk_official_notice(resolver.locale).to_string()),
    }
}

fn resolve_vk_audio(resolver: &Resolver, raw: &str) -> ResolvedSource {
    let tag = ProviderTag::VkAudio;
    let target_url = if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    ResolvedSource::LinkOnly {
        provider: tag,
        target_url,
        label: resolver.open_label(tag),
        notice: None,
    }
}

fn resolve_google_drive(resolver: &Resolver, raw: &str) -> ResolvedSource {
    let tag = ProviderTag::GoogleDrive;
    let Some(id) = extract::google_drive_file_id(raw) else {
        return failure(tag, FailureReason::InvalidGoogleDriveLink);
    };
    ResolvedSource::Embed {
        provider: tag,
        embed_url: format!("{}{id}/preview", embed::GOOGLE_DRIVE_FILE),
        original_url: format!("{}{id}/view", embed::GOOGLE_DRIVE_FILE),
        display_width: Some(Dimension::Full),
        display_height: Some(display::DRIVE_PREVIEW_HEIGHT),
        allow: allow::GOOGLE_DRIVE.iter().map(ToString::to_string).collect(),
        allow_fullscreen: false,
        background: None,
        open_label: resolver.open_label(tag),
    }
}

// A malformed Dropbox link ends up as a generic invalid-url failure.
fn resolve_dropbox(resolver: &Resolver, raw: &str) -> ResolvedSource {
    let direct = extract::dropbox_direct_url(raw);
    direct_media(resolver, ProviderTag::Dropbox, &direct)
}

fn resolve_direct(resolver: &Resolver, raw: &str) -> ResolvedSource {
    direct_media(resolver, ProviderTag::Direct, raw)
}

fn direct_media(resolver: &Resolver, tag: ProviderTag, url: &str) -> ResolvedSource {
    if extract::parse_url(url).is_none() {
        return failure(tag, FailureReason::InvalidUrl);
    }
    ResolvedSource::Media {
        provider: tag,
        playback_url: url.to_string(),
        download_url: url.to_string(),
        download_label: labels::download_label(resolver.locale).to_string(),
    }
}
