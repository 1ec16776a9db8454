//! Identifier extraction for each provider's link grammar.
//!
//! Every function here is pure and returns `None` when the expected
//! identifier is absent. Building descriptors is left to the resolver.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Regex matching a `RuTube` video id in a path.
#[allow(clippy::expect_used)]
static RE_RUTUBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?:video|play)/([a-zA-Z0-9_-]{10,})").expect("valid regex: RE_RUTUBE")
});

/// Regex matching `/video-123_456` style VK paths.
#[allow(clippy::expect_used)]
static RE_VK_VIDEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/video(-?\d+)_(\d+)").expect("valid regex: RE_VK_VIDEO")
});

/// Regex matching the three Google Drive file link shapes.
#[allow(clippy::expect_used)]
static RE_GOOGLE_DRIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:drive\.google\.com)/(?:file/d/|open\?id=|uc\?(?:[^#]*?&)?id=)([a-zA-Z0-9_-]{28,})")
        .expect("valid regex: RE_GOOGLE_DRIVE")
});

/// Owner and video ids of a VK video, exactly as written in the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VkVideoId {
    /// Owner id; negative for communities.
    pub owner_id: String,
    /// Video id within the owner's library.
    pub video_id: String,
}

/// Parse a string as an absolute URL.
pub fn parse_url(raw: &str) -> Option<Url> {
    Url::parse(raw).ok()
}

/// Extract a `YouTube` video id from a short or long link.
///
/// `youtu.be/{id}` takes the first path segment, `*youtube.com*` takes the
/// `v` query parameter.
pub fn youtube_video_id(url: &Url) -> Option<String> {
    let host = url.host_str()?;

    let id = if host == "youtu.be" {
        url.path_segments()?.next()?.to_string()
    } else if host.contains("youtube.com") {
        url.query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())?
    } else {
        return None;
    };

    (!id.is_empty()).then_some(id)
}

/// Extract a `RuTube` video id from `/video/{id}` or `/play/{id}`.
pub fn rutube_video_id(url: &Url) -> Option<String> {
    RE_RUTUBE
        .captures(url.path())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract owner and video ids from a `/video{owner}_{id}` path.
pub fn vk_video_id(url: &Url) -> Option<VkVideoId> {
    let caps = RE_VK_VIDEO.captures(url.path())?;
    let owner_id = caps.get(1)?.as_str().to_string();
    let video_id = caps.get(2)?.as_str().to_string();
    Some(VkVideoId { owner_id, video_id })
}

/// Extract a Google Drive file id from the raw link text.
///
/// Recognizes `file/d/{id}`, `open?id={id}` and `uc?...id={id}`.
pub fn google_drive_file_id(raw: &str) -> Option<String> {
    RE_GOOGLE_DRIVE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Force `dl=1` on a Dropbox link so it serves the file itself.
///
/// The first `dl` parameter is replaced in place and any repeats are
/// dropped; other parameters keep their order. Strings that are not URLs
/// come back unchanged.
pub fn dropbox_direct_url(raw: &str) -> String {
    let Some(mut url) = parse_url(raw) else {
        tracing::debug!("Dropbox link is not a URL, keeping it as is: {raw}");
        return raw.to_string();
    };

    let mut seen_dl = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in url.query_pairs() {
        if key == "dl" {
            if !seen_dl {
                seen_dl = true;
                pairs.push(("dl".to_string(), "1".to_string()));
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    if !seen_dl {
        pairs.push(("dl".to_string(), "1".to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_youtube_short_and_long() {
        assert_eq!(youtube_video_id(&url("https://youtu.be/dQw4w9WgXcQ")).as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(
            youtube_video_id(&url("https://www.youtube.com/watch?list=PL1&v=dQw4w9WgXcQ")).as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            youtube_video_id(&url("https://m.youtube.com/watch?v=abc123")).as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_youtube_missing_id() {
        assert!(youtube_video_id(&url("https://youtu.be/")).is_none());
        assert!(youtube_video_id(&url("https://www.youtube.com/watch?v=")).is_none());
        assert!(youtube_video_id(&url("https://www.youtube.com/channel/UC123")).is_none());
        // Mentions youtube.com only in the query, host is elsewhere
        assert!(youtube_video_id(&url("https://example.com/?ref=youtube.com&v=abc")).is_none());
    }

    #[test]
    fn test_rutube_id() {
        assert_eq!(
            rutube_video_id(&url("https://rutube.ru/video/c6cc4d620b1d4338901770a44b3e82f4/")).as_deref(),
            Some("c6cc4d620b1d4338901770a44b3e82f4")
        );
        assert_eq!(rutube_video_id(&url("https://rutube.ru/play/abcdef_123")).as_deref(), Some("abcdef_123"));
        assert!(rutube_video_id(&url("https://rutube.ru/video/short/")).is_none());
        assert!(rutube_video_id(&url("https://rutube.ru/channel/12345678901/")).is_none());
    }

    fn vk(owner_id: &str, video_id: &str) -> Option<VkVideoId> {
        Some(VkVideoId { owner_id: owner_id.to_string(), video_id: video_id.to_string() })
    }

    #[test]
    fn test_vk_video_id() {
        assert_eq!(vk_video_id(&url("https://vkvideo.ru/video-12345_6789")), vk("-12345", "6789"));
        assert_eq!(vk_video_id(&url("https://vkvideo.ru/video42_7?list=ln-1")), vk("42", "7"));
        assert!(vk_video_id(&url("https://vkvideo.ru/video-12345")).is_none());
        assert!(vk_video_id(&url("https://vkvideo.ru/videos-12345")).is_none());
    }

    #[test]
    fn test_vk_video_id_kept_verbatim() {
        assert_eq!(vk_video_id(&url("https://vkvideo.ru/video-012_034")), vk("-012", "034"));
        assert_eq!(vk_video_id(&url("https://vkvideo.ru/video-0_5")), vk("-0", "5"));
        assert_eq!(
            vk_video_id(&url("https://vkvideo.ru/video-99999999999999999999_1")),
            vk("-99999999999999999999", "1")
        );
    }

    #[test]
    fn test_google_drive_shapes() {
        let id = "1AbCdEfGhIjKlMnOpQrStUvWxYz_-0123";
        let shapes = [
            format!("https://drive.google.com/file/d/{id}/view?usp=sharing"),
            format!("https://drive.google.com/open?id={id}"),
            format!("https://drive.google.com/uc?id={id}"),
            format!("https://drive.google.com/uc?export=download&id={id}"),
        ];
        for shape in &shapes {
            assert_eq!(google_drive_file_id(shape).as_deref(), Some(id), "shape: {shape}");
        }
    }

    #[test]
    fn test_google_drive_rejects_short_ids() {
        assert!(google_drive_file_id("https://drive.google.com/file/d/short/view").is_none());
        assert!(google_drive_file_id("https://drive.google.com/drive/folders/abc").is_none());
    }

    #[test]
    fn test_dropbox_sets_dl() {
        assert_eq!(
            dropbox_direct_url("https://www.dropbox.com/s/abc/song.mp3?dl=0"),
            "https://www.dropbox.com/s/abc/song.mp3?dl=1"
        );
        assert_eq!(
            dropbox_direct_url("https://www.dropbox.com/scl/fi/xyz/song.mp3?rlkey=k1&dl=0&st=9"),
            "https://www.dropbox.com/scl/fi/xyz/song.mp3?rlkey=k1&dl=1&st=9"
        );
        assert_eq!(
            dropbox_direct_url("https://www.dropbox.com/s/abc/song.mp3"),
            "https://www.dropbox.com/s/abc/song.mp3?dl=1"
        );
    }

    #[test]
    fn test_dropbox_rewrite_is_idempotent() {
        let once = dropbox_direct_url("https://www.dropbox.com/s/abc/song.mp3?dl=1&dl=0");
        assert_eq!(once, "https://www.dropbox.com/s/abc/song.mp3?dl=1");
        assert_eq!(dropbox_direct_url(&once), once);
    }

    #[test]
    fn test_dropbox_not_a_url_passes_through() {
        assert_eq!(dropbox_direct_url("dropbox.com/s/abc/song.mp3"), "dropbox.com/s/abc/song.mp3");
    }
}
