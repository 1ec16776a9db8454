//! Localized captions and diagnostics shown next to players.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::provider::ProviderTag;

/// Language of user-visible captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian, the language of the songbook site.
    #[default]
    Ru,
    /// English.
    En,
}

impl Locale {
    /// Returns the two-letter code of this locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "ru-ru" | "russian" => Ok(Self::Ru),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::En),
            other => Err(format!("Unknown locale '{other}'")),
        }
    }
}

/// Caption of the "open externally" link under an embedded player.
pub(crate) const fn open_label(provider: ProviderTag, locale: Locale) -> &'static str {
    match (locale, provider) {
        (Locale::Ru, ProviderTag::Youtube) => "Открыть на YouTube",
        (Locale::Ru, ProviderTag::Rutube) => "Открыть на RuTube",
        (Locale::Ru, ProviderTag::VkVideoProxy | ProviderTag::VkVideoOfficial) => "Открыть в ВКонтакте",
        (Locale::Ru, ProviderTag::VkAudio) => "Открыть в ВК",
        (Locale::Ru, ProviderTag::GoogleDrive) => "Открыть в Google Drive",
        (Locale::Ru, ProviderTag::Dropbox | ProviderTag::Direct) => "Открыть",
        (Locale::En, ProviderTag::Youtube) => "Open on YouTube",
        (Locale::En, ProviderTag::Rutube) => "Open on RuTube",
        (Locale::En, ProviderTag::VkVideoProxy | ProviderTag::VkVideoOfficial | ProviderTag::VkAudio) => {
            "Open on VK"
        }
        (Locale::En, ProviderTag::GoogleDrive) => "Open in Google Drive",
        (Locale::En, ProviderTag::Dropbox | ProviderTag::Direct) => "Open",
    }
}

/// Caption of the download link under a native audio player.
pub(crate) const fn download_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Скачать",
        Locale::En => "Download",
    }
}

/// Notice explaining why official VK videos are only linked.
pub(crate) const fn vk_official_notice(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Видео ВКонтакте нельзя встроить без ключа доступа, откройте его на сайте",
        Locale::En => "VK videos cannot be embedded without an access hash, open it on the site",
    }
}
