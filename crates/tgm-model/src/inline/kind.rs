use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Value of the `type` field of an inline query result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineQueryResultType {
    Article,
    Audio,
    Contact,
    Document,
    Game,
    Gif,
    Location,
    #[serde(rename = "mpeg4_gif")]
    Mpeg4Gif,
    Photo,
    Sticker,
    Venue,
    Video,
    Voice,
}

impl InlineQueryResultType {
    pub const ALL: [InlineQueryResultType; 13] = [
        Self::Article,
        Self::Audio,
        Self::Contact,
        Self::Document,
        Self::Game,
        Self::Gif,
        Self::Location,
        Self::Mpeg4Gif,
        Self::Photo,
        Self::Sticker,
        Self::Venue,
        Self::Video,
        Self::Voice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Audio => "audio",
            Self::Contact => "contact",
            Self::Document => "document",
            Self::Game => "game",
            Self::Gif => "gif",
            Self::Location => "location",
            Self::Mpeg4Gif => "mpeg4_gif",
            Self::Photo => "photo",
            Self::Sticker => "sticker",
            Self::Venue => "venue",
            Self::Video => "video",
            Self::Voice => "voice",
        }
    }

    /// Whether a result of this type can point at a file already stored on
    /// the Telegram servers.
    pub fn supports_cached(self) -> bool {
        matches!(
            self,
            Self::Audio
                | Self::Document
                | Self::Gif
                | Self::Mpeg4Gif
                | Self::Photo
                | Self::Sticker
                | Self::Video
                | Self::Voice
        )
    }
}

impl fmt::Display for InlineQueryResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown inline query result type `{0}`")]
pub struct UnknownResultType(pub String);

impl FromStr for InlineQueryResultType {
    type Err = UnknownResultType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownResultType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_forms_agree_with_serde() {
        for kind in InlineQueryResultType::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
            assert_eq!(kind.as_str().parse::<InlineQueryResultType>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_and_case_mismatch_are_rejected() {
        assert!("carousel".parse::<InlineQueryResultType>().is_err());
        let err = "Video".parse::<InlineQueryResultType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown inline query result type `Video`");
    }

    #[test]
    fn cached_capable_kinds() {
        let cached: Vec<_> = InlineQueryResultType::ALL
            .into_iter()
            .filter(|k| k.supports_cached())
            .collect();
        assert_eq!(cached.len(), 8);
        assert!(!InlineQueryResultType::Article.supports_cached());
        assert!(InlineQueryResultType::Mpeg4Gif.supports_cached());
    }
}
