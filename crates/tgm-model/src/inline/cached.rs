//! Inline query results pointing at files already stored on the Telegram
//! servers.
//!
//! The family is a closed sum type tagged by `type` on the wire. Every variant
//! struct knows its own [`InlineQueryResultType`] as a constant and has no
//! `type` field of its own, so a value can never disagree with its tag.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::{
    codec::Decode,
    errors::DecodeError,
    inline::{input::InputMessageContent, kind::InlineQueryResultType},
    reply_markup::InlineKeyboardMarkup,
    validation::{Validate, Validator},
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum InlineQueryResultCached {
    Audio(InlineQueryResultCachedAudio),
    Document(InlineQueryResultCachedDocument),
    Gif(InlineQueryResultCachedGif),
    #[serde(rename = "mpeg4_gif")]
    Mpeg4Gif(InlineQueryResultCachedMpeg4Gif),
    Photo(InlineQueryResultCachedPhoto),
    Sticker(InlineQueryResultCachedSticker),
    Video(InlineQueryResultCachedVideo),
    Voice(InlineQueryResultCachedVoice),
}

macro_rules! each_variant {
    ($self:expr, $r:ident => $body:expr) => {
        match $self {
            Self::Audio($r) => $body,
            Self::Document($r) => $body,
            Self::Gif($r) => $body,
            Self::Mpeg4Gif($r) => $body,
            Self::Photo($r) => $body,
            Self::Sticker($r) => $body,
            Self::Video($r) => $body,
            Self::Voice($r) => $body,
        }
    };
}

impl InlineQueryResultCached {
    pub const FAMILY: &'static str = "inline_query_result_cached";

    /// The discriminant emitted under `type`.
    pub fn kind(&self) -> InlineQueryResultType {
        each_variant!(self, r => r.kind())
    }

    pub fn id(&self) -> &str {
        each_variant!(self, r => r.id())
    }

    pub fn input_message_content(&self) -> Option<&InputMessageContent> {
        each_variant!(self, r => r.input_message_content())
    }

    pub fn reply_markup(&self) -> Option<&InlineKeyboardMarkup> {
        each_variant!(self, r => r.reply_markup())
    }

    /// Reads the discriminant before touching any other field.
    fn discriminant(value: &Value) -> Result<InlineQueryResultType, DecodeError> {
        let family = Self::FAMILY;
        let Some(object) = value.as_object() else {
            return Err(DecodeError::NotAnObject { family });
        };
        let raw = match object.get("type") {
            None => return Err(DecodeError::MissingDiscriminant { family }),
            Some(Value::String(raw)) => raw,
            Some(_) => return Err(DecodeError::InvalidDiscriminant { family }),
        };
        raw.parse::<InlineQueryResultType>()
            .ok()
            .filter(|kind| kind.supports_cached())
            .ok_or_else(|| DecodeError::UnknownDiscriminant {
                family,
                value: raw.clone(),
            })
    }
}

impl Decode for InlineQueryResultCached {
    const TARGET: &'static str = Self::FAMILY;

    fn decode_value(value: Value) -> Result<Self, DecodeError> {
        let kind = Self::discriminant(&value).inspect_err(|err| {
            tracing::debug!(family = Self::FAMILY, error = %err, "rejected inline result");
        })?;
        serde_json::from_value(value).map_err(|source| {
            tracing::debug!(
                family = Self::FAMILY,
                discriminant = %kind,
                error = %source,
                "malformed inline result"
            );
            DecodeError::Malformed {
                target: kind.as_str(),
                source,
            }
        })
    }
}

impl Validate for InlineQueryResultCached {
    fn validate_into(&self, v: &mut Validator<'_>) {
        each_variant!(self, r => r.validate_into(v))
    }
}

/// Shared accessors and the tag binding for one variant struct.
macro_rules! cached_variant {
    ($ty:ident, $variant:ident) => {
        impl $ty {
            pub const KIND: InlineQueryResultType = InlineQueryResultType::$variant;

            pub fn kind(&self) -> InlineQueryResultType {
                Self::KIND
            }

            pub fn id(&self) -> &str {
                &self.id
            }

            pub fn input_message_content(&self) -> Option<&InputMessageContent> {
                self.input_message_content.as_ref()
            }

            pub fn reply_markup(&self) -> Option<&InlineKeyboardMarkup> {
                self.reply_markup.as_ref()
            }

            fn validate_common(&self, v: &mut Validator<'_>) {
                v.not_blank("id", &self.id);
                let max = v.limits().result_id_max_bytes;
                v.max_bytes("id", &self.id, max);
                v.nested("reply_markup", &self.reply_markup);
                v.nested("input_message_content", &self.input_message_content);
            }
        }

        impl From<$ty> for InlineQueryResultCached {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }
    };
}

fn validate_caption(v: &mut Validator<'_>, caption: Option<&str>) {
    if let Some(caption) = caption {
        let max = v.limits().caption_max_chars;
        v.max_chars("caption", caption, max);
    }
}

/// A link to an mp3 audio file.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InlineQueryResultCachedAudio {
    #[builder(into)]
    id: String,

    #[builder(into)]
    audio_file_id: String,

    #[builder(into)]
    #[serde(default)]
    caption: Option<String>,

    #[serde(default)]
    reply_markup: Option<InlineKeyboardMarkup>,

    #[builder(into)]
    #[serde(default)]
    input_message_content: Option<InputMessageContent>,
}

cached_variant!(InlineQueryResultCachedAudio, Audio);

impl InlineQueryResultCachedAudio {
    pub fn audio_file_id(&self) -> &str {
        &self.audio_file_id
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl Validate for InlineQueryResultCachedAudio {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("audio_file_id", &self.audio_file_id);
        validate_caption(v, self.caption());
        self.validate_common(v);
    }
}

/// A link to a file (PDF or ZIP).
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InlineQueryResultCachedDocument {
    #[builder(into)]
    id: String,

    #[builder(into)]
    title: String,

    #[builder(into)]
    document_file_id: String,

    #[builder(into)]
    #[serde(default)]
    description: Option<String>,

    #[builder(into)]
    #[serde(default)]
    caption: Option<String>,

    #[serde(default)]
    reply_markup: Option<InlineKeyboardMarkup>,

    #[builder(into)]
    #[serde(default)]
    input_message_content: Option<InputMessageContent>,
}

cached_variant!(InlineQueryResultCachedDocument, Document);

impl InlineQueryResultCachedDocument {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn document_file_id(&self) -> &str {
        &self.document_file_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl Validate for InlineQueryResultCachedDocument {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("title", &self.title);
        v.not_blank("document_file_id", &self.document_file_id);
        validate_caption(v, self.caption());
        self.validate_common(v);
    }
}

/// A link to an animated GIF.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InlineQueryResultCachedGif {
    #[builder(into)]
    id: String,

    #[builder(into)]
    gif_file_id: String,

    #[builder(into)]
    #[serde(default)]
    title: Option<String>,

    #[builder(into)]
    #[serde(default)]
    caption: Option<String>,

    #[serde(default)]
    reply_markup: Option<InlineKeyboardMarkup>,

    #[builder(into)]
    #[serde(default)]
    input_message_content: Option<InputMessageContent>,
}

cached_variant!(InlineQueryResultCachedGif, Gif);

impl InlineQueryResultCachedGif {
    pub fn gif_file_id(&self) -> &str {
        &self.gif_file_id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl Validate for InlineQueryResultCachedGif {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("gif_file_id", &self.gif_file_id);
        validate_caption(v, self.caption());
        self.validate_common(v);
    }
}

/// A link to a silent H.264/MPEG-4 AVC video animation.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InlineQueryResultCachedMpeg4Gif {
    #[builder(into)]
    id: String,

    #[builder(into)]
    mpeg4_file_id: String,

    #[builder(into)]
    #[serde(default)]
    title: Option<String>,

    #[builder(into)]
    #[serde(default)]
    caption: Option<String>,

    #[serde(default)]
    reply_markup: Option<InlineKeyboardMarkup>,

    #[builder(into)]
    #[serde(default)]
    input_message_content: Option<InputMessageContent>,
}

cached_variant!(InlineQueryResultCachedMpeg4Gif, Mpeg4Gif);

impl InlineQueryResultCachedMpeg4Gif {
    pub fn mpeg4_file_id(&self) -> &str {
        &self.mpeg4_file_id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl Validate for InlineQueryResultCachedMpeg4Gif {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("mpeg4_file_id", &self.mpeg4_file_id);
        validate_caption(v, self.caption());
        self.validate_common(v);
    }
}

/// A link to a photo.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InlineQueryResultCachedPhoto {
    #[builder(into)]
    id: String,

    #[builder(into)]
    photo_file_id: String,

    #[builder(into)]
    #[serde(default)]
    title: Option<String>,

    #[builder(into)]
    #[serde(default)]
    description: Option<String>,

    #[builder(into)]
    #[serde(default)]
    caption: Option<String>,

    #[serde(default)]
    reply_markup: Option<InlineKeyboardMarkup>,

    #[builder(into)]
    #[serde(default)]
    input_message_content: Option<InputMessageContent>,
}

cached_variant!(InlineQueryResultCachedPhoto, Photo);

impl InlineQueryResultCachedPhoto {
    pub fn photo_file_id(&self) -> &str {
        &self.photo_file_id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl Validate for InlineQueryResultCachedPhoto {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("photo_file_id", &self.photo_file_id);
        validate_caption(v, self.caption());
        self.validate_common(v);
    }
}

/// A link to a sticker. Stickers carry no caption.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InlineQueryResultCachedSticker {
    #[builder(into)]
    id: String,

    #[builder(into)]
    sticker_file_id: String,

    #[serde(default)]
    reply_markup: Option<InlineKeyboardMarkup>,

    #[builder(into)]
    #[serde(default)]
    input_message_content: Option<InputMessageContent>,
}

cached_variant!(InlineQueryResultCachedSticker, Sticker);

impl InlineQueryResultCachedSticker {
    pub fn sticker_file_id(&self) -> &str {
        &self.sticker_file_id
    }
}

impl Validate for InlineQueryResultCachedSticker {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("sticker_file_id", &self.sticker_file_id);
        self.validate_common(v);
    }
}

/// A link to a video file.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InlineQueryResultCachedVideo {
    #[builder(into)]
    id: String,

    #[builder(into)]
    video_file_id: String,

    #[builder(into)]
    title: String,

    #[builder(into)]
    #[serde(default)]
    description: Option<String>,

    #[builder(into)]
    #[serde(default)]
    caption: Option<String>,

    #[serde(default)]
    reply_markup: Option<InlineKeyboardMarkup>,

    #[builder(into)]
    #[serde(default)]
    input_message_content: Option<InputMessageContent>,
}

cached_variant!(InlineQueryResultCachedVideo, Video);

impl InlineQueryResultCachedVideo {
    pub fn video_file_id(&self) -> &str {
        &self.video_file_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl Validate for InlineQueryResultCachedVideo {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("video_file_id", &self.video_file_id);
        v.not_blank("title", &self.title);
        validate_caption(v, self.caption());
        self.validate_common(v);
    }
}

/// A link to a voice message (OGG/Opus).
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InlineQueryResultCachedVoice {
    #[builder(into)]
    id: String,

    #[builder(into)]
    voice_file_id: String,

    #[builder(into)]
    title: String,

    #[builder(into)]
    #[serde(default)]
    caption: Option<String>,

    #[serde(default)]
    reply_markup: Option<InlineKeyboardMarkup>,

    #[builder(into)]
    #[serde(default)]
    input_message_content: Option<InputMessageContent>,
}

cached_variant!(InlineQueryResultCachedVoice, Voice);

impl InlineQueryResultCachedVoice {
    pub fn voice_file_id(&self) -> &str {
        &self.voice_file_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl Validate for InlineQueryResultCachedVoice {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("voice_file_id", &self.voice_file_id);
        v.not_blank("title", &self.title);
        validate_caption(v, self.caption());
        self.validate_common(v);
    }
}
