//! Inline mode: query results and the message content they send.

pub mod cached;
pub mod input;
pub mod kind;

pub use cached::{
    InlineQueryResultCached, InlineQueryResultCachedAudio, InlineQueryResultCachedDocument,
    InlineQueryResultCachedGif, InlineQueryResultCachedMpeg4Gif, InlineQueryResultCachedPhoto,
    InlineQueryResultCachedSticker, InlineQueryResultCachedVideo, InlineQueryResultCachedVoice,
};
pub use input::{
    InputContactMessageContent, InputLocationMessageContent, InputMessageContent,
    InputTextMessageContent, InputVenueMessageContent,
};
pub use kind::InlineQueryResultType;
