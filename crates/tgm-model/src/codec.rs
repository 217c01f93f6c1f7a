//! JSON boundary of the model.
//!
//! Encoding is plain serde. Decoding goes through [`Decode`] so each
//! top-level type can check its discriminant before serde builds anything,
//! and so failures come back as [`DecodeError`] naming what was decoded.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    config::Limits,
    domain::{Contact, User, Voice},
    entity::MessageEntity,
    errors::{DecodeError, Error},
    inline::InputMessageContent,
    outbound::SendMessage,
    reply_markup::ReplyMarkup,
    validation::Validate,
    Result,
};

/// A type that can be decoded from an inbound JSON document.
pub trait Decode: DeserializeOwned {
    /// Name used in decode errors.
    const TARGET: &'static str;

    fn decode_value(value: Value) -> std::result::Result<Self, DecodeError> {
        serde_json::from_value(value).map_err(|source| {
            tracing::debug!(target_type = Self::TARGET, error = %source, "decode failed");
            DecodeError::Malformed {
                target: Self::TARGET,
                source,
            }
        })
    }
}

macro_rules! plain_decode {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl Decode for $ty {
                const TARGET: &'static str = $name;
            }
        )+
    };
}

plain_decode! {
    User => "user",
    Contact => "contact",
    Voice => "voice",
    MessageEntity => "message_entity",
    ReplyMarkup => "reply_markup",
    InputMessageContent => "input_message_content",
    SendMessage => "send_message",
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

pub fn from_json<T: Decode>(raw: &str) -> Result<T> {
    let value: Value = serde_json::from_str(raw).map_err(|source| DecodeError::Malformed {
        target: T::TARGET,
        source,
    })?;
    from_value(value)
}

pub fn from_value<T: Decode>(value: Value) -> Result<T> {
    Ok(T::decode_value(value)?)
}

/// Decode, then run the validation pass with `limits`.
pub fn from_json_validated<T: Decode + Validate>(raw: &str, limits: &Limits) -> Result<T> {
    let value: T = from_json(raw)?;
    value.validate_with(limits).map_err(Error::Validation)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::inline::InlineQueryResultCached;

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = from_json::<User>("{not json").unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::Malformed { target: "user", .. })
        ));
    }

    #[test]
    fn plain_types_decode_through_serde() {
        let raw = json!({ "type": "hashtag", "offset": 0, "length": 4 }).to_string();
        let entity: MessageEntity = from_json(&raw).unwrap();
        assert_eq!(entity.length(), 4);

        let err = from_value::<Voice>(json!({ "duration": 1 })).unwrap_err();
        match err {
            Error::Decode(DecodeError::Malformed { target, source }) => {
                assert_eq!(target, "voice");
                assert!(source.to_string().contains("file_id"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn validated_decode_reports_violations_after_decoding() {
        let raw = json!({ "type": "sticker", "id": " ", "sticker_file_id": "" }).to_string();
        let decoded = from_json::<InlineQueryResultCached>(&raw);
        assert!(decoded.is_ok());

        let err = from_json_validated::<InlineQueryResultCached>(&raw, &Limits::default())
            .unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["sticker_file_id", "id"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn encoding_helpers_agree() {
        let user = User::builder().id(3).first_name("C").build();
        let s = to_json(&user).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&s).unwrap(), to_value(&user).unwrap());
    }
}
