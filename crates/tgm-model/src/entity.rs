//! Formatting spans inside message texts, addressed in UTF-16 code units.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    domain::User,
    validation::{Validate, Validator},
};

/// Kind of a [`MessageEntity`] span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionType {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Code,
    Pre,
    /// Clickable text URL; carries `url`.
    TextLink,
    /// Mention of a user without a username; carries `user`.
    TextMention,
}

/// One special span in a message text (hashtag, link, mention...).
///
/// `offset` and `length` are counted in UTF-16 code units, like the Bot API
/// does. `url` and `user` are independent on the wire; validation checks that
/// only the kind that uses each of them sets it.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct MessageEntity {
    #[serde(rename = "type")]
    kind: MentionType,

    offset: u32,

    length: u32,

    #[builder(into)]
    #[serde(default)]
    url: Option<String>,

    #[serde(default)]
    user: Option<User>,
}

impl MessageEntity {
    pub fn new(kind: MentionType, offset: u32, length: u32) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            user: None,
        }
    }

    pub fn kind(&self) -> MentionType {
        self.kind
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Exclusive end of the span, in UTF-16 code units.
    pub fn end(&self) -> u64 {
        u64::from(self.offset) + u64::from(self.length)
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The covered part of `text`, or `None` when the span does not fit
    /// or splits a surrogate pair.
    pub fn slice(&self, text: &str) -> Option<String> {
        let units: Vec<u16> = text.encode_utf16().collect();
        let start = self.offset as usize;
        let end = usize::try_from(self.end()).ok()?;
        let span = units.get(start..end)?;
        String::from_utf16(span).ok()
    }
}

impl Validate for MessageEntity {
    fn validate_into(&self, v: &mut Validator<'_>) {
        match (self.kind, self.url.is_some()) {
            (MentionType::TextLink, false) => v.payload("url", "required for text_link"),
            (MentionType::TextLink, true) | (_, false) => {}
            (_, true) => v.payload("url", "only allowed for text_link"),
        }
        match (self.kind, &self.user) {
            (MentionType::TextMention, None) => v.payload("user", "required for text_mention"),
            (MentionType::TextMention, Some(user)) => v.nested("user", user),
            (_, None) => {}
            (_, Some(_)) => v.payload("user", "only allowed for text_mention"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::validation::Rule;

    fn someone() -> User {
        User::builder().id(42).first_name("Someone").build()
    }

    #[test]
    fn differing_payloads_are_not_equal() {
        let link = MessageEntity::builder()
            .kind(MentionType::Url)
            .offset(0)
            .length(5)
            .url("http://x")
            .build();
        let mention = MessageEntity::builder()
            .kind(MentionType::Mention)
            .offset(0)
            .length(5)
            .user(someone())
            .build();
        assert_ne!(link, mention);
    }

    #[test]
    fn kind_takes_part_in_equality() {
        let a = MessageEntity::new(MentionType::Bold, 1, 2);
        let b = MessageEntity::new(MentionType::Italic, 1, 2);
        assert_ne!(a, b);
        assert_eq!(a, MessageEntity::new(MentionType::Bold, 1, 2));
    }

    #[test]
    fn wire_shape() {
        let entity = MessageEntity::builder()
            .kind(MentionType::TextLink)
            .offset(3)
            .length(4)
            .url("https://example.org")
            .build();
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({ "type": "text_link", "offset": 3, "length": 4, "url": "https://example.org" })
        );

        let back: MessageEntity = serde_json::from_value(
            json!({ "type": "bot_command", "offset": 0, "length": 6 }),
        )
        .unwrap();
        assert_eq!(back.kind(), MentionType::BotCommand);
        assert_eq!(back.url(), None);
        assert!(back.user().is_none());
    }

    #[test]
    fn negative_offsets_do_not_decode() {
        let res = serde_json::from_value::<MessageEntity>(
            json!({ "type": "bold", "offset": -1, "length": 1 }),
        );
        assert!(res.is_err());
    }

    #[test]
    fn slice_counts_utf16_units() {
        // The emoji is two UTF-16 units.
        let text = "😀 #rust rocks";
        let entity = MessageEntity::new(MentionType::Hashtag, 3, 5);
        assert_eq!(entity.end(), 8);
        assert_eq!(entity.slice(text).as_deref(), Some("#rust"));

        let past_end = MessageEntity::new(MentionType::Hashtag, 10, 50);
        assert_eq!(past_end.slice(text), None);

        let split_pair = MessageEntity::new(MentionType::Bold, 1, 1);
        assert_eq!(split_pair.slice(text), None);
    }

    #[test]
    fn payload_exclusivity_is_reported() {
        let both = MessageEntity::builder()
            .kind(MentionType::Mention)
            .offset(0)
            .length(1)
            .url("http://x")
            .user(someone())
            .build();
        let err = both.validate().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["url", "user"]);
        assert!(err.violations().iter().all(|v| v.rule == Rule::Payload));

        let missing = MessageEntity::new(MentionType::TextMention, 0, 1);
        let err = missing.validate().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["user"]);

        let nested = MessageEntity::builder()
            .kind(MentionType::TextMention)
            .offset(0)
            .length(1)
            .user(User::builder().id(1).first_name(" ").build())
            .build();
        let err = nested.validate().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["user.first_name"]);
    }
}
