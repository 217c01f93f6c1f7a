//! Outbound message payloads handed to the transport.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    entity::MessageEntity,
    reply_markup::ReplyMarkup,
    validation::{Validate, Validator},
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Integer(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Integer(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    /// [HTML style][1].
    ///
    /// [1]: https://core.telegram.org/bots/api#html-style
    #[serde(rename = "HTML")]
    Html,

    Markdown,

    MarkdownV2,
}

/// Body of a `sendMessage` call.
///
/// See also: <https://core.telegram.org/bots/api#sendmessage>.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct SendMessage {
    #[builder(into)]
    chat_id: ChatId,

    #[builder(into)]
    text: String,

    #[serde(default)]
    parse_mode: Option<ParseMode>,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    entities: Vec<MessageEntity>,

    #[serde(default)]
    reply_to_message_id: Option<i64>,

    #[builder(into)]
    #[serde(default)]
    reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    pub fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parse_mode(&self) -> Option<ParseMode> {
        self.parse_mode
    }

    pub fn entities(&self) -> &[MessageEntity] {
        &self.entities
    }

    pub fn reply_to_message_id(&self) -> Option<i64> {
        self.reply_to_message_id
    }

    pub fn reply_markup(&self) -> Option<&ReplyMarkup> {
        self.reply_markup.as_ref()
    }
}

impl Validate for SendMessage {
    fn validate_into(&self, v: &mut Validator<'_>) {
        if let ChatId::Username(name) = &self.chat_id {
            if !name.starts_with('@') {
                v.payload("chat_id", "channel usernames must start with '@'");
            }
        }
        v.not_blank("text", &self.text);
        let max = v.limits().message_text_max_chars;
        v.max_chars("text", &self.text, max);
        v.nested_each("entities", &self.entities);
        v.nested("reply_markup", &self.reply_markup);
    }
}
