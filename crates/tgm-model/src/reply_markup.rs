//! Shapes allowed in a message's `reply_markup` slot.
//!
//! [`ReplyMarkup`] is the closed set of members; a value type becomes a valid
//! reply markup by getting a variant here, nothing else.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::validation::{Validate, Validator};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
#[must_use]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
    RemoveKeyboard(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(value: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(value)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(value: ReplyKeyboardMarkup) -> Self {
        Self::ReplyKeyboard(value)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(value: ReplyKeyboardRemove) -> Self {
        Self::RemoveKeyboard(value)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(value: ForceReply) -> Self {
        Self::ForceReply(value)
    }
}

impl Validate for ReplyMarkup {
    fn validate_into(&self, v: &mut Validator<'_>) {
        match self {
            Self::InlineKeyboard(markup) => markup.validate_into(v),
            Self::ReplyKeyboard(markup) => markup.validate_into(v),
            Self::RemoveKeyboard(_) | Self::ForceReply(_) => {}
        }
    }
}

/// Makes clients show a reply interface, as if the user tapped "Reply" on
/// the bot's message.
///
/// See also: <https://core.telegram.org/bots/api#forcereply>.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct ForceReply {
    #[builder(default = true)]
    force_reply: bool,

    #[builder(into)]
    #[serde(default)]
    input_field_placeholder: Option<String>,

    /// Only show the reply interface to mentioned users and the replied-to sender.
    #[serde(default)]
    selective: Option<bool>,
}

impl ForceReply {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn force_reply(&self) -> bool {
        self.force_reply
    }

    pub fn input_field_placeholder(&self) -> Option<&str> {
        self.input_field_placeholder.as_deref()
    }

    pub fn selective(&self) -> Option<bool> {
        self.selective
    }
}

impl Default for ForceReply {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes the current custom keyboard and shows the default letter keyboard.
///
/// See also: <https://core.telegram.org/bots/api#replykeyboardremove>.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct ReplyKeyboardRemove {
    #[builder(default = true)]
    remove_keyboard: bool,

    #[serde(default)]
    selective: Option<bool>,
}

impl ReplyKeyboardRemove {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn remove_keyboard(&self) -> bool {
        self.remove_keyboard
    }

    pub fn selective(&self) -> Option<bool> {
        self.selective
    }
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self::new()
    }
}

/// A custom keyboard with reply options.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct ReplyKeyboardMarkup {
    keyboard: Vec<Vec<KeyboardButton>>,

    #[serde(default)]
    resize_keyboard: Option<bool>,

    #[serde(default)]
    one_time_keyboard: Option<bool>,

    #[serde(default)]
    selective: Option<bool>,
}

impl ReplyKeyboardMarkup {
    pub fn keyboard(&self) -> &[Vec<KeyboardButton>] {
        &self.keyboard
    }

    pub fn resize_keyboard(&self) -> Option<bool> {
        self.resize_keyboard
    }

    pub fn one_time_keyboard(&self) -> Option<bool> {
        self.one_time_keyboard
    }

    pub fn selective(&self) -> Option<bool> {
        self.selective
    }
}

impl Validate for ReplyKeyboardMarkup {
    fn validate_into(&self, v: &mut Validator<'_>) {
        if self.keyboard.iter().all(Vec::is_empty) {
            v.payload("keyboard", "must contain at least one button");
        }
        for (r, row) in self.keyboard.iter().enumerate() {
            for (c, button) in row.iter().enumerate() {
                v.nested(&format!("keyboard[{r}][{c}]"), button);
            }
        }
    }
}

#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct KeyboardButton {
    #[builder(into)]
    text: String,

    #[serde(default)]
    request_contact: Option<bool>,

    #[serde(default)]
    request_location: Option<bool>,
}

impl KeyboardButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self::builder().text(text).build()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn request_contact(&self) -> Option<bool> {
        self.request_contact
    }

    pub fn request_location(&self) -> Option<bool> {
        self.request_location
    }
}

impl Validate for KeyboardButton {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("text", &self.text);
        if self.request_contact == Some(true) && self.request_location == Some(true) {
            v.payload(
                "request_location",
                "request_contact and request_location are mutually exclusive",
            );
        }
    }
}

/// An inline keyboard that appears right next to the message it belongs to.
///
/// See also: <https://core.telegram.org/bots/api#inlinekeyboardmarkup>.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InlineKeyboardMarkup {
    inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }

    pub fn single_button(button: InlineKeyboardButton) -> Self {
        Self::new(vec![vec![button]])
    }

    pub fn rows(&self) -> &[Vec<InlineKeyboardButton>] {
        &self.inline_keyboard
    }
}

impl From<Vec<Vec<InlineKeyboardButton>>> for InlineKeyboardMarkup {
    fn from(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self::new(rows)
    }
}

impl Validate for InlineKeyboardMarkup {
    fn validate_into(&self, v: &mut Validator<'_>) {
        for (r, row) in self.inline_keyboard.iter().enumerate() {
            for (c, button) in row.iter().enumerate() {
                v.nested(&format!("inline_keyboard[{r}][{c}]"), button);
            }
        }
    }
}

/// One button of an inline keyboard. Exactly one action field must be set.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InlineKeyboardButton {
    #[builder(into)]
    text: String,

    #[builder(into)]
    #[serde(default)]
    url: Option<String>,

    #[builder(into)]
    #[serde(default)]
    callback_data: Option<String>,

    #[builder(into)]
    #[serde(default)]
    switch_inline_query: Option<String>,

    #[builder(into)]
    #[serde(default)]
    switch_inline_query_current_chat: Option<String>,
}

impl InlineKeyboardButton {
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::builder().text(text).url(url).build()
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self::builder().text(text).callback_data(data).build()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn callback_data(&self) -> Option<&str> {
        self.callback_data.as_deref()
    }

    pub fn switch_inline_query(&self) -> Option<&str> {
        self.switch_inline_query.as_deref()
    }

    pub fn switch_inline_query_current_chat(&self) -> Option<&str> {
        self.switch_inline_query_current_chat.as_deref()
    }

    fn action_count(&self) -> usize {
        [
            self.url.is_some(),
            self.callback_data.is_some(),
            self.switch_inline_query.is_some(),
            self.switch_inline_query_current_chat.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

impl Validate for InlineKeyboardButton {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("text", &self.text);
        if self.action_count() != 1 {
            v.payload("text", "exactly one button action must be set");
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn directives_default_to_true_and_omit_selective() {
        let force = ReplyMarkup::from(ForceReply::new());
        assert_eq!(
            serde_json::to_value(&force).unwrap(),
            json!({ "force_reply": true })
        );

        let remove = ReplyKeyboardRemove::builder().selective(true).build();
        assert_eq!(
            serde_json::to_value(ReplyMarkup::from(remove)).unwrap(),
            json!({ "remove_keyboard": true, "selective": true })
        );
    }

    #[test]
    fn untagged_members_decode_to_their_own_variant() {
        let cases = [
            (json!({ "force_reply": true }), "force"),
            (json!({ "remove_keyboard": true }), "remove"),
            (json!({ "keyboard": [[{ "text": "a" }]] }), "reply"),
            (json!({ "inline_keyboard": [[{ "text": "a", "url": "https://x" }]] }), "inline"),
        ];
        for (value, expected) in cases {
            let markup: ReplyMarkup = serde_json::from_value(value).unwrap();
            let got = match markup {
                ReplyMarkup::ForceReply(_) => "force",
                ReplyMarkup::RemoveKeyboard(_) => "remove",
                ReplyMarkup::ReplyKeyboard(_) => "reply",
                ReplyMarkup::InlineKeyboard(_) => "inline",
            };
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn same_flags_in_different_members_are_not_equal() {
        let force = ReplyMarkup::from(ForceReply::builder().selective(true).build());
        let remove = ReplyMarkup::from(ReplyKeyboardRemove::builder().selective(true).build());
        assert_ne!(force, remove);
    }

    #[test]
    fn single_button_keyboard_wire_shape() {
        let markup = InlineKeyboardMarkup::single_button(InlineKeyboardButton::link(
            "Test",
            "https://example.org",
        ));
        assert_eq!(
            serde_json::to_string(&markup).unwrap(),
            r#"{"inline_keyboard":[[{"text":"Test","url":"https://example.org"}]]}"#
        );
    }

    #[test]
    fn keyboard_validation_paths() {
        let inline = InlineKeyboardMarkup::new(vec![vec![
            InlineKeyboardButton::callback("ok", "/ok"),
            InlineKeyboardButton::builder().text("none").build(),
        ]]);
        let err = inline.validate().unwrap_err();
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec!["inline_keyboard[0][1].text"]
        );

        let reply = ReplyKeyboardMarkup::builder()
            .keyboard(vec![vec![KeyboardButton::new(""), KeyboardButton::new("b")]])
            .build();
        let err = ReplyMarkup::from(reply).validate().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["keyboard[0][0].text"]);

        let empty = ReplyKeyboardMarkup::builder().keyboard(vec![vec![]]).build();
        assert!(empty.validate().is_err());
    }
}
