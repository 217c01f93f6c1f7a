//! Flat records exchanged with the Bot API.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::validation::{Validate, Validator};

/// A Telegram user or bot.
///
/// Equality covers every field, the identifier included.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct User {
    id: i64,

    #[builder(into)]
    first_name: String,

    #[builder(into)]
    #[serde(default)]
    last_name: Option<String>,

    #[builder(into)]
    #[serde(default, rename = "userName", alias = "username")]
    user_name: Option<String>,
}

impl User {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}

impl Validate for User {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("first_name", &self.first_name);
    }
}

/// A phone contact.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct Contact {
    #[builder(into)]
    phone_number: String,

    #[builder(into)]
    first_name: String,

    #[builder(into)]
    #[serde(default)]
    last_name: Option<String>,

    #[serde(default)]
    user_id: Option<i64>,
}

impl Contact {
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }
}

impl Validate for Contact {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("phone_number", &self.phone_number);
        v.not_blank("first_name", &self.first_name);
    }
}

/// A voice note.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct Voice {
    #[builder(into)]
    file_id: String,

    /// Duration in seconds, as defined by the sender.
    duration: u32,

    #[builder(into)]
    #[serde(default)]
    mime_type: Option<String>,

    #[serde(default)]
    file_size: Option<u64>,
}

impl Voice {
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn file_size(&self) -> Option<u64> {
        self.file_size
    }
}

impl Validate for Voice {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("file_id", &self.file_id);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn user_wire_names_and_omission() {
        let user = User::builder().id(7).first_name("Ada").build();
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({ "id": 7, "first_name": "Ada" }));

        let full = User::builder()
            .id(7)
            .first_name("Ada")
            .last_name("Lovelace")
            .user_name("ada")
            .build();
        let value = serde_json::to_value(&full).unwrap();
        assert_eq!(value["last_name"], "Lovelace");
        assert_eq!(value["userName"], "ada");
    }

    #[test]
    fn user_accepts_bot_api_username_key() {
        let user: User =
            serde_json::from_value(json!({ "id": 1, "first_name": "B", "username": "bee" }))
                .unwrap();
        assert_eq!(user.user_name(), Some("bee"));
    }

    #[test]
    fn user_equality_includes_id() {
        let a = User::builder().id(1).first_name("Ada").build();
        let b = User::builder().id(2).first_name("Ada").build();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn contact_round_trip_keeps_unset_fields_unset() {
        let contact = Contact::builder()
            .phone_number("+39 02 1234")
            .first_name("Mario")
            .build();
        let s = serde_json::to_string(&contact).unwrap();
        assert_eq!(s, r#"{"phone_number":"+39 02 1234","first_name":"Mario"}"#);
        let back: Contact = serde_json::from_str(&s).unwrap();
        assert_eq!(back, contact);
        assert_eq!(back.user_id(), None);
    }

    #[test]
    fn voice_requires_duration_on_decode() {
        let err = serde_json::from_value::<Voice>(json!({ "file_id": "f" })).unwrap_err();
        assert!(err.to_string().contains("duration"));

        let voice: Voice = serde_json::from_value(
            json!({ "file_id": "f", "duration": 3, "mime_type": "audio/ogg", "file_size": 10 }),
        )
        .unwrap();
        assert_eq!(voice.duration(), 3);
        assert_eq!(voice.mime_type(), Some("audio/ogg"));
        assert_eq!(voice.file_size(), Some(10));
    }

    #[test]
    fn voice_validation_reports_blank_file_id() {
        let voice = Voice::builder().file_id(" ").duration(1).build();
        let err = voice.validate().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["file_id"]);
    }

    #[test]
    fn contact_validation_reports_all_blank_fields() {
        let contact = Contact::builder().phone_number("").first_name("").build();
        let err = contact.validate().unwrap_err();
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec!["phone_number", "first_name"]
        );
    }
}
