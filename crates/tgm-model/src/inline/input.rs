//! Content sent in place of an inline result when the user picks it.
//!
//! The family carries no discriminant on the wire: the API knows from the
//! enclosing slot that it expects message content, and the concrete shape
//! follows from which fields are present. Decoding picks the shape from the
//! keys of the object and then decodes that shape strictly, so a venue with a
//! missing field is an error rather than a bare location.

use std::hash::{Hash, Hasher};

use bon::Builder;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::{
    entity::MessageEntity,
    outbound::ParseMode,
    validation::{Validate, Validator},
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum InputMessageContent {
    Venue(InputVenueMessageContent),
    Location(InputLocationMessageContent),
    Contact(InputContactMessageContent),
    Text(InputTextMessageContent),
}

impl InputMessageContent {
    /// The coordinates, for the location-like shapes.
    pub fn location(&self) -> Option<&InputLocationMessageContent> {
        match self {
            Self::Venue(venue) => Some(venue.location()),
            Self::Location(location) => Some(location),
            Self::Contact(_) | Self::Text(_) => None,
        }
    }
}

const VENUE_KEYS: &[&str] = &["title", "address", "foursquare_id"];
const VENUE_FIELDS: &[&str] = &["latitude", "longitude", "title", "address", "foursquare_id"];
const LOCATION_FIELDS: &[&str] = &["latitude", "longitude"];

impl InputMessageContent {
    fn from_object(object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        if VENUE_KEYS.iter().any(|key| object.contains_key(*key)) {
            // serde cannot deny unknown fields next to `flatten`.
            reject_unknown(&object, VENUE_FIELDS)?;
            serde_json::from_value(Value::Object(object)).map(Self::Venue)
        } else if object.contains_key("phone_number") {
            serde_json::from_value(Value::Object(object)).map(Self::Contact)
        } else if object.contains_key("message_text") {
            serde_json::from_value(Value::Object(object)).map(Self::Text)
        } else {
            reject_unknown(&object, LOCATION_FIELDS)?;
            serde_json::from_value(Value::Object(object)).map(Self::Location)
        }
    }
}

fn reject_unknown(
    object: &Map<String, Value>,
    allowed: &'static [&'static str],
) -> Result<(), serde_json::Error> {
    match object.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(de::Error::unknown_field(key, allowed)),
        None => Ok(()),
    }
}

impl<'de> Deserialize<'de> for InputMessageContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_object(object).map_err(de::Error::custom)
    }
}

impl From<InputVenueMessageContent> for InputMessageContent {
    fn from(value: InputVenueMessageContent) -> Self {
        Self::Venue(value)
    }
}

impl From<InputLocationMessageContent> for InputMessageContent {
    fn from(value: InputLocationMessageContent) -> Self {
        Self::Location(value)
    }
}

impl From<InputContactMessageContent> for InputMessageContent {
    fn from(value: InputContactMessageContent) -> Self {
        Self::Contact(value)
    }
}

impl From<InputTextMessageContent> for InputMessageContent {
    fn from(value: InputTextMessageContent) -> Self {
        Self::Text(value)
    }
}

impl Validate for InputMessageContent {
    fn validate_into(&self, v: &mut Validator<'_>) {
        match self {
            Self::Venue(content) => content.validate_into(v),
            Self::Location(content) => content.validate_into(v),
            Self::Contact(content) => content.validate_into(v),
            Self::Text(content) => content.validate_into(v),
        }
    }
}

/// A location to be sent as the result message.
///
/// Coordinates compare and hash by bit pattern, so equality is reflexive even
/// for NaN and `0.0` differs from `-0.0`. Validation rejects NaN and other
/// non-finite values; `-0.0` is a valid coordinate.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[must_use]
pub struct InputLocationMessageContent {
    latitude: f64,
    longitude: f64,
}

impl InputLocationMessageContent {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl PartialEq for InputLocationMessageContent {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for InputLocationMessageContent {}

impl Hash for InputLocationMessageContent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl Validate for InputLocationMessageContent {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.range("latitude", self.latitude, -90.0, 90.0);
        v.range("longitude", self.longitude, -180.0, 180.0);
    }
}

/// A venue: a location plus a name and an address.
///
/// The location fields sit at the top level of the JSON object.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct InputVenueMessageContent {
    #[serde(flatten)]
    location: InputLocationMessageContent,

    #[builder(into)]
    title: String,

    #[builder(into)]
    address: String,

    #[builder(into)]
    #[serde(default)]
    foursquare_id: Option<String>,
}

impl InputVenueMessageContent {
    pub fn location(&self) -> &InputLocationMessageContent {
        &self.location
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn foursquare_id(&self) -> Option<&str> {
        self.foursquare_id.as_deref()
    }
}

impl AsRef<InputLocationMessageContent> for InputVenueMessageContent {
    fn as_ref(&self) -> &InputLocationMessageContent {
        &self.location
    }
}

impl From<InputVenueMessageContent> for InputLocationMessageContent {
    fn from(venue: InputVenueMessageContent) -> Self {
        venue.location
    }
}

impl Validate for InputVenueMessageContent {
    fn validate_into(&self, v: &mut Validator<'_>) {
        self.location.validate_into(v);
        v.not_blank("title", &self.title);
        v.not_blank("address", &self.address);
    }
}

/// A text message to be sent as the result message.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[must_use]
pub struct InputTextMessageContent {
    #[builder(into)]
    message_text: String,

    #[serde(default)]
    parse_mode: Option<ParseMode>,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    entities: Vec<MessageEntity>,

    #[serde(default)]
    disable_web_page_preview: Option<bool>,
}

impl InputTextMessageContent {
    pub fn new(message_text: impl Into<String>) -> Self {
        Self::builder().message_text(message_text).build()
    }

    pub fn message_text(&self) -> &str {
        &self.message_text
    }

    pub fn parse_mode(&self) -> Option<ParseMode> {
        self.parse_mode
    }

    pub fn entities(&self) -> &[MessageEntity] {
        &self.entities
    }

    pub fn disable_web_page_preview(&self) -> Option<bool> {
        self.disable_web_page_preview
    }
}

impl Validate for InputTextMessageContent {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("message_text", &self.message_text);
        let max = v.limits().message_text_max_chars;
        v.max_chars("message_text", &self.message_text, max);
        v.nested_each("entities", &self.entities);
    }
}

/// A contact to be sent as the result message.
#[skip_serializing_none]
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[must_use]
pub struct InputContactMessageContent {
    #[builder(into)]
    phone_number: String,

    #[builder(into)]
    first_name: String,

    #[builder(into)]
    #[serde(default)]
    last_name: Option<String>,
}

impl InputContactMessageContent {
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }
}

impl Validate for InputContactMessageContent {
    fn validate_into(&self, v: &mut Validator<'_>) {
        v.not_blank("phone_number", &self.phone_number);
        v.not_blank("first_name", &self.first_name);
    }
}
