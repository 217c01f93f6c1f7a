//! Typed data model for the Telegram Bot API wire objects.
//!
//! Every record here is an immutable value built through a builder and
//! (de)serialized with serde. Transport, authentication and update delivery
//! are left to the caller; this crate only hands out validated values.

pub mod codec;
pub mod config;
pub mod domain;
pub mod entity;
pub mod errors;
pub mod inline;
pub mod logging;
pub mod outbound;
pub mod reply_markup;
pub mod validation;

pub use errors::{DecodeError, Error, Result};
pub use validation::{Validate, ValidationErrors};
