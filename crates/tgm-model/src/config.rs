use std::env;

use crate::{errors::Error, Result};

/// Limits applied by the validation pass.
///
/// Defaults follow the current Bot API documentation. Embedders that talk to a
/// self-hosted API server with other limits can override them from the
/// environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum caption length, in characters, after entity parsing.
    pub caption_max_chars: usize,
    /// Maximum text length of an input text message.
    pub message_text_max_chars: usize,
    /// Maximum size of an inline result identifier, in bytes.
    pub result_id_max_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            caption_max_chars: 1024,
            message_text_max_chars: 4096,
            result_id_max_bytes: 64,
        }
    }
}

impl Limits {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Limits::from_env`] but with an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            caption_max_chars: usize_var(&lookup, "TGM_CAPTION_MAX_CHARS")?
                .unwrap_or(defaults.caption_max_chars),
            message_text_max_chars: usize_var(&lookup, "TGM_MESSAGE_TEXT_MAX_CHARS")?
                .unwrap_or(defaults.message_text_max_chars),
            result_id_max_bytes: usize_var(&lookup, "TGM_RESULT_ID_MAX_BYTES")?
                .unwrap_or(defaults.result_id_max_bytes),
        })
    }
}

fn usize_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<usize>> {
    let Some(raw) = lookup(key).and_then(non_empty) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<usize>()
        .map(Some)
        .map_err(|e| Error::Config(format!("{key}={raw:?} is not a valid size: {e}")))
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let limits = Limits::from_lookup(lookup(&[])).unwrap();
        assert_eq!(limits, Limits::default());
    }

    #[test]
    fn overrides_and_blank_values() {
        let limits = Limits::from_lookup(lookup(&[
            ("TGM_CAPTION_MAX_CHARS", " 200 "),
            ("TGM_RESULT_ID_MAX_BYTES", ""),
        ]))
        .unwrap();
        assert_eq!(limits.caption_max_chars, 200);
        assert_eq!(limits.message_text_max_chars, 4096);
        assert_eq!(limits.result_id_max_bytes, 64);
    }

    #[test]
    fn rejects_garbage() {
        let err = Limits::from_lookup(lookup(&[("TGM_MESSAGE_TEXT_MAX_CHARS", "lots")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("TGM_MESSAGE_TEXT_MAX_CHARS")));
    }
}
