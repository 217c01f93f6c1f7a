use crate::validation::ValidationErrors;

/// Core error type for the model crate.
///
/// Callers that only care about one failure class can match on the variant;
/// everything here is deterministic and never worth retrying.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to turn an inbound JSON document into a model value.
///
/// `family` names the tagged family being decoded (e.g. `inline_query_result_cached`).
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("{family}: expected a JSON object")]
    NotAnObject { family: &'static str },

    #[error("{family}: missing `type` field")]
    MissingDiscriminant { family: &'static str },

    #[error("{family}: `type` field must be a string")]
    InvalidDiscriminant { family: &'static str },

    #[error("{family}: unknown type `{value}`")]
    UnknownDiscriminant { family: &'static str, value: String },

    #[error("malformed {target}: {source}")]
    Malformed {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
