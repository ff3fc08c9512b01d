use thiserror::Error;

/// Construction-time failures raised by the builder.
///
/// Rendering itself is total; every error here is reported before any tag is
/// produced.
#[derive(Debug, Error)]
pub enum OpenGraphError {
    #[error("attributes must be a JSON object")]
    NotAnObject,
    #[error("unsupported og:type {0:?}")]
    UnknownObjectType(String),
    #[error("attribute {key:?} has unsupported shape, expected {expected}")]
    InvalidAttribute {
        key: &'static str,
        expected: &'static str,
    },
    #[error("attribute {key:?} holds invalid timestamp {value:?}")]
    InvalidTimestamp {
        key: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("attribute {key:?} holds invalid url {value:?}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}
