#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(transparent)]
    MalformedInput(#[from] MalformedInput),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Rejected input passed to a builder or request preparation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("{0} cannot be null")]
    Missing(&'static str),
    #[error("{0} cannot be null or empty")]
    Empty(&'static str),
    #[error("parameter {0} is directly supported via the request builder and cannot be an additional parameter")]
    ReservedParameter(String),
    #[error("service configuration has no {0}")]
    MissingEndpoint(&'static str),
}

/// Serialized input that does not match the expected structure.
#[derive(Debug, thiserror::Error)]
pub enum MalformedInput {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} is not a valid url: {source}")]
    InvalidUrl {
        field: &'static str,
        source: url::ParseError,
    },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedInput(MalformedInput::Json(e))
    }
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}
