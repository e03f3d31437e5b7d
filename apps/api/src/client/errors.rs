use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A required input was empty; nothing was sent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a GraphQL error
    #[error("{code}: {message}")]
    Api { code: String, message: String },

    /// The response had no value for the expected field
    #[error("response is missing `{0}`")]
    MissingData(&'static str),

    #[error("could not decode `{field}`: {source}")]
    Decode {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Error code reported by the server, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}
