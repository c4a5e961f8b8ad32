/*
[INPUT]:  Error sources (transport, decoding, auth, API rejections)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Coinbase client
#[derive(Error, Debug)]
pub enum CoinbaseError {
    /// A money value could not be parsed (missing currency or invalid amount)
    #[error("malformed money value: {raw:?}")]
    MalformedAmount { raw: String },

    /// A timestamp was not valid ISO-8601 with an explicit offset
    #[error("malformed timestamp: {raw:?}")]
    MalformedTimestamp { raw: String },

    /// A wire string did not match any variant of a closed enum
    #[error("unknown {kind} value: {value:?}")]
    UnknownEnumValue { kind: &'static str, value: String },

    /// A typed accessor was invoked on an envelope without that payload
    #[error("response envelope does not contain {expected}")]
    WrongEnvelopeShape { expected: &'static str },

    /// An authenticated call was made without configured credentials
    #[error("no API key/secret or bearer token configured")]
    MissingCredentials,

    /// The HTTP transport failed (connection, timeout, TLS)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON or no known envelope shape
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// URL construction failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The API reported a business-level failure, possibly over HTTP 200
    #[error("API error: {}", messages.join("; "))]
    Api {
        messages: Vec<String>,
        status: Option<u16>,
    },
}

impl CoinbaseError {
    /// Create an API error from the normalized message list and HTTP status
    pub fn api(messages: Vec<String>, status: Option<u16>) -> Self {
        CoinbaseError::Api { messages, status }
    }

    /// Check if the error is a business-level API rejection
    pub fn is_api_error(&self) -> bool {
        matches!(self, CoinbaseError::Api { .. })
    }

    /// The ordered API error messages, if this is an API rejection
    pub fn api_messages(&self) -> Option<&[String]> {
        match self {
            CoinbaseError::Api { messages, .. } => Some(messages),
            _ => None,
        }
    }

    /// The HTTP status attached to an API rejection, when one was available
    pub fn status(&self) -> Option<u16> {
        match self {
            CoinbaseError::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if the error happened before or during decoding, as opposed to
    /// a well-formed remote rejection
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            CoinbaseError::MalformedAmount { .. }
                | CoinbaseError::MalformedTimestamp { .. }
                | CoinbaseError::UnknownEnumValue { .. }
                | CoinbaseError::MalformedResponse(_)
        )
    }
}

/// Result type alias for Coinbase operations
pub type Result<T> = std::result::Result<T, CoinbaseError>;
