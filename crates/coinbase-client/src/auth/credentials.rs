/*
[INPUT]:  Caller-supplied API key/secret pair or bearer token
[OUTPUT]: Credentials selecting the authentication scheme per client
[POS]:    Auth layer - credential configuration
[UPDATE]: When the API adds authentication schemes
*/

/// Authentication material for a client instance. The scheme is chosen by
/// configuration at construction, not per request.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// HMAC signing with an API key id and a shared secret.
    ApiKey { key: String, secret: String },
    /// A static OAuth bearer token attached verbatim.
    Bearer { token: String },
}

impl Credentials {
    pub fn api_key(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Credentials::ApiKey {
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer {
            token: token.into(),
        }
    }
}
