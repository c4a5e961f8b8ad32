/*
[INPUT]:  Authentication configuration and credentials
[OUTPUT]: Signed or token-bearing request headers
[POS]:    Auth layer - handles Coinbase API authentication
[UPDATE]: When auth schemes or header formats change
*/

pub mod credentials;
pub mod hmac;

pub use credentials::Credentials;
pub use hmac::HmacSigner;

/// Header carrying the API key id.
pub const ACCESS_KEY_HEADER: &str = "ACCESS_KEY";
/// Header carrying the hex HMAC signature.
pub const ACCESS_SIGNATURE_HEADER: &str = "ACCESS_SIGNATURE";
/// Header carrying the request nonce.
pub const ACCESS_NONCE_HEADER: &str = "ACCESS_NONCE";

/// Per-client authentication state, built once from [`Credentials`].
#[derive(Debug)]
pub(crate) enum Authenticator {
    Hmac(HmacSigner),
    Bearer(String),
}

impl Authenticator {
    pub(crate) fn from_credentials(credentials: Credentials) -> Self {
        match credentials {
            Credentials::ApiKey { key, secret } => {
                Authenticator::Hmac(HmacSigner::new(key, secret))
            }
            Credentials::Bearer { token } => Authenticator::Bearer(token),
        }
    }

    /// Compute the headers that authenticate one request. For the HMAC
    /// scheme this consumes a nonce, so call it exactly once per request.
    pub(crate) fn headers(&self, path: &str, body: &str) -> Vec<(&'static str, String)> {
        match self {
            Authenticator::Hmac(signer) => {
                let nonce = signer.next_nonce();
                let signature = signer.sign(nonce, path, body);
                vec![
                    (ACCESS_KEY_HEADER, signer.key().to_string()),
                    (ACCESS_SIGNATURE_HEADER, signature),
                    (ACCESS_NONCE_HEADER, nonce.to_string()),
                ]
            }
            Authenticator::Bearer(token) => {
                vec![("Authorization", format!("Bearer {token}"))]
            }
        }
    }
}
