/*
[INPUT]:  Request path, body bytes, and a strictly increasing nonce
[OUTPUT]: Signed request headers (ACCESS_KEY / ACCESS_SIGNATURE / ACCESS_NONCE)
[POS]:    Auth layer - HMAC request signing
[UPDATE]: When changing signing algorithm or header format
*/

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs requests with an API key pair.
///
/// The nonce counter is seeded from the current UNIX time in microseconds
/// and incremented atomically per signature, so nonces never repeat or
/// decrease across concurrent callers of one client instance.
#[derive(Debug)]
pub struct HmacSigner {
    key: String,
    secret: String,
    nonce: AtomicU64,
}

impl HmacSigner {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0);
        Self {
            key: key.into(),
            secret: secret.into(),
            nonce: AtomicU64::new(seed),
        }
    }

    /// The API key id sent in the ACCESS_KEY header.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Consume and return the next nonce.
    pub fn next_nonce(&self) -> u64 {
        self.nonce.fetch_add(1, Ordering::SeqCst)
    }

    /// Sign the canonical string `nonce + path + body` with HMAC-SHA256.
    /// Returns the hex-encoded signature.
    pub fn sign(&self, nonce: u64, path: &str, body: &str) -> String {
        let message = format!("{nonce}{path}{body}");
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
