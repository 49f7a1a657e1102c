//! Request signing for the Marvel API.
//!
//! Every server-side request carries `ts`, `apikey` and `hash` where
//! `hash = md5(ts + private_key + public_key)` in lower-case hex.

use chrono::Utc;
use md5::{Digest, Md5};

/// Public/private key pair issued by the Marvel developer portal.
#[derive(Clone)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    /// Creates a new instance of [`Credentials`]
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Public key, sent in the clear as `apikey`.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Signs `timestamp`, returning the 32 character lower-case hex digest.
    pub fn sign(&self, timestamp: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(timestamp.as_bytes());
        hasher.update(self.private_key.as_bytes());
        hasher.update(self.public_key.as_bytes());

        hex::encode(hasher.finalize())
    }
}

// Keep the private key out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Current wall-clock time as fractional seconds since the epoch, e.g. `1700000000.123456`.
pub fn timestamp_now() -> String {
    let now = Utc::now();

    format!("{}.{:06}", now.timestamp(), now.timestamp_subsec_micros())
}
