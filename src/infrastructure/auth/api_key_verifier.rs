use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of generated API keys and of the per-process salt.
pub const API_KEY_LENGTH: usize = 32;

/// Verifies the shared-secret `ApiKey` header. The plaintext secret is only
/// touched at construction: what the verifier holds is
/// `sha256(secret ++ salt)` with a salt generated fresh per process, and
/// every supplied credential is hashed the same way before the fixed-length
/// digest comparison. No rotation; the salt and digest live for the process
/// lifetime.
pub struct ApiKeyVerifier {
    salt: String,
    key_hash: [u8; 32],
}

impl ApiKeyVerifier {
    pub fn new(secret: &str) -> Self {
        let salt = random_alphanumeric(API_KEY_LENGTH);
        let key_hash = salted_digest(secret, &salt);
        Self { salt, key_hash }
    }

    /// True only when `supplied` is present and exactly equals the configured
    /// secret. An absent credential is always rejected.
    pub fn verify(&self, supplied: Option<&str>) -> bool {
        match supplied {
            Some(candidate) => salted_digest(candidate, &self.salt) == self.key_hash,
            None => false,
        }
    }

    /// Fresh random key for deployments that do not configure one. Printed
    /// once at startup; not recoverable afterward.
    pub fn generate_key() -> String {
        random_alphanumeric(API_KEY_LENGTH)
    }
}

fn salted_digest(secret: &str, salt: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(salt.as_bytes());
    hasher.finalize().into()
}

fn random_alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
