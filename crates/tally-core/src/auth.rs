//! Credential hashing for user accounts

use sha2::{Digest, Sha256};

/// Hash a password for storage
///
/// SHA-256 over the UTF-8 bytes, lowercase hex. Login compares digests,
/// so the plaintext never reaches the store.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
        assert_ne!(hash_password("secret"), hash_password("Secret"));
    }

    #[test]
    fn test_hash_is_sha256_hex() {
        // Known digest for the empty string
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(hash_password("secret").len(), 64);
    }
}
