//! Salted SHA-256 password hashing.
//!
//! Stored format is `salt$hex(sha256(salt || password))`.

use sha2::{Digest, Sha256};

use crate::server::util::token::generate_token;

const SALT_LENGTH: usize = 16;

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt = generate_token(SALT_LENGTH);
    let digest = digest(&salt, password);

    format!("{}${}", salt, digest)
}

/// Checks `password` against a stored `salt$hash` value.
///
/// Malformed stored values never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, expected)) = stored.split_once('$') else {
        return false;
    };

    let actual = digest(salt, password);

    // Compare every byte so timing does not depend on the mismatch position.
    actual.len() == expected.len()
        && actual
            .bytes()
            .zip(expected.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
