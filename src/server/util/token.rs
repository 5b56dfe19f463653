use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                         abcdefghijklmnopqrstuvwxyz\
                         0123456789";

/// Length of booking cancel tokens.
pub const CANCEL_TOKEN_LENGTH: usize = 32;

/// Generates a random alphanumeric string of `length` characters.
///
/// Uses the thread-local CSPRNG; suitable for cancel tokens, password salts and
/// idempotence keys.
pub fn generate_token(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
