use rand::rngs::OsRng;
use rand::RngCore;

/// 32 random bytes hex-encode to 64 characters and carry 256 bits of entropy.
const TOKEN_BYTES: usize = 32;

/// Mint an opaque session token. Tokens have no internal structure; the only
/// thing ever done with one is an exact-match lookup against the stored
/// column, so nothing about the holder can be read out of the string itself.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_64_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_do_not_repeat() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
    }
}
