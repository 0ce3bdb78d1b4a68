//! Random token generation.
//!
//! Two token shapes exist in the system: the 6-digit one-time code mailed
//! to a user during email verification, and the 20-character alphanumeric
//! share token that forms a published invitation's public URL. Both are
//! generated here; uniqueness of share tokens is enforced at the store
//! (generate, insert, retry on collision).

use rand::Rng;

/// Length of a share token.
pub const SHARE_TOKEN_LEN: usize = 20;

/// Length of a one-time verification code.
pub const ONE_TIME_CODE_LEN: usize = 6;

/// Generates a 6-digit one-time verification code.
pub fn generate_one_time_code() -> String {
    let mut rng = rand::thread_rng();
    (0..ONE_TIME_CODE_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}

/// Generates a 20-character alphanumeric share token.
///
/// Collisions are astronomically unlikely (62^20 space) but the caller
/// must still retry on a store uniqueness violation rather than assume.
pub fn generate_share_token() -> String {
    const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..SHARE_TOKEN_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARS.len());
            CHARS[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn one_time_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_one_time_code();
            assert_eq!(code.len(), ONE_TIME_CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn share_token_is_twenty_alphanumerics() {
        for _ in 0..100 {
            let token = generate_share_token();
            assert_eq!(token.len(), SHARE_TOKEN_LEN);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn share_tokens_do_not_collide_in_practice() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_share_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn one_time_codes_vary() {
        let codes: HashSet<String> = (0..200).map(|_| generate_one_time_code()).collect();
        // 6 digits give a million possibilities; 200 draws colliding en masse
        // would indicate a broken generator.
        assert!(codes.len() > 150);
    }
}
