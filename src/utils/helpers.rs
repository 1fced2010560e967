//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

/// Length of generated event join codes
pub const JOIN_CODE_LENGTH: usize = 12;

/// Generate a random alphanumeric string
pub fn generate_random_string(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                            abcdefghijklmnopqrstuvwxyz\
                            0123456789";
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate a unique-enough join code for a new event
pub fn generate_join_code() -> String {
    generate_random_string(JOIN_CODE_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_string_length() {
        assert_eq!(generate_random_string(12).len(), 12);
        assert_eq!(generate_random_string(0).len(), 0);
    }

    #[test]
    fn test_join_code_is_alphanumeric() {
        let code = generate_join_code();
        assert_eq!(code.len(), JOIN_CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
