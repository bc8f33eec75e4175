//! Password hashing and verification using Argon2id.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hash a plaintext password with Argon2id and a random salt.
///
/// Returns the PHC-format hash string suitable for storage.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// Returns `Ok(true)` on match, `Ok(false)` on mismatch, and `Err` only
/// when the stored hash itself is malformed.
pub fn verify_password(
    password: &str,
    stored_hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(stored_hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Validate password strength before hashing.
///
/// Requires at least [`MIN_PASSWORD_LEN`] characters, one letter and one
/// digit. Returns a human-readable message on failure.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    if !password.chars().any(|c| c.is_alphabetic()) {
        return Err("password must contain at least one letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("password must contain at least one digit".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse 1").unwrap();
        assert!(verify_password("correct horse 1", &hash).unwrap());
        assert!(!verify_password("wrong password 2", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("samepassword1").unwrap();
        let b = hash_password("samepassword1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("whatever1", "not-a-phc-hash").is_err());
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password_strength("short1").is_err());
        assert!(validate_password_strength("alllettersonly").is_err());
        assert!(validate_password_strength("12345678901").is_err());
        assert!(validate_password_strength("goodenough1").is_ok());
    }
}
