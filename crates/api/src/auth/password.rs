//! Password hashing and verification.
//!
//! New hashes are Argon2id in PHC string format, so the algorithm
//! parameters and salt are embedded in the stored value. Verification also
//! accepts bcrypt hashes (`$2a$`, `$2b$`, `$2y$`) so existing admin
//! credential files keep working.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

const BCRYPT_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2y$"];
const BCRYPT_HASH_LEN: usize = 60;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("argon2: {0}")]
    Argon2(argon2::password_hash::Error),

    #[error("bcrypt: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<argon2::password_hash::Error> for PasswordError {
    fn from(e: argon2::password_hash::Error) -> Self {
        Self::Argon2(e)
    }
}

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored Argon2id PHC or bcrypt hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    if is_bcrypt_hash(hash) {
        return Ok(bcrypt::verify(password, hash)?);
    }

    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// `$2?$NN$` followed by 53 characters of salt and digest.
fn is_bcrypt_hash(hash: &str) -> bool {
    if hash.len() != BCRYPT_HASH_LEN || !BCRYPT_PREFIXES.iter().any(|p| hash.starts_with(p)) {
        return false;
    }
    let cost = &hash[4..6];
    cost.chars().all(|c| c.is_ascii_digit()) && hash.as_bytes()[6] == b'$'
}

/// Check that a stored hash is a parseable PHC string or a bcrypt hash.
pub fn is_valid_hash(hash: &str) -> bool {
    is_bcrypt_hash(hash) || PasswordHash::new(hash).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"), "expected argon2id PHC prefix");
        assert!(is_valid_hash(&hash));

        let verified =
            verify_password("correct-horse-battery-staple", &hash).expect("verify should succeed");
        assert!(verified);
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password").expect("hashing should succeed");
        let verified = verify_password("wrong-password", &hash).expect("verify should succeed");
        assert!(!verified);
    }

    #[test]
    fn test_bcrypt_hashes_verify() {
        let hash = bcrypt::hash("legacy-password", 4).expect("bcrypt hashing should succeed");
        assert!(hash.starts_with("$2b$"));
        assert!(is_valid_hash(&hash));
        assert!(verify_password("legacy-password", &hash).unwrap());
        assert!(!verify_password("other-password", &hash).unwrap());

        for prefix in ["$2a$", "$2y$"] {
            let variant = format!("{prefix}{}", &hash[4..]);
            assert!(is_valid_hash(&variant));
            assert!(verify_password("legacy-password", &variant).unwrap());
        }
    }

    #[test]
    fn test_garbage_hash_is_rejected() {
        assert!(!is_valid_hash("plaintext"));
        assert!(!is_valid_hash("$2b$10$tooshort"));
        assert!(verify_password("anything", "plaintext").is_err());
    }
}
