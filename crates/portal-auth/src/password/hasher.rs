//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use portal_core::error::AppError;

/// Handles portal password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    ///
    /// Each call produces a differently encoded hash for the same input;
    /// all of them verify. Hashing failure is fatal to the creation flow.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Returns `false` for a wrong password and for any malformed stored
    /// hash. Callers cannot distinguish the two cases.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Rejecting check against malformed password hash");
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("hunter2").unwrap();
        assert!(hasher.verify_password("hunter2", &hash));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("hunter2").unwrap();
        assert!(!hasher.verify_password("hunter3", &hash));
    }

    #[test]
    fn test_salted_hashes_differ_but_both_verify() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash_password("hunter2").unwrap();
        let second = hasher.hash_password("hunter2").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify_password("hunter2", &first));
        assert!(hasher.verify_password("hunter2", &second));
    }

    #[test]
    fn test_malformed_hash_is_false_not_error() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify_password("hunter2", "not-a-phc-string"));
        assert!(!hasher.verify_password("hunter2", ""));
    }
}
