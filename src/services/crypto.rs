use argon2::{
    password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

/// Hash a password with Argon2id and a fresh random salt
///
/// # Returns
/// The PHC-formatted hash string, or the underlying error message when
/// hashing fails
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| e.to_string())
}

/// Verify a password against a stored PHC hash string
///
/// Unparsable hashes and mismatched passwords both verify as false.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_produces_argon2_hash() {
        let hash = hash_password("mysecretpassword").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, "mysecretpassword");
    }

    #[test]
    fn test_verify_password_accepts_correct_password() {
        let hash = hash_password("correcthorse").expect("hashing should succeed");
        assert!(verify_password("correcthorse", &hash));
    }

    #[test]
    fn test_verify_password_rejects_wrong_password() {
        let hash = hash_password("correcthorse").expect("hashing should succeed");
        assert!(!verify_password("batterystaple", &hash));
    }

    #[test]
    fn test_verify_password_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-phc-hash"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hash1 = hash_password("samepassword").expect("hashing should succeed");
        let hash2 = hash_password("samepassword").expect("hashing should succeed");
        assert_ne!(hash1, hash2);
    }
}
