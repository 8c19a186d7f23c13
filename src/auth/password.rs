// One-way salted password hashing (bcrypt)

use bcrypt::{hash, verify, BcryptError};

use crate::config;

/// Hash a raw password for storage. Salt generation is bcrypt's.
pub fn hash_password(raw: &str) -> Result<String, BcryptError> {
    hash(raw, config::config().security.bcrypt_cost)
}

/// Compare a raw password against a stored hash.
pub fn verify_password(raw: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(raw, hashed)
}
