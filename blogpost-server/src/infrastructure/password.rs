use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::error::DomainError;

pub(crate) trait CredentialHasher: Send + Sync {
    /// Salted one-way hash in PHC string form (salt and parameters embedded).
    fn hash(&self, raw_password: &str) -> Result<String, DomainError>;

    /// `false` on mismatch and on a hash that cannot be parsed.
    fn verify(&self, raw_password: &str, password_hash: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Argon2Hasher;

impl Argon2Hasher {
    fn argon2() -> Result<Argon2<'static>, DomainError> {
        let params = Params::new(19 * 1024, 2, 1, None)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, raw_password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Self::argon2()?
            .hash_password(raw_password.as_bytes(), &salt)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(password_hash.to_string())
    }

    fn verify(&self, raw_password: &str, password_hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
            return false;
        };
        let Ok(argon2) = Self::argon2() else {
            return false;
        };
        argon2
            .verify_password(raw_password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
