//! bcrypt implementation of the PasswordHasher port.

use crate::config::SecurityConfig;
use crate::domain::foundation::DomainError;
use crate::domain::user::{HashedPassword, PlainPassword};
use crate::ports::PasswordHasher;

/// Hashes passwords with bcrypt at a configurable cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Creates a hasher; `cost` is the log2 work factor (4..=31).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Creates a hasher at the configured work factor.
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &PlainPassword) -> Result<HashedPassword, DomainError> {
        let hashed = bcrypt::hash(password.expose(), self.cost)
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))?;
        HashedPassword::new(hashed).map_err(DomainError::from)
    }

    fn verify(&self, password: &PlainPassword, hash: &HashedPassword) -> Result<bool, DomainError> {
        bcrypt::verify(password.expose(), hash.as_str())
            .map_err(|e| DomainError::internal(format!("Password verification failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the tests fast.
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(4)
    }

    #[test]
    fn hash_produces_stored_format() {
        let password = PlainPassword::new("5tr0nG!.").unwrap();
        let hashed = hasher().hash(&password).unwrap();

        assert_eq!(hashed.as_str().len(), 60);
        assert!(hashed.as_str().starts_with("$2b$04$"));
    }

    #[test]
    fn verify_accepts_matching_password() {
        let password = PlainPassword::new("5tr0nG!.").unwrap();
        let hashed = hasher().hash(&password).unwrap();

        assert!(hasher().verify(&password, &hashed).unwrap());
    }

    #[test]
    fn verify_rejects_other_password() {
        let password = PlainPassword::new("5tr0nG!.").unwrap();
        let other = PlainPassword::new("0ther!Pass").unwrap();
        let hashed = hasher().hash(&password).unwrap();

        assert!(!hasher().verify(&other, &hashed).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let password = PlainPassword::new("5tr0nG!.").unwrap();
        let a = hasher().hash(&password).unwrap();
        let b = hasher().hash(&password).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn from_config_uses_configured_cost() {
        let config = SecurityConfig { bcrypt_cost: 6 };
        let hasher = BcryptPasswordHasher::from_config(&config);
        let hashed = hasher.hash(&PlainPassword::new("5tr0nG!.").unwrap()).unwrap();

        assert_eq!(hasher.cost(), 6);
        assert!(hashed.as_str().starts_with("$2b$06$"));
    }

    #[test]
    fn default_uses_library_cost() {
        assert_eq!(BcryptPasswordHasher::default().cost(), bcrypt::DEFAULT_COST);
    }
}
