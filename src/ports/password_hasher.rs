//! PasswordHasher port - one-way hashing of account passwords.
//!
//! Hashing is CPU-bound and performs no I/O, so the port is synchronous
//! and can be driven from inside the domain's update reconciliation.

use crate::domain::foundation::DomainError;
use crate::domain::user::{HashedPassword, PlainPassword};

/// Port for hashing and verifying passwords.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a validated plaintext password.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the hashing backend fails
    fn hash(&self, password: &PlainPassword) -> Result<HashedPassword, DomainError>;

    /// Checks a plaintext candidate against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; errors are reserved for backend
    /// failures.
    fn verify(&self, password: &PlainPassword, hash: &HashedPassword) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hasher_is_object_safe() {
        fn _accepts_dyn(_hasher: &dyn PasswordHasher) {}
    }
}
