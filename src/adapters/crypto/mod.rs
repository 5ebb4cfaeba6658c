//! Cryptographic adapters.

mod bcrypt_hasher;

pub use bcrypt_hasher::BcryptPasswordHasher;
