//! Security configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Smallest work factor bcrypt accepts.
pub const MIN_BCRYPT_COST: u32 = 4;

/// Largest work factor bcrypt accepts.
pub const MAX_BCRYPT_COST: u32 = 31;

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// bcrypt work factor (log2 rounds)
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    /// Validate security configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ValidationError::InvalidBcryptCost(self.bcrypt_cost));
        }
        Ok(())
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_bcrypt_cost() -> u32 {
    12
}
