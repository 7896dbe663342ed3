use super::errors::PasswordError;

/// Lowest cost bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Hard ceiling on the bcrypt cost (2^8 rounds). Enforced at construction
/// so excessive CPU cost cannot be configured, let alone requested.
pub const MAX_COST: u32 = 8;

/// Password hashing implementation.
///
/// Wraps bcrypt with a bounded work factor. Verification delegates to
/// bcrypt's own constant-time hash comparison.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given cost, clamped into `[MIN_COST, MAX_COST]`.
    ///
    /// The clamp happens here, at configuration time; the cost is never
    /// derived from request input.
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }

    /// The effective cost after clamping.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// Modular crypt format hash string (includes cost and salt)
    ///
    /// # Errors
    /// * `HashingFailed` - bcrypt rejected the input
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| PasswordError::VerificationFailed(e.to_string()))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(MAX_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert_ne!(hash, password);

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_cost_is_clamped() {
        assert_eq!(PasswordHasher::new(12).cost(), MAX_COST);
        assert_eq!(PasswordHasher::new(0).cost(), MIN_COST);
        assert_eq!(PasswordHasher::new(6).cost(), 6);
    }

    #[test]
    fn test_clamped_cost_is_embedded_in_hash() {
        let hasher = PasswordHasher::new(200);
        let hash = hasher.hash("foobar").expect("Failed to hash password");
        // Modular crypt format: $2b$08$...
        assert!(hash.starts_with("$2"));
        assert!(hash.contains("$08$"));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new(4);
        let result = hasher.verify("password", "invalid_hash");
        assert!(result.is_err());
    }
}
