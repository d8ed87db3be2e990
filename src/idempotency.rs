//! Idempotency key generation.
//!
//! Mutating requests carry an `Idempotency-Key` header so upstream can
//! deduplicate retries within its dedup window. The generator is injected on
//! client construction and must be thread-safe.

use uuid::Uuid;

/// Capability producing one idempotency key per mutating request.
pub trait IdempotencyKeyGenerator: Send + Sync {
    /// Produces a fresh key.
    fn generate(&self) -> String;
}

/// Default generator: a fresh UUID v4 per request.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidKeyGenerator;

impl IdempotencyKeyGenerator for UuidKeyGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator returning a fixed key, for tests.
#[derive(Debug, Clone)]
pub struct FixedKeyGenerator {
    key: String,
}

impl FixedKeyGenerator {
    /// Creates a generator that always returns `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl IdempotencyKeyGenerator for FixedKeyGenerator {
    fn generate(&self) -> String {
        self.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_unique_and_well_formed() {
        let generator = UuidKeyGenerator;
        let a = generator.generate();
        let b = generator.generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_fixed_generator_deterministic() {
        let generator = FixedKeyGenerator::new("fixed-key");
        assert_eq!(generator.generate(), "fixed-key");
        assert_eq!(generator.generate(), "fixed-key");
    }
}
