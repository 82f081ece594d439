//! Identifier generation for newly created entities.
//!
//! Use cases receive an [`IdGenerator`] instead of calling a global so tests
//! can pin the generated value.

use uuid::Uuid;

/// Produces fresh unique identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random (v4) UUID generator used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Generator that always returns the same identifier.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator(pub String);

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_produces_valid_uuids() {
        let id = UuidGenerator.generate();

        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn test_uuid_generator_is_unique() {
        let ids: std::collections::HashSet<_> = (0..100).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_fixed_generator() {
        let generator = FixedIdGenerator("fixed".to_string());
        assert_eq!(generator.generate(), "fixed");
        assert_eq!(generator.generate(), "fixed");
    }
}
