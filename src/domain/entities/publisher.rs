//! Domain entity representing a publisher.

/// A publisher owning zero or more books.
///
/// The `id` is generated by the service at creation time; `name` is unique
/// across publishers, which the storage layer enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher {
    pub id: String,
    pub name: String,
}

impl Publisher {
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publisher_creation() {
        let publisher = Publisher::new(
            "284073e2-3494-4653-8f8e-38dfe2ce664d".to_string(),
            "Editora 1".to_string(),
        );

        assert_eq!(publisher.id, "284073e2-3494-4653-8f8e-38dfe2ce664d");
        assert_eq!(publisher.name, "Editora 1");
    }
}
