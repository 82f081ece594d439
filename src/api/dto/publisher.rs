//! DTOs for the publisher endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Publisher;

/// Request body for `POST /publishers`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePublisherRequest {
    #[validate(length(min = 1))]
    pub name: String,
}

/// JSON representation of a publisher.
#[derive(Debug, Clone, Serialize)]
pub struct PublisherItem {
    pub id: String,
    pub name: String,
}

impl From<Publisher> for PublisherItem {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected() {
        let req = CreatePublisherRequest {
            name: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_name_is_accepted() {
        let req = CreatePublisherRequest {
            name: "Editora 4".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
