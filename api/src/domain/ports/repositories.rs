//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewProperty, Property, PropertyId};
use crate::error::DomainError;

/// Repository for Property entities
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Store a new property
    ///
    /// Returns `DomainError::AlreadyExists` if the name is taken.
    async fn create(&self, property: &NewProperty) -> Result<Property, DomainError>;

    /// List properties, oldest first
    async fn find_all(
        &self,
        limit: Option<u64>,
        offset: u64,
    ) -> Result<Vec<Property>, DomainError>;

    /// Find a property by ID
    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<Property>, DomainError>;

    /// Find a property by its unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Property>, DomainError>;

    /// Replace every field of a property
    ///
    /// Returns `None` if no property has this ID.
    async fn update(
        &self,
        id: &PropertyId,
        property: &NewProperty,
    ) -> Result<Option<Property>, DomainError>;

    /// Delete a property, returning whether it existed
    async fn delete(&self, id: &PropertyId) -> Result<bool, DomainError>;
}
