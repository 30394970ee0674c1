//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewProperty, Property, PropertyId};
use crate::domain::ports::PropertyRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Property Repository
// ============================================================================

/// Keeps properties in insertion order, like a table scanned by creation time
#[derive(Default)]
pub struct InMemoryPropertyRepository {
    properties: Arc<RwLock<Vec<Property>>>,
    failing: bool,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a property for testing
    pub fn with_property(self, property: Property) -> Self {
        self.properties.write().unwrap().push(property);
        self
    }

    /// Make every call fail with a database error
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn name_taken(properties: &[Property], name: &str, except: Option<&PropertyId>) -> bool {
        properties
            .iter()
            .any(|p| p.name == name && Some(&p.id) != except)
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn create(&self, new_property: &NewProperty) -> Result<Property, DomainError> {
        self.check()?;
        let mut properties = self.properties.write().unwrap();

        if Self::name_taken(&properties, &new_property.name, None) {
            return Err(DomainError::name_taken());
        }

        let now = Utc::now();
        let property = Property {
            id: PropertyId::new(),
            name: new_property.name.clone(),
            kind: new_property.kind,
            location: new_property.location.clone(),
            boundary: new_property.boundary.clone(),
            created_at: now,
            updated_at: now,
        };
        properties.push(property.clone());

        Ok(property)
    }

    async fn find_all(
        &self,
        limit: Option<u64>,
        offset: u64,
    ) -> Result<Vec<Property>, DomainError> {
        self.check()?;
        let properties = self.properties.read().unwrap();
        let page = properties.iter().skip(offset as usize).cloned();

        Ok(match limit {
            Some(limit) => page.take(limit as usize).collect(),
            None => page.collect(),
        })
    }

    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<Property>, DomainError> {
        self.check()?;
        let properties = self.properties.read().unwrap();
        Ok(properties.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Property>, DomainError> {
        self.check()?;
        let properties = self.properties.read().unwrap();
        Ok(properties.iter().find(|p| p.name == name).cloned())
    }

    async fn update(
        &self,
        id: &PropertyId,
        new_property: &NewProperty,
    ) -> Result<Option<Property>, DomainError> {
        self.check()?;
        let mut properties = self.properties.write().unwrap();

        if Self::name_taken(&properties, &new_property.name, Some(id)) {
            return Err(DomainError::name_taken());
        }

        let Some(property) = properties.iter_mut().find(|p| p.id == *id) else {
            return Ok(None);
        };
        property.name = new_property.name.clone();
        property.kind = new_property.kind;
        property.location = new_property.location.clone();
        property.boundary = new_property.boundary.clone();
        property.updated_at = Utc::now();

        Ok(Some(property.clone()))
    }

    async fn delete(&self, id: &PropertyId) -> Result<bool, DomainError> {
        self.check()?;
        let mut properties = self.properties.write().unwrap();
        let before = properties.len();
        properties.retain(|p| p.id != *id);
        Ok(properties.len() != before)
    }
}
