//! Property service
//!
//! Use cases for property records and their boundary areas.

use std::sync::Arc;

use crate::app::validation::PropertyDraft;
use crate::config::GEOMETRIC_MIN_POINTS;
use crate::domain::area::compute_area;
use crate::domain::entities::{Property, PropertyId};
use crate::domain::ports::PropertyRepository;
use crate::error::{AppError, DomainError};

/// Service for managing properties
pub struct PropertyService<PR>
where
    PR: PropertyRepository,
{
    properties: Arc<PR>,
    min_boundary_points: usize,
}

impl<PR> PropertyService<PR>
where
    PR: PropertyRepository,
{
    pub fn new(properties: Arc<PR>, min_boundary_points: usize) -> Self {
        Self {
            properties,
            min_boundary_points,
        }
    }

    /// Validate and store a new property
    pub async fn create(&self, draft: &PropertyDraft) -> Result<Property, AppError> {
        let new_property = draft.validate(self.min_boundary_points)?;

        if self
            .properties
            .find_by_name(&new_property.name)
            .await?
            .is_some()
        {
            return Err(name_taken());
        }

        let property = self.properties.create(&new_property).await?;
        tracing::info!(property_id = %property.id, name = %property.name, "Property created");

        Ok(property)
    }

    /// List stored properties
    pub async fn list(&self, limit: Option<u64>, offset: u64) -> Result<Vec<Property>, AppError> {
        Ok(self.properties.find_all(limit, offset).await?)
    }

    /// Get a property by ID
    pub async fn get(&self, id: &PropertyId) -> Result<Property, AppError> {
        self.properties
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Validate and replace an existing property
    pub async fn update(
        &self,
        id: &PropertyId,
        draft: &PropertyDraft,
    ) -> Result<Property, AppError> {
        let new_property = draft.validate(self.min_boundary_points)?;

        // Keeping its own name is fine; taking another property's is not
        if let Some(existing) = self.properties.find_by_name(&new_property.name).await? {
            if existing.id != *id {
                return Err(name_taken());
            }
        }

        let property = self
            .properties
            .update(id, &new_property)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!(property_id = %property.id, "Property updated");

        Ok(property)
    }

    /// Delete a property
    pub async fn delete(&self, id: &PropertyId) -> Result<(), AppError> {
        if !self.properties.delete(id).await? {
            return Err(not_found());
        }
        tracing::info!(property_id = %id, "Property deleted");
        Ok(())
    }

    /// Compute the boundary area of a stored property.
    ///
    /// The area is derived on every call and never written back. A stored
    /// boundary that cannot enclose an area is reported as an error rather
    /// than as a zero area.
    pub async fn area(&self, id: &PropertyId) -> Result<u64, AppError> {
        let property = self.get(id).await?;

        if property.boundary.len() < GEOMETRIC_MIN_POINTS {
            return Err(DomainError::InvalidGeometry(format!(
                "Boundary has {} points, at least {} are needed",
                property.boundary.len(),
                GEOMETRIC_MIN_POINTS
            ))
            .into());
        }

        let area = compute_area(&property.boundary);
        if !area.is_finite() || area >= u64::MAX as f64 {
            return Err(DomainError::InvalidGeometry(
                "Boundary coordinates do not produce a finite area".to_string(),
            )
            .into());
        }

        // Non-negative and already rounded, so the cast is exact
        let area = area as u64;
        tracing::debug!(property_id = %id, points = property.boundary.len(), area, "Computed area");
        Ok(area)
    }
}

fn not_found() -> AppError {
    AppError::Domain(DomainError::NotFound("Property not found".to_string()))
}

fn name_taken() -> AppError {
    AppError::Domain(DomainError::name_taken())
}
