//! Property submission validation
//!
//! Incoming create/update bodies are deserialized leniently into
//! [`PropertyDraft`] so that missing or wrongly typed fields produce the
//! API's own error messages instead of a generic JSON rejection.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{Location, NewProperty, Point, PropertyType};
use crate::error::DomainError;

/// Raw property submission; every field optional until validated
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyDraft {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub location: Option<LocationDraft>,
    #[serde(alias = "area")]
    pub boundary: Option<Vec<PointDraft>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationDraft {
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
}

/// Coordinates are kept raw so a non-numeric value is a validation error
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointDraft {
    pub lat: Option<Value>,
    #[serde(alias = "lang")]
    pub lng: Option<Value>,
}

/// Non-blank, trimmed string or `None`
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A blank string counts as missing; any other JSON value is present
fn given(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

fn coordinate(value: &Option<Value>) -> Option<f64> {
    value.as_ref().and_then(Value::as_f64)
}

impl PropertyDraft {
    /// Check the draft and turn it into a storable property.
    ///
    /// Checks run in a fixed order and the first failure wins: required
    /// fields, location details, boundary length, point coordinates, type.
    pub fn validate(&self, min_boundary_points: usize) -> Result<NewProperty, DomainError> {
        let (Some(name), true, Some(location), Some(boundary)) = (
            present(&self.name),
            given(&self.kind),
            self.location.as_ref(),
            self.boundary.as_ref(),
        ) else {
            return Err(DomainError::Validation(
                "All required fields must be provided".to_string(),
            ));
        };

        let (Some(country), Some(city), Some(address)) = (
            present(&location.country),
            present(&location.city),
            present(&location.address),
        ) else {
            return Err(DomainError::Validation(
                "Location details are incomplete".to_string(),
            ));
        };

        if boundary.len() < min_boundary_points {
            return Err(DomainError::Validation(format!(
                "The boundary must have at least {} points",
                min_boundary_points
            )));
        }

        let boundary = boundary
            .iter()
            .map(|p| match (coordinate(&p.lat), coordinate(&p.lng)) {
                (Some(lat), Some(lng)) => Ok(Point::new(lat, lng)),
                _ => Err(DomainError::Validation(
                    "Every boundary point needs lat and lng".to_string(),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let kind: PropertyType = self
            .kind
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| s.trim().parse().ok())
            .ok_or_else(|| DomainError::Validation("Invalid value for 'type'".to_string()))?;

        Ok(NewProperty {
            name,
            kind,
            location: Location {
                country,
                state: present(&location.state),
                city,
                address,
            },
            boundary,
        })
    }
}
