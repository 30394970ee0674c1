//! Property handlers
//!
//! CRUD endpoints for property records plus the derived boundary area.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::PropertyDraft;
use crate::domain::entities::{Location, Point, Property, PropertyId};
use crate::domain::ports::PropertyRepository;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing properties
#[derive(Debug, Default, Deserialize)]
pub struct ListPropertiesQuery {
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: u64,
}

/// A property as returned by the API
#[derive(Debug, Serialize)]
pub struct PropertyResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: Location,
    pub boundary: Vec<Point>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Property> for PropertyResponse {
    fn from(p: Property) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            kind: p.kind.to_string(),
            location: p.location,
            boundary: p.boundary,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

/// Response for listing properties
///
/// `length` and `properties` are omitted when nothing is stored.
#[derive(Debug, Serialize)]
pub struct ListPropertiesResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyResponse>>,
}

/// Response wrapping a single property
#[derive(Debug, Serialize)]
pub struct PropertyEnvelope {
    pub message: String,
    pub property: PropertyResponse,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Areas are rounded to whole units, so they go on the wire as integers
#[derive(Debug, Serialize)]
pub struct AreaResponse {
    pub area: u64,
}

impl ListPropertiesQuery {
    /// The store addresses rows with signed 64-bit values
    fn page(&self) -> Result<(Option<u64>, u64), AppError> {
        let bounded = |name: &str, value: u64| {
            if value > i64::MAX as u64 {
                Err(AppError::BadRequest(format!("'{}' is out of range", name)))
            } else {
                Ok(value)
            }
        };

        let limit = self.limit.map(|l| bounded("limit", l)).transpose()?;
        Ok((limit, bounded("offset", self.offset)?))
    }
}

/// Identifiers that do not parse are reported the same way as unknown ones
fn parse_id(raw: &str) -> Result<PropertyId, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound("No property found with that id!".to_string()))
}

/// GET /property
///
/// List stored properties.
pub async fn list_properties<PR>(
    State(state): State<AppState<PR>>,
    query: Result<Query<ListPropertiesQuery>, QueryRejection>,
) -> Result<Json<ListPropertiesResponse>, AppError>
where
    PR: PropertyRepository + 'static,
{
    let Query(query) = query?;
    let (limit, offset) = query.page()?;
    let properties = state.property_service.list(limit, offset).await?;

    if properties.is_empty() {
        return Ok(Json(ListPropertiesResponse {
            message: "No property in the database".to_string(),
            length: None,
            properties: None,
        }));
    }

    let properties: Vec<PropertyResponse> = properties.into_iter().map(Into::into).collect();

    Ok(Json(ListPropertiesResponse {
        message: "Properties gets successfully!".to_string(),
        length: Some(properties.len()),
        properties: Some(properties),
    }))
}

/// GET /property/:id
///
/// Get a single property.
pub async fn get_property<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<Json<PropertyEnvelope>, AppError>
where
    PR: PropertyRepository + 'static,
{
    let property = state.property_service.get(&parse_id(&id)?).await?;

    Ok(Json(PropertyEnvelope {
        message: "Property gets successfully!".to_string(),
        property: property.into(),
    }))
}

/// POST /property
///
/// Create a property. The name must be unique.
pub async fn create_property<PR>(
    State(state): State<AppState<PR>>,
    payload: Result<Json<PropertyDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<PropertyEnvelope>), AppError>
where
    PR: PropertyRepository + 'static,
{
    let Json(draft) = payload?;
    let property = state.property_service.create(&draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(PropertyEnvelope {
            message: "Property added successfully".to_string(),
            property: property.into(),
        }),
    ))
}

/// PUT /property/:id
///
/// Replace every field of a property.
pub async fn update_property<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
    payload: Result<Json<PropertyDraft>, JsonRejection>,
) -> Result<Json<PropertyEnvelope>, AppError>
where
    PR: PropertyRepository + 'static,
{
    let Json(draft) = payload?;
    let property = state
        .property_service
        .update(&parse_id(&id)?, &draft)
        .await?;

    Ok(Json(PropertyEnvelope {
        message: "Property edited successfully!".to_string(),
        property: property.into(),
    }))
}

/// DELETE /property/:id
pub async fn delete_property<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError>
where
    PR: PropertyRepository + 'static,
{
    state.property_service.delete(&parse_id(&id)?).await?;

    Ok(Json(MessageResponse {
        message: "Property deleted successfully".to_string(),
    }))
}

/// GET /property/:id/area
///
/// Planar area enclosed by the property's boundary, rounded to a whole unit.
pub async fn get_property_area<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<Json<AreaResponse>, AppError>
where
    PR: PropertyRepository + 'static,
{
    let area = state.property_service.area(&parse_id(&id)?).await?;
    Ok(Json(AreaResponse { area }))
}
