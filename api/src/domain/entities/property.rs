//! Property domain entity
//!
//! A real-estate listing with a location and a boundary polygon.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub Uuid);

impl PropertyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PropertyId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PropertyId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PropertyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Kind of property being listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Shop,
    Land,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::House => write!(f, "house"),
            PropertyType::Shop => write!(f, "shop"),
            PropertyType::Land => write!(f, "land"),
        }
    }
}

impl std::str::FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(PropertyType::House),
            "shop" => Ok(PropertyType::Shop),
            "land" => Ok(PropertyType::Land),
            _ => Err(format!("Unknown property type: {}", s)),
        }
    }
}

/// One vertex of a boundary polygon
///
/// `lng` also deserializes from the legacy `lang` key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    #[serde(alias = "lang")]
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Postal location of a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub city: String,
    pub address: String,
}

/// A stored property
#[derive(Debug, Clone)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub kind: PropertyType,
    pub location: Location,
    /// Ordered polygon vertices; the last vertex connects back to the first
    pub boundary: Vec<Point>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create or replace a property
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub name: String,
    pub kind: PropertyType,
    pub location: Location,
    pub boundary: Vec<Point>,
}
