//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;
use uuid::Uuid;

use crate::app::validation::{LocationDraft, PointDraft, PropertyDraft};
use crate::domain::entities::{Location, Point, Property, PropertyId, PropertyType};

/// 4x4 square boundary, area 16
pub fn test_boundary() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 4.0),
        Point::new(4.0, 4.0),
        Point::new(4.0, 0.0),
    ]
}

pub fn test_location() -> Location {
    Location {
        country: "Norway".to_string(),
        state: Some("Oslo".to_string()),
        city: "Oslo".to_string(),
        address: "Kaigata 2".to_string(),
    }
}

/// Create a stored property with default values
pub fn test_property() -> Property {
    let now = Utc::now();
    Property {
        id: PropertyId(Uuid::new_v4()),
        name: "Harbour View".to_string(),
        kind: PropertyType::House,
        location: test_location(),
        boundary: test_boundary(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a valid submission with default values
pub fn test_draft() -> PropertyDraft {
    test_draft_named("Harbour View")
}

/// Create a valid submission with a specific name
pub fn test_draft_named(name: &str) -> PropertyDraft {
    let location = test_location();
    PropertyDraft {
        name: Some(name.to_string()),
        kind: Some("house".into()),
        location: Some(LocationDraft {
            country: Some(location.country),
            state: location.state,
            city: Some(location.city),
            address: Some(location.address),
        }),
        boundary: Some(
            test_boundary()
                .into_iter()
                .map(|p| PointDraft {
                    lat: Some(p.lat.into()),
                    lng: Some(p.lng.into()),
                })
                .collect(),
        ),
    }
}

/// JSON body for a valid submission
pub fn test_draft_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "type": "house",
        "location": {
            "country": "Norway",
            "state": "Oslo",
            "city": "Oslo",
            "address": "Kaigata 2"
        },
        "boundary": [
            {"lat": 0.0, "lng": 0.0},
            {"lat": 0.0, "lng": 4.0},
            {"lat": 4.0, "lng": 4.0},
            {"lat": 4.0, "lng": 0.0}
        ]
    })
}
