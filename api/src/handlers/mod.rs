//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod properties;

pub use properties::{
    create_property, delete_property, get_property, get_property_area, list_properties,
    update_property,
};
