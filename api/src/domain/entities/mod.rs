//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod property;

pub use property::{Location, NewProperty, Point, Property, PropertyId, PropertyType};
