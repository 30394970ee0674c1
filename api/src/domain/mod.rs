//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `area`: Boundary polygon area calculation

pub mod area;
pub mod entities;
pub mod ports;
