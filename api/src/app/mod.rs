//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and validation.

pub mod property_service;
pub mod validation;

pub use property_service::PropertyService;
pub use validation::PropertyDraft;
