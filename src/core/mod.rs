//! Core module for fleet_encoder
//!
//! This module provides the foundational types and traits for the vehicle
//! serialization engine.
//!
//! # Architecture
//!
//! - `models`: Scalar field values shared by all formats
//! - `error`: Error types using thiserror
//! - `serialization`: The Serializer contract, output formats, and factory
//! - `fleet`: Vehicle records, fleet loading, demo fleet

pub mod error;
pub mod fleet;
pub mod models;
pub mod serialization;

// Re-export commonly used types
pub use error::{EncoderError, Result};
pub use fleet::{demo_fleet, load_fleet, Vehicle, VehicleKind};
pub use models::FieldValue;
pub use serialization::{
    create_serializer, JsonSerializer, Serializable, Serializer, XmlSerializer,
};
