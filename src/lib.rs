//! fleet_encoder - Format-polymorphic vehicle serialization
//!
//! This library renders vehicle records into structured text (XML or JSON)
//! through a format-agnostic builder protocol. It is designed to be
//! consumed by:
//! - The CLI binary (src/bin/fleetenc.rs)
//! - Integration tests
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): Pure logic, no CLI concerns
//! - **bin/fleetenc.rs**: Thin driver that calls the library
//!
//! Vehicle-side code only ever sees the `Serializer` contract; which
//! format is active is decided once, at the factory.

pub mod core;

pub use crate::core::{
    create_serializer, demo_fleet, load_fleet, EncoderError, FieldValue, JsonSerializer, Result,
    Serializable, Serializer, Vehicle, VehicleKind, XmlSerializer,
};

/// Library version, exposed for the CLI `--version` flag
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
