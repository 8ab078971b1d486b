//! Vehicle fleet model
//!
//! Vehicles are tagged records: common fields shared by every kind plus a
//! kind-specific attribute set. Each vehicle knows how to describe itself
//! to any [`Serializer`] in a fixed block/field sequence, so the same
//! vehicle renders correctly in every output format.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::serialization::{Serializable, Serializer};

/// Kind-specific vehicle attributes
///
/// The `kind` tag keys the variant in fleet files, e.g.
/// `{"kind": "car", "doors": 4, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VehicleKind {
    Car {
        doors: i64,
        passenger_seats: i64,
        fuel_type: String,
        engine_volume: f64,
    },
    Airplane {
        wingspan: i64,
        max_altitude: i64,
        passenger_capacity: i64,
        max_speed: f64,
    },
    Ship {
        length: f64,
        displacement: f64,
        crew_capacity: i64,
        propulsion_type: String,
    },
}

impl VehicleKind {
    /// Kind label emitted as the `type` field
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "Car",
            VehicleKind::Airplane { .. } => "Airplane",
            VehicleKind::Ship { .. } => "Ship",
        }
    }

    /// Name of the kind-specific sub-block
    pub fn block_name(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "car_specific",
            VehicleKind::Airplane { .. } => "airplane_specific",
            VehicleKind::Ship { .. } => "ship_specific",
        }
    }
}

/// A vehicle record: common fields plus kind-specific attributes
///
/// Immutable for the duration of serialization; the serializer only ever
/// receives rendered copies of field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub manufacturer: String,
    pub weight: f64,
    pub power: f64,
    pub year: i64,
    #[serde(flatten)]
    pub kind: VehicleKind,
}

impl Serializable for Vehicle {
    fn serialize(&self, serializer: &mut dyn Serializer) {
        serializer.add_block("vehicle");
        serializer.add_field("type", self.kind.label().into());
        serializer.add_field("name", self.name.as_str().into());
        serializer.add_field("manufacturer", self.manufacturer.as_str().into());
        serializer.add_field("weight", self.weight.into());
        serializer.add_field("power", self.power.into());
        serializer.add_field("year", self.year.into());

        serializer.add_block(self.kind.block_name());
        match &self.kind {
            VehicleKind::Car {
                doors,
                passenger_seats,
                fuel_type,
                engine_volume,
            } => {
                serializer.add_field("doors", (*doors).into());
                serializer.add_field("passenger_seats", (*passenger_seats).into());
                serializer.add_field("fuel_type", fuel_type.as_str().into());
                serializer.add_field("engine_volume", (*engine_volume).into());
            }
            VehicleKind::Airplane {
                wingspan,
                max_altitude,
                passenger_capacity,
                max_speed,
            } => {
                serializer.add_field("wingspan", (*wingspan).into());
                serializer.add_field("max_altitude", (*max_altitude).into());
                serializer.add_field("passenger_capacity", (*passenger_capacity).into());
                serializer.add_field("max_speed", (*max_speed).into());
            }
            VehicleKind::Ship {
                length,
                displacement,
                crew_capacity,
                propulsion_type,
            } => {
                serializer.add_field("length", (*length).into());
                serializer.add_field("displacement", (*displacement).into());
                serializer.add_field("crew_capacity", (*crew_capacity).into());
                serializer.add_field("propulsion_type", propulsion_type.as_str().into());
            }
        }
        serializer.end_block();

        serializer.end_block();
    }
}

/// Load a fleet from a JSON file containing an array of vehicle records
pub fn load_fleet(path: &Path) -> Result<Vec<Vehicle>> {
    let content = fs::read_to_string(path)?;
    let fleet = serde_json::from_str(&content)?;
    Ok(fleet)
}

/// The built-in showcase fleet: one vehicle of each kind
pub fn demo_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle {
            name: "BMW G30".to_string(),
            manufacturer: "BMW".to_string(),
            weight: 1600.0,
            power: 252.0,
            year: 2020,
            kind: VehicleKind::Car {
                doors: 4,
                passenger_seats: 5,
                fuel_type: "petrol".to_string(),
                engine_volume: 2.0,
            },
        },
        Vehicle {
            name: "Boeing 747-400".to_string(),
            manufacturer: "Boeing".to_string(),
            weight: 180000.0,
            power: 240000.0,
            year: 1988,
            kind: VehicleKind::Airplane {
                wingspan: 64,
                max_altitude: 13700,
                passenger_capacity: 416,
                max_speed: 988.0,
            },
        },
        Vehicle {
            name: "MS Queen Victoria".to_string(),
            manufacturer: "Fincantieri".to_string(),
            weight: 90000000.0,
            power: 120000.0,
            year: 2007,
            kind: VehicleKind::Ship {
                length: 294.0,
                displacement: 90000.0,
                crew_capacity: 1000,
                propulsion_type: "diesel-electric".to_string(),
            },
        },
    ]
}
