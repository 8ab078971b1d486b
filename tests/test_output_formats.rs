//! End-to-end output vectors for the vehicle serializers
//!
//! These tests pin the exact rendered documents for the demo vehicles in
//! both formats, and verify that the same vehicle drives an identical
//! field sequence regardless of the active format.

use fleet_encoder::{create_serializer, demo_fleet, Serializable, Vehicle};

fn render(vehicle: &Vehicle, format: &str) -> String {
    let mut serializer = create_serializer(format).unwrap();
    vehicle.serialize(serializer.as_mut());
    serializer.build()
}

#[test]
fn test_car_xml_document() {
    let fleet = demo_fleet();
    let expected = r#"<vehicle>
  <type>Car</type>
  <name>BMW G30</name>
  <manufacturer>BMW</manufacturer>
  <weight>1600.000000</weight>
  <power>252.000000</power>
  <year>2020</year>
  <car_specific>
    <doors>4</doors>
    <passenger_seats>5</passenger_seats>
    <fuel_type>petrol</fuel_type>
    <engine_volume>2.000000</engine_volume>
  </car_specific>
</vehicle>
"#;
    assert_eq!(render(&fleet[0], "xml"), expected);
}

#[test]
fn test_car_json_document() {
    let fleet = demo_fleet();
    let expected = r#"{
"vehicle": {
  "type": "Car",
  "name": "BMW G30",
  "manufacturer": "BMW",
  "weight": 1600.000000,
  "power": 252.000000,
  "year": 2020,
  "car_specific": {
    "doors": 4,
    "passenger_seats": 5,
    "fuel_type": "petrol",
    "engine_volume": 2.000000
  }
}
}"#;
    assert_eq!(render(&fleet[0], "json"), expected);
}

#[test]
fn test_airplane_xml_document() {
    let fleet = demo_fleet();
    let expected = r#"<vehicle>
  <type>Airplane</type>
  <name>Boeing 747-400</name>
  <manufacturer>Boeing</manufacturer>
  <weight>180000.000000</weight>
  <power>240000.000000</power>
  <year>1988</year>
  <airplane_specific>
    <wingspan>64</wingspan>
    <max_altitude>13700</max_altitude>
    <passenger_capacity>416</passenger_capacity>
    <max_speed>988.000000</max_speed>
  </airplane_specific>
</vehicle>
"#;
    assert_eq!(render(&fleet[1], "xml"), expected);
}

#[test]
fn test_ship_json_document() {
    let fleet = demo_fleet();
    let expected = r#"{
"vehicle": {
  "type": "Ship",
  "name": "MS Queen Victoria",
  "manufacturer": "Fincantieri",
  "weight": 90000000.000000,
  "power": 120000.000000,
  "year": 2007,
  "ship_specific": {
    "length": 294.000000,
    "displacement": 90000.000000,
    "crew_capacity": 1000,
    "propulsion_type": "diesel-electric"
  }
}
}"#;
    assert_eq!(render(&fleet[2], "json"), expected);
}

#[test]
fn test_json_documents_parse_back() {
    for vehicle in demo_fleet() {
        let document = render(&vehicle, "json");
        let value: serde_json::Value = serde_json::from_str(&document).unwrap();
        assert_eq!(value["vehicle"]["name"].as_str(), Some(vehicle.name.as_str()));
        assert_eq!(
            value["vehicle"]["type"].as_str(),
            Some(vehicle.kind.label())
        );
    }
}

#[test]
fn test_field_order_is_identical_across_formats() {
    let car = demo_fleet().into_iter().next().unwrap();
    let names = [
        "type",
        "name",
        "manufacturer",
        "weight",
        "power",
        "year",
        "car_specific",
        "doors",
        "passenger_seats",
        "fuel_type",
        "engine_volume",
    ];
    for format in ["xml", "json"] {
        let document = render(&car, format);
        let positions: Vec<usize> = names
            .iter()
            .map(|name| document.find(name).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "field order differs in {}", format);
    }
}
