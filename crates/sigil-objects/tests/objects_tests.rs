//! Integration tests for the rectangle and JSON helpers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sigil_objects::{ObjectError, Rectangle, from_json, to_json};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Circle {
    radius: u32,
}

#[test]
fn test_rectangle_fields_and_area() {
    let r = Rectangle::new(10, 20);
    assert_eq!(r.width, 10);
    assert_eq!(r.height, 20);
    assert_eq!(r.area(), 200);
    assert_eq!(Rectangle::new(0, 5).area(), 0);
}

#[test]
fn test_rectangle_area_saturates() {
    assert_eq!(Rectangle::new(u64::MAX, 2).area(), u64::MAX);
}

#[test]
fn test_to_json_sequences_and_structs() {
    assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
    assert_eq!(
        to_json(&Rectangle::new(10, 20)).unwrap(),
        r#"{"width":10,"height":20}"#
    );
    assert_eq!(to_json("text").unwrap(), r#""text""#);
}

#[test]
fn test_to_json_rejects_non_string_map_keys() {
    let mut map = BTreeMap::new();
    let _ = map.insert((1, 2), "pair");
    assert!(matches!(to_json(&map), Err(ObjectError::Serialize(_))));
}

#[test]
fn test_from_json_rebuilds_typed_values() {
    let circle: Circle = from_json(r#"{"radius":10}"#).unwrap();
    assert_eq!(circle, Circle { radius: 10 });

    let rect: Rectangle = from_json(r#"{"height":20,"width":10}"#).unwrap();
    assert_eq!(rect, Rectangle::new(10, 20));
    assert_eq!(rect.area(), 200);
}

#[test]
fn test_from_json_errors() {
    assert!(matches!(
        from_json::<Circle>("{radius:10}"),
        Err(ObjectError::Deserialize(_))
    ));
    assert!(matches!(
        from_json::<Rectangle>(r#"{"width":10}"#),
        Err(ObjectError::Deserialize(_))
    ));

    let message = from_json::<Circle>("not json").unwrap_err().to_string();
    assert!(message.starts_with("Failed to parse object from JSON"));
}
