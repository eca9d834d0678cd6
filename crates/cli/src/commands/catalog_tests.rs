// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use wms_core::Location;

fn catalog() -> Catalog {
    Catalog::new(
        vec![Item {
            id: 101,
            name: "Widget".to_string(),
        }],
        vec![Location {
            location: "A1".to_string(),
            items: vec![101, 55],
        }],
    )
}

#[test]
fn test_stocked_at_names_known_items() {
    let items = stocked_at(&catalog(), "A1").unwrap();
    let rendered: Vec<(i64, &str)> = items.iter().map(|i| (i.id, i.name.as_str())).collect();
    assert_eq!(rendered, vec![(101, "Widget"), (55, "?")]);
}

#[test]
fn test_stocked_at_unknown_location() {
    assert!(matches!(
        stocked_at(&catalog(), "Z9"),
        Err(Error::UnknownLocation(loc)) if loc == "Z9"
    ));
}
