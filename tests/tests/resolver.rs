//! Range-grammar scenarios exercised through the public API.

use platemap_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn well_names_round_trip_through_parsing() {
    for name in ["A1", "B7", "H12", "G11", "AA1", "AB10", "BD12"] {
        let well: Well = name.parse().unwrap();
        assert_eq!(well.name(), name);
    }
    // Letter case normalizes to the canonical uppercase form.
    let well: Well = "h12".parse().unwrap();
    assert_eq!(well.name(), "H12");
}

#[test]
fn rectangles_are_corner_order_independent() {
    let shape = PlateShape::default();
    for (a, b) in [("A1:B2", "B2:A1"), ("C10:A1", "A1:C10"), ("G7:G10", "G10:G7")] {
        assert_eq!(
            resolve_wells(a, shape).unwrap(),
            resolve_wells(b, shape).unwrap(),
            "{} vs {}",
            a,
            b
        );
    }

    // |r2-r1|+1 rows times |c2-c1|+1 columns, no duplicates.
    let wells = resolve_wells("C10:A1", shape).unwrap();
    assert_eq!(wells.len(), 3 * 10);
    let mut deduped = wells.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), wells.len());
}

#[test]
fn region_list_keeps_declaration_order() {
    let regions = resolve("E1:F2,B1:C2", PlateShape::default()).unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].top_left().name(), "E1");
    assert_eq!(regions[1].top_left().name(), "B1");
}

#[test]
fn spans_expand_against_the_given_shape() {
    let p96 = PlateShape::default();
    let p384 = PlateShape::with_wells(384).unwrap();

    assert_eq!(resolve_wells("A:A", p96).unwrap().len(), 12);
    assert_eq!(resolve_wells("A:A", p384).unwrap().len(), 24);
    assert_eq!(resolve_wells("1:1", p96).unwrap().len(), 8);
    assert_eq!(resolve_wells("1:1", p384).unwrap().len(), 16);
}

#[test]
fn shape_inference_from_resolved_wells() {
    let p96 = PlateShape::default();
    let wells = resolve_wells("A1:H12", p96).unwrap();
    assert_eq!(PlateShape::infer(wells), Some(p96));

    let p384 = PlateShape::with_wells(384).unwrap();
    let wells = resolve_wells("H13", p384).unwrap();
    assert_eq!(PlateShape::infer(wells.clone()), Some(p384));
    assert_eq!(PlateShape::infer_preferring(wells, p96), Some(p384));
}

#[test]
fn sequential_well_walks() {
    let shape = PlateShape::default();
    let start: Well = "A1".parse().unwrap();
    let names: Vec<String> = start
        .walk(shape, Traversal::ByRow)
        .take(13)
        .map(|w| w.name())
        .collect();
    assert_eq!(names.last().map(String::as_str), Some("B1"));

    let names: Vec<String> = start
        .walk(shape, Traversal::ByColumn)
        .take(9)
        .map(|w| w.name())
        .collect();
    assert_eq!(names, ["A1", "B1", "C1", "D1", "E1", "F1", "G1", "H1", "A2"]);
}
