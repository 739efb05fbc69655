//! End-to-end platemap compilation scenarios.
//!
//! These run the public pipeline - range resolution, value broadcasting,
//! full-plate table assembly - over the programs a wet-lab user would
//! actually write.

use platemap_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn resolves_simple_range() {
    let wells = resolve_wells("A1:A2", PlateShape::default()).unwrap();
    let names: Vec<String> = wells.iter().map(|w| w.name()).collect();
    assert_eq!(names, vec!["A1", "A2"]);
}

#[test]
fn scalar_condition_covers_range_and_leaves_rest_absent() {
    let table = Platemap::default()
        .condition("strain", "A1:A2", "B. theta")
        .compile()
        .unwrap();

    assert_eq!(cell_str(&table, "A1", "strain"), Some("B. theta"));
    assert_eq!(cell_str(&table, "A2", "strain"), Some("B. theta"));
    assert_eq!(table.len(), 96);
    assert_eq!(filled_wells(&table), vec!["A1", "A2"]);
}

#[test]
fn spooled_values_assign_positionally() {
    let table = Platemap::default()
        .condition("strain", "A1:A2", ValueSpec::nested([["B. theta", "C. diff"]]))
        .compile()
        .unwrap();
    assert_eq!(cell_str(&table, "A1", "strain"), Some("B. theta"));
    assert_eq!(cell_str(&table, "A2", "strain"), Some("C. diff"));
}

#[test]
fn nested_grid_spools_each_sub_region_independently() {
    let table = Platemap::default()
        .condition("conc", "B1:C2,E1:F2", ValueSpec::nested([[0, 1], [2, 3]]))
        .compile()
        .unwrap();

    let expected = [
        ("B1", 0),
        ("B2", 1),
        ("C1", 2),
        ("C2", 3),
        ("E1", 0),
        ("E2", 1),
        ("F1", 2),
        ("F2", 3),
    ];
    for (well, value) in expected {
        assert_eq!(cell_int(&table, well, "conc"), Some(value), "well {}", well);
    }
    assert_eq!(table.drop_missing().len(), 8);
}

#[test]
fn out_of_bounds_reference_fails() {
    // Row Z = 26 exceeds the 8-row plate.
    let err = resolve("Z1", PlateShape::default()).unwrap_err();
    assert!(err.to_string().contains("Z1"));
}

#[test]
fn flat_sequence_length_must_match_well_count() {
    let err = Platemap::default()
        .condition("conc", "A1:A2", ValueSpec::flat([0, 10, 100]))
        .compile()
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("conc"), "got: {}", message);
    assert!(message.contains("2 wells"), "got: {}", message);
    assert!(message.contains("3 values"), "got: {}", message);
}

#[test]
fn full_program_with_several_variables() {
    let table = Platemap::default()
        .condition("strain", "A1:A3,B5:B7", "PAO1")
        .condition("drug", "A1:A3,B5:B7", "ampicillin")
        .condition("concentration", "A1:A3,B5:B7", ValueSpec::nested([[0, 10, 100]]))
        .compile()
        .unwrap();

    assert_eq!(table.columns(), ["strain", "drug", "concentration"]);
    for well in ["A1", "A2", "A3", "B5", "B6", "B7"] {
        assert_eq!(cell_str(&table, well, "strain"), Some("PAO1"));
        assert_eq!(cell_str(&table, well, "drug"), Some("ampicillin"));
    }
    // Spooling restarts in each sub-region.
    assert_eq!(cell_int(&table, "A1", "concentration"), Some(0));
    assert_eq!(cell_int(&table, "B5", "concentration"), Some(0));
    assert_eq!(cell_int(&table, "A2", "concentration"), Some(10));
    assert_eq!(cell_int(&table, "B6", "concentration"), Some(10));
    assert_eq!(cell_int(&table, "A3", "concentration"), Some(100));
    assert_eq!(cell_int(&table, "B7", "concentration"), Some(100));

    assert_eq!(table.drop_missing().len(), 6);
}

#[test]
fn partial_coverage_still_yields_full_plate() {
    let table = Platemap::default()
        .condition("strain", "H12", "B. theta")
        .compile()
        .unwrap();
    assert_eq!(table.len(), 96);
    assert_eq!(table.rows().count(), 96);
    assert_eq!(filled_wells(&table), vec!["H12"]);
}

#[test]
fn row_and_column_spans_compile() {
    let table = Platemap::default()
        .condition("medium", "A:B", "LB")
        .condition("blank", "12:12", true)
        .compile()
        .unwrap();

    assert_eq!(cell_str(&table, "A1", "medium"), Some("LB"));
    assert_eq!(cell_str(&table, "B12", "medium"), Some("LB"));
    assert_eq!(cell(&table, "C1", "medium"), None);
    for row in ["A", "B", "C", "D", "E", "F", "G", "H"] {
        let well = format!("{}12", row);
        assert_eq!(cell(&table, &well, "blank"), Some(&Value::Bool(true)));
    }
}

#[test]
fn larger_plate_formats() {
    let p384 = PlateShape::with_wells(384).unwrap();
    let table = Platemap::new(p384)
        .condition("strain", "P24", "B. theta")
        .compile()
        .unwrap();
    assert_eq!(table.len(), 384);
    assert_eq!(cell_str(&table, "P24", "strain"), Some("B. theta"));

    // The same reference is out of bounds on the default plate.
    assert!(Platemap::default()
        .condition("strain", "P24", "B. theta")
        .compile()
        .is_err());
}

#[test]
fn fill_missing_supplies_defaults() {
    let table = Platemap::default()
        .condition("strain", "A1:A3", "PAO1")
        .condition("drug", "A1:A3", "ampicillin")
        .compile()
        .unwrap()
        .fill_missing("strain", "sterile")
        .fill_missing("drug", "none");

    assert_eq!(cell_str(&table, "A1", "drug"), Some("ampicillin"));
    assert_eq!(cell_str(&table, "H8", "strain"), Some("sterile"));
    assert_eq!(cell_str(&table, "H8", "drug"), Some("none"));
    assert_eq!(table.drop_missing().len(), 96);
}

#[test]
fn cherrypicked_wells() {
    let p6 = PlateShape::with_wells(6).unwrap();

    let table = cherrypick(&["A1", "A3"], p6).unwrap();
    assert_eq!(cell(&table, "A1", "Pick"), Some(&Value::Bool(true)));
    assert_eq!(cell(&table, "A3", "Pick"), Some(&Value::Bool(true)));
    assert_eq!(filled_wells(&table), vec!["A1", "A3"]);

    let table = cherrypick_with(
        &["A1", "A3"],
        &[("color", Value::from("red"))],
        &[("color", Value::from("green"))],
        p6,
    )
    .unwrap();
    assert_eq!(cell_str(&table, "A1", "color"), Some("red"));
    assert_eq!(cell_str(&table, "A3", "color"), Some("red"));
    for well in ["A2", "B1", "B2", "B3"] {
        assert_eq!(cell_str(&table, well, "color"), Some("green"), "well {}", well);
    }
}

#[test]
fn display_renders_index_and_columns() {
    let table = Platemap::new(PlateShape::with_wells(6).unwrap())
        .condition("strain", "A1:A2", ValueSpec::nested([["B. theta", "C. diff"]]))
        .compile()
        .unwrap();
    let text = table.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].contains("well"));
    assert!(lines[0].contains("strain"));
    assert!(lines[1].contains("A1"));
    assert!(lines[1].contains("B. theta"));
    assert!(lines[3].contains('-'));
}
