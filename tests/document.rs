//! 요청서 문서 편집/저장 테스트.
use dyehouse_requisition_toolbox::requisition::{
    document::{revision_path, DocumentError, RequisitionDocument},
    summary::summarize,
    ChemicalLineItem, ItemType, SubunitQty,
};
use std::path::{Path, PathBuf};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn sample() -> RequisitionDocument {
    let mut doc = RequisitionDocument::new();
    doc.header.requisition_no = "REQ-0042".into();
    doc.header.party = "Acme Knit".into();
    doc.set_total_water(Some(100.0));
    doc.set_fabric_weight(Some(100.0));
    let i = doc.add_item();
    doc.edit_item(i, |row| {
        row.set_item_type(ItemType::Dye);
        row.item_name = "Navy".into();
        row.set_dosing(Some(5.0));
        row.unit_price = Some(2.0);
    });
    doc.push_item(ChemicalLineItem::dyeing_step("Hold 20 min"));
    let i = doc.add_item();
    doc.edit_item(i, |row| {
        row.set_item_type(ItemType::Chemical);
        row.item_name = "Soda ash".into();
        row.set_shade(Some(2.0));
        row.unit_price = Some(0.5);
    });
    doc
}

#[test]
fn edits_recompute_derived_values() {
    let doc = sample();
    assert_eq!(doc.items[0].qty, SubunitQty::new(0, 500, 0));
    assert_close(doc.items[0].costing, 1.0, 1e-12);
    assert_eq!(doc.items[2].qty, SubunitQty::new(2, 0, 0));
    assert_close(doc.items[2].costing, 1.0, 1e-12);
}

#[test]
fn changing_totals_updates_all_rows() {
    let mut doc = sample();
    doc.set_total_water(Some(200.0));
    assert_eq!(doc.items[0].qty, SubunitQty::new(1, 0, 0));
    doc.set_fabric_weight(None);
    assert_eq!(doc.items[2].qty, SubunitQty::UNKNOWN);
    assert_eq!(doc.items[2].costing, 0.0);
    assert_eq!(doc.refresh(), 0);
}

#[test]
fn remove_and_move_keep_rows_consistent() {
    let mut doc = sample();
    assert!(doc.move_item(2, 0));
    assert_eq!(doc.items[0].item_name, "Soda ash");
    assert!(!doc.move_item(0, 9));
    let removed = doc.remove_item(1).expect("row");
    assert_eq!(removed.item_name, "Navy");
    assert!(doc.remove_item(5).is_none());
    assert!(!doc.edit_item(7, |row| row.highlight = true));
    assert_eq!(doc.items.len(), 2);
}

#[test]
fn summary_counts_and_totals() {
    let s = summarize(&sample().items);
    assert_eq!(s.chemical_rows, 2);
    assert_eq!(s.step_rows, 1);
    assert_close(s.total_quantity_kg, 2.5, 1e-12);
    assert_close(s.total_costing, 2.0, 1e-12);
}

#[test]
fn save_and_load_roundtrip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("batch12.toml");
    let doc = sample();
    doc.save_to(&path).expect("save");
    let loaded = RequisitionDocument::load_from(&path).expect("load");
    assert_eq!(loaded, doc);
}

#[test]
fn load_normalises_hand_edited_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("manual.toml");
    let src = r#"
[totals]
total_water_l = 100.0

[[items]]
item_type = "Dye"
item_name = "Yellow"
dosing = 5.0
unit_price = 2.0
costing = 77.0

[[items]]
item_type = "Dyeing step"
item_name = "Drain"
lot_no = "X"
remarks = "stale"
"#;
    std::fs::write(&path, src).expect("write");
    let doc = RequisitionDocument::load_from(&path).expect("load");
    assert_eq!(doc.items[0].qty, SubunitQty::new(0, 500, 0));
    assert_close(doc.items[0].costing, 1.0, 1e-12);
    assert!(doc.items[1].is_at_step_reset());
    assert_eq!(doc.items[1].item_name, "Drain");
}

#[test]
fn new_revision_is_written_beside_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("batch12.toml");
    let mut doc = sample();
    doc.save_to(&path).expect("save");
    let r1 = doc.save_new_revision(&path).expect("rev 1");
    assert_eq!(r1, dir.path().join("batch12_r1.toml"));
    let r2 = doc.save_new_revision(&r1).expect("rev 2");
    assert_eq!(r2, dir.path().join("batch12_r2.toml"));
    let loaded = RequisitionDocument::load_from(&r2).expect("load");
    assert_eq!(loaded.header.revision, 2);
    assert!(path.exists());
}

#[test]
fn revision_path_replaces_existing_suffix() {
    assert_eq!(
        revision_path(Path::new("a/b/dye_run_r3.toml"), 4),
        PathBuf::from("a/b/dye_run_r4.toml")
    );
    assert_eq!(
        revision_path(Path::new("dye_run.toml"), 1),
        PathBuf::from("dye_run_r1.toml")
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let err = RequisitionDocument::load_from(Path::new("/nonexistent/dir/req.toml")).unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}

#[test]
fn revision_counter_at_maximum_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("batch12.toml");
    let mut doc = sample();
    doc.header.revision = u32::MAX;
    let err = doc.save_new_revision(&path).unwrap_err();
    assert!(matches!(err, DocumentError::RevisionOverflow(u32::MAX)));
    assert_eq!(doc.header.revision, u32::MAX);
    assert!(std::fs::read_dir(dir.path()).expect("dir").next().is_none());
}

#[test]
fn remove_and_move_leave_rows_recomputed() {
    let mut doc = sample();
    doc.items[2].costing = 42.0;
    assert!(doc.move_item(0, 1));
    assert_close(doc.items[2].costing, 1.0, 1e-12);
    // 0번은 이제 공정 지시 행
    doc.items[0].qty = SubunitQty::new(9, 9, 9);
    assert_eq!(doc.remove_item(1).map(|row| row.item_name), Some("Navy".to_string()));
    assert!(doc.items[0].is_at_step_reset());
    assert_eq!(doc.items[1].item_name, "Soda ash");
    assert_eq!(doc.refresh(), 0);
}
