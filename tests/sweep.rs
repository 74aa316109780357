//! 행 상태 전환과 sweep 동작 테스트.
use dyehouse_requisition_toolbox::requisition::{
    recompute, recompute_in_place, ChemicalLineItem, ItemType, SharedTotals, SubunitQty,
};

fn dye(dosing: Option<f64>, shade: Option<f64>, price: Option<f64>) -> ChemicalLineItem {
    let mut row = ChemicalLineItem::new();
    row.set_item_type(ItemType::Dye);
    row.item_name = "Reactive Red".into();
    row.dosing = dosing;
    row.shade = shade;
    row.unit_price = price;
    row
}

fn dirty_step() -> ChemicalLineItem {
    let mut row = ChemicalLineItem::dyeing_step("Run 60 °C × 30 min");
    row.lot_no = "L-7".into();
    row.dosing = Some(3.0);
    row.shade = Some(1.0);
    row.qty = SubunitQty::new(1, 2, 3);
    row.unit_price = Some(4.0);
    row.costing = 9.9;
    row.remarks = "leftover".into();
    row
}

#[test]
fn setting_dosing_clears_shade_and_back() {
    let mut row = dye(None, Some(2.0), None);
    row.set_dosing(Some(1.5));
    assert_eq!(row.shade, None);
    assert_eq!(row.dosing, Some(1.5));
    row.set_shade(Some(0.8));
    assert_eq!(row.dosing, None);
    assert_eq!(row.shade, Some(0.8));
    // 비우는 입력은 상대 필드를 건드리지 않는다
    row.set_dosing(None);
    assert_eq!(row.shade, Some(0.8));
}

#[test]
fn dyeing_step_fields_are_reset_by_sweep() {
    let out = recompute(&[dirty_step()], SharedTotals::new(Some(800.0), Some(100.0)));
    let row = &out.rows[0];
    assert_eq!(out.replaced, vec![0]);
    assert_eq!(row.item_name, "Run 60 °C × 30 min");
    assert!(row.lot_no.is_empty() && row.remarks.is_empty());
    assert_eq!((row.dosing, row.shade, row.unit_price), (None, None, None));
    assert_eq!(row.qty, SubunitQty::UNKNOWN);
    assert_eq!(row.costing, 0.0);
    assert!(!row.highlight);
}

#[test]
fn sweep_fills_quantity_and_costing() {
    let rows = vec![dye(Some(5.0), None, Some(2.0)), dye(None, Some(2.0), Some(3.5))];
    let out = recompute(&rows, SharedTotals::new(Some(100.0), Some(100.0)));
    assert_eq!(out.rows[0].qty, SubunitQty::new(0, 500, 0));
    assert_eq!(out.rows[0].costing, 1.0);
    assert_eq!(out.rows[1].qty, SubunitQty::new(2, 0, 0));
    assert_eq!(out.rows[1].costing, 7.0);
    // 입력은 그대로
    assert_eq!(rows[0].qty, SubunitQty::UNKNOWN);
}

#[test]
fn missing_total_leaves_quantity_unknown() {
    let out = recompute(&[dye(Some(5.0), None, Some(2.0))], SharedTotals::new(None, Some(100.0)));
    assert_eq!(out.rows[0].qty, SubunitQty::UNKNOWN);
    assert_eq!(out.rows[0].costing, 0.0);
    assert!(!out.changed());
}

#[test]
fn second_sweep_replaces_nothing() {
    let totals = SharedTotals::new(Some(750.0), Some(92.5));
    let mut rows = vec![
        dye(Some(1.2345), None, Some(4.1)),
        dirty_step(),
        dye(None, Some(0.37), None),
        dye(None, None, Some(8.0)),
    ];
    let first = recompute_in_place(&mut rows, totals);
    assert!(first > 0);
    let snapshot = rows.clone();
    assert_eq!(recompute_in_place(&mut rows, totals), 0);
    assert_eq!(rows, snapshot);
    assert!(!recompute(&rows, totals).changed());
}

#[test]
fn sweep_result_does_not_depend_on_row_order() {
    let totals = SharedTotals::new(Some(600.0), Some(80.0));
    let rows = vec![
        dye(Some(0.8), None, Some(3.0)),
        dirty_step(),
        dye(None, Some(1.75), Some(6.2)),
    ];
    let forward = recompute(&rows, totals).rows;
    let mut reversed_in = rows.clone();
    reversed_in.reverse();
    let mut backward = recompute(&reversed_in, totals).rows;
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn changing_type_across_states_clears_row() {
    let mut row = dye(Some(2.0), None, Some(5.0));
    row.lot_no = "B12".into();
    row.set_item_type(ItemType::DyeingStep);
    assert!(row.is_at_step_reset());
    assert!(row.item_name.is_empty());
    assert_eq!(row.item_type, ItemType::DyeingStep);

    let mut row = dye(Some(2.0), None, Some(5.0));
    row.set_item_type(ItemType::Auxiliary);
    assert_eq!(row.item_name, "Reactive Red");
    assert_eq!(row.dosing, Some(2.0));
}
