//! 수량/금액 산출 회귀 테스트.
use dyehouse_requisition_toolbox::requisition::{
    compute_costing, decompose_to_subunits, derive_quantity_kg, SubunitQty,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn dosing_uses_total_water() {
    // 10 g/l × 50 L = 500 g
    let q = derive_quantity_kg(Some(10.0), None, Some(50.0), Some(999.0)).expect("known");
    assert_close(q, 0.5, 1e-12);
}

#[test]
fn shade_uses_fabric_weight() {
    // 2% × 100 kg
    let q = derive_quantity_kg(None, Some(2.0), Some(123.0), Some(100.0)).expect("known");
    assert_close(q, 2.0, 1e-12);
}

#[test]
fn dosing_wins_when_both_are_present() {
    let q = derive_quantity_kg(Some(2.5), Some(3.0), Some(40.0), Some(250.0)).expect("known");
    assert_close(q, 0.1, 1e-12);
}

#[test]
fn dosing_without_water_falls_back_to_shade() {
    let q = derive_quantity_kg(Some(2.5), Some(3.0), None, Some(250.0)).expect("known");
    assert_close(q, 7.5, 1e-12);
}

#[test]
fn missing_total_is_unknown_not_zero() {
    assert_eq!(derive_quantity_kg(Some(10.0), None, None, Some(100.0)), None);
    assert_eq!(derive_quantity_kg(None, Some(2.0), Some(100.0), None), None);
    assert_eq!(derive_quantity_kg(None, None, Some(100.0), Some(100.0)), None);
    assert_eq!(derive_quantity_kg(Some(0.0), None, Some(100.0), None), Some(0.0));
    assert_eq!(decompose_to_subunits(None), SubunitQty::UNKNOWN);
}

#[test]
fn subunits_floor_kg_and_gram_round_mg() {
    assert_eq!(decompose_to_subunits(Some(1.2345)), SubunitQty::new(1, 234, 500));
    assert_eq!(decompose_to_subunits(Some(0.75)), SubunitQty::new(0, 750, 0));
    assert_eq!(decompose_to_subunits(Some(7.5)), SubunitQty::new(7, 500, 0));
    assert_eq!(decompose_to_subunits(Some(0.0)), SubunitQty::new(0, 0, 0));
}

#[test]
fn costing_treats_missing_parts_as_zero() {
    assert_eq!(compute_costing(&SubunitQty::new(1, 0, 0), None), 0.0);
    assert_eq!(compute_costing(&SubunitQty::UNKNOWN, Some(12.0)), 0.0);
    let partial = SubunitQty {
        kg: Some(2),
        gm: None,
        mg: Some(500_000),
    };
    assert_close(compute_costing(&partial, Some(10.0)), 25.0, 1e-9);
}

#[test]
fn dye_row_with_dosing_end_to_end() {
    // Dye, 5 g/l, 단가 2, 물량 100 L
    let q = derive_quantity_kg(Some(5.0), None, Some(100.0), None);
    let qty = decompose_to_subunits(q);
    assert_eq!(qty, SubunitQty::new(0, 500, 0));
    assert_close(compute_costing(&qty, Some(2.0)), 1.0, 1e-12);
}
