//! 단위 변환 및 합계 환산 테스트.
use dyehouse_requisition_toolbox::{
    conversion::{convert, to_base, ConversionError},
    quantity::QuantityKind,
    requisition::SharedTotals,
    units::{MassUnit, VolumeUnit},
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn pounds_to_kilograms() {
    let kg = convert(QuantityKind::Mass, 220.0, "lb", "kg").expect("mass");
    assert_close(kg, 99.790_321_4, 1e-6);
}

#[test]
fn cubic_meter_and_gallons_to_liters() {
    assert_close(convert(QuantityKind::Volume, 1.2, "m3", "L").unwrap(), 1200.0, 1e-9);
    assert_close(convert(QuantityKind::Volume, 1.0, "gal", "l").unwrap(), 3.785_411_784, 1e-12);
    assert_close(convert(QuantityKind::Volume, 1.0, "gal(uk)", "l").unwrap(), 4.546_09, 1e-12);
}

#[test]
fn concentration_ppm_and_lb_per_gallon() {
    assert_close(convert(QuantityKind::Concentration, 1.0, "g/l", "ppm").unwrap(), 1000.0, 1e-9);
    assert_close(
        convert(QuantityKind::Concentration, 1.0, "lb/gal", "g/l").unwrap(),
        119.826_427_3,
        1e-6,
    );
}

#[test]
fn base_units_are_kg_liter_gram_per_liter() {
    let v = to_base(QuantityKind::Mass, 500.0, "g").unwrap();
    assert_close(v.value_base, 0.5, 1e-12);
    let v = to_base(QuantityKind::Volume, 250.0, "mL").unwrap();
    assert_close(v.value_base, 0.25, 1e-12);
}

#[test]
fn unknown_unit_is_reported() {
    assert_eq!(
        convert(QuantityKind::Mass, 1.0, "stone", "kg"),
        Err(ConversionError::UnknownUnit("stone".into()))
    );
}

#[test]
fn totals_from_user_units_and_liquor_ratio() {
    let totals = SharedTotals::from_units(Some(0.8), VolumeUnit::CubicMeter, Some(100.0), MassUnit::Kilogram);
    assert_close(totals.total_water_l.unwrap(), 800.0, 1e-9);
    assert_close(totals.liquor_ratio().unwrap(), 8.0, 1e-9);
    assert_close(totals.water_for_liquor_ratio(6.0).unwrap(), 600.0, 1e-9);

    let none = SharedTotals::from_units(None, VolumeUnit::Liter, Some(0.0), MassUnit::Pound);
    assert_eq!(none.liquor_ratio(), None);
}
