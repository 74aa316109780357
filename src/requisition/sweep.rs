//! 공유 합계나 행이 바뀔 때마다 모든 행의 파생값을 다시 맞추는 sweep.
//!
//! 각 행은 자신의 필드와 공유 합계에만 의존하므로 행 순서와 무관하고,
//! 같은 입력으로 두 번 돌려도 두 번째에는 바뀌는 행이 없다.

use super::deriver::{compute_costing, decompose_to_subunits, derive_quantity_kg, SubunitQty};
use super::line_item::{ChemicalLineItem, RowState};
use super::totals::SharedTotals;

/// sweep 결과. `replaced`는 값이 실제로 바뀐 행의 인덱스(오름차순)이다.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    pub rows: Vec<ChemicalLineItem>,
    pub replaced: Vec<usize>,
}

impl SweepOutcome {
    pub fn changed(&self) -> bool {
        !self.replaced.is_empty()
    }
}

/// 행 목록을 받아 파생값이 맞춰진 새 목록을 돌려준다. 입력은 건드리지 않는다.
pub fn recompute(rows: &[ChemicalLineItem], totals: SharedTotals) -> SweepOutcome {
    let mut replaced = Vec::new();
    let rows = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| match refreshed_row(row, totals) {
            Some(new_row) => {
                replaced.push(idx);
                new_row
            }
            None => row.clone(),
        })
        .collect();
    SweepOutcome { rows, replaced }
}

/// 제자리에서 sweep을 수행하고 바뀐 행 수를 돌려준다.
pub fn recompute_in_place(rows: &mut [ChemicalLineItem], totals: SharedTotals) -> usize {
    let mut count = 0;
    for row in rows.iter_mut() {
        if let Some(new_row) = refreshed_row(row, totals) {
            *row = new_row;
            count += 1;
        }
    }
    if count > 0 {
        log::debug!("sweep replaced {count} of {} rows", rows.len());
    }
    count
}

/// 행의 파생값을 다시 계산한다. 저장된 값과 같으면 None.
fn refreshed_row(row: &ChemicalLineItem, totals: SharedTotals) -> Option<ChemicalLineItem> {
    match row.state() {
        RowState::DyeingStep => {
            if row.is_at_step_reset() {
                return None;
            }
            let mut new_row = row.clone();
            new_row.clear_step_fields();
            Some(new_row)
        }
        RowState::Normal => {
            let (qty, costing) = derived_values(row, totals);
            if row.qty == qty && same_amount(row.costing, costing) {
                return None;
            }
            let mut new_row = row.clone();
            new_row.qty = qty;
            new_row.costing = costing;
            Some(new_row)
        }
    }
}

fn derived_values(row: &ChemicalLineItem, totals: SharedTotals) -> (SubunitQty, f64) {
    let quantity_kg = derive_quantity_kg(
        row.dosing,
        row.shade,
        totals.total_water_l,
        totals.fabric_weight_kg,
    );
    let qty = decompose_to_subunits(quantity_kg);
    let costing = compute_costing(&qty, row.unit_price);
    (qty, costing)
}

// NaN 단가가 들어와도 매번 "변경됨"으로 판정되지 않도록 NaN끼리는 같게 본다.
fn same_amount(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
