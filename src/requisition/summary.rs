use super::line_item::{ChemicalLineItem, RowState};

/// 요청서 하단 합계.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RequisitionSummary {
    pub chemical_rows: usize,
    pub step_rows: usize,
    /// 약품 행 수량 합계[kg]. 미정 자리는 0으로 본다.
    pub total_quantity_kg: f64,
    pub total_costing: f64,
}

pub fn summarize(items: &[ChemicalLineItem]) -> RequisitionSummary {
    items
        .iter()
        .fold(RequisitionSummary::default(), |mut acc, item| {
            match item.state() {
                RowState::DyeingStep => acc.step_rows += 1,
                RowState::Normal => {
                    acc.chemical_rows += 1;
                    acc.total_quantity_kg += item.qty.total_kg();
                    acc.total_costing += item.costing;
                }
            }
            acc
        })
}
