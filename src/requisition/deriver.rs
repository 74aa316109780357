//! dosing/shade 입력으로부터 약품 사용량과 금액을 산출한다.
//!
//! 모든 함수는 실패하지 않는다. 입력이 부족하면 "미정"(None)을, 금액 계산에서는 0을 돌려준다.

use serde::{Deserialize, Serialize};

/// kg 수량을 화면 표시용 kg/g/mg 정수로 나눈 값. 각 자리는 미정일 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubunitQty {
    pub kg: Option<i64>,
    pub gm: Option<i64>,
    pub mg: Option<i64>,
}

impl SubunitQty {
    pub const UNKNOWN: SubunitQty = SubunitQty {
        kg: None,
        gm: None,
        mg: None,
    };

    pub fn new(kg: i64, gm: i64, mg: i64) -> Self {
        Self {
            kg: Some(kg),
            gm: Some(gm),
            mg: Some(mg),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.kg.is_none() && self.gm.is_none() && self.mg.is_none()
    }

    /// 비어 있는 자리는 0으로 보고 kg 단위로 합친다.
    pub fn total_kg(&self) -> f64 {
        self.kg.unwrap_or(0) as f64
            + self.gm.unwrap_or(0) as f64 / 1000.0
            + self.mg.unwrap_or(0) as f64 / 1_000_000.0
    }
}

/// 한 행의 약품 사용량[kg]을 구한다.
///
/// - dosing[g/l]과 총 물량[L]이 있으면 `dosing * water / 1000`
/// - 아니면 shade[%]와 원단 중량[kg]이 있으면 `shade / 100 * fabric`
/// - 둘 다 안 되면 None (0과 구별되는 미정 상태)
///
/// 두 입력이 함께 들어와도 dosing을 먼저 본다. 음수는 검증하지 않는다.
pub fn derive_quantity_kg(
    dosing: Option<f64>,
    shade: Option<f64>,
    total_water: Option<f64>,
    fabric_weight: Option<f64>,
) -> Option<f64> {
    if let (Some(dosing), Some(water)) = (dosing, total_water) {
        return Some(dosing * water / 1000.0);
    }
    if let (Some(shade), Some(fabric)) = (shade, fabric_weight) {
        return Some((shade / 100.0) * fabric);
    }
    None
}

/// kg 수량을 kg/g/mg 정수로 분해한다.
///
/// kg과 g은 내림, mg은 반올림한다. mg에서 g으로의 올림 처리는 하지 않으므로
/// 나머지가 0.999999..에 가까우면 mg이 1000이 될 수 있다.
/// 유한하지 않은 값(NaN, 무한대)은 미정으로 취급한다.
pub fn decompose_to_subunits(quantity_kg: Option<f64>) -> SubunitQty {
    let Some(q) = quantity_kg.filter(|q| q.is_finite()) else {
        return SubunitQty::UNKNOWN;
    };
    let kg = q.floor();
    let remainder_gm = (q - kg) * 1000.0;
    let gm = remainder_gm.floor();
    let mg = ((remainder_gm - gm) * 1000.0).round();
    SubunitQty::new(kg as i64, gm as i64, mg as i64)
}

/// 분해된 수량과 kg 단가로 금액을 계산한다. 빠진 값은 0으로 본다.
pub fn compute_costing(qty: &SubunitQty, unit_price: Option<f64>) -> f64 {
    qty.total_kg() * unit_price.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_near_one_gram_reaches_thousand_mg() {
        // 0.9999999 kg -> 999 g + 999.9 mg -> 반올림으로 1000 mg, 올림 없음
        let q = decompose_to_subunits(Some(0.9999999));
        assert_eq!(q, SubunitQty::new(0, 999, 1000));
    }

    #[test]
    fn non_finite_quantity_is_unknown() {
        assert!(decompose_to_subunits(Some(f64::NAN)).is_unknown());
        assert!(decompose_to_subunits(Some(f64::INFINITY)).is_unknown());
    }

    #[test]
    fn partial_triple_counts_missing_as_zero() {
        let qty = SubunitQty {
            kg: None,
            gm: Some(250),
            mg: None,
        };
        assert!((compute_costing(&qty, Some(8.0)) - 2.0).abs() < 1e-12);
    }
}
