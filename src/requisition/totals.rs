use serde::{Deserialize, Serialize};

use crate::units::{mass, volume, MassUnit, VolumeUnit};

/// 요청서 전체가 공유하는 염욕 물량과 원단 중량.
///
/// 내부 기준은 물량=L, 중량=kg이다. 어느 한쪽이 없으면 그 값에 의존하는 행의 수량은 미정이 된다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedTotals {
    pub total_water_l: Option<f64>,
    pub fabric_weight_kg: Option<f64>,
}

impl SharedTotals {
    pub fn new(total_water_l: Option<f64>, fabric_weight_kg: Option<f64>) -> Self {
        Self {
            total_water_l,
            fabric_weight_kg,
        }
    }

    /// 사용자 단위로 입력된 값을 L/kg으로 환산해 만든다.
    pub fn from_units(
        total_water: Option<f64>,
        water_unit: VolumeUnit,
        fabric_weight: Option<f64>,
        fabric_unit: MassUnit,
    ) -> Self {
        Self {
            total_water_l: total_water.map(|v| volume::to_liter(v, water_unit)),
            fabric_weight_kg: fabric_weight.map(|v| mass::to_kg(v, fabric_unit)),
        }
    }

    /// 욕비(M:L). 물량 / 원단 중량, 원단 중량이 0 이하이면 None.
    pub fn liquor_ratio(&self) -> Option<f64> {
        match (self.total_water_l, self.fabric_weight_kg) {
            (Some(water), Some(fabric)) if fabric > 0.0 => Some(water / fabric),
            _ => None,
        }
    }

    /// 주어진 욕비로 필요한 물량[L]을 구한다.
    pub fn water_for_liquor_ratio(&self, ratio: f64) -> Option<f64> {
        self.fabric_weight_kg.map(|fabric| fabric * ratio)
    }
}
