use serde::{Deserialize, Serialize};

/// 농도 단위. 내부 기준은 g/l(dosing 입력 단위)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcentrationUnit {
    GramPerLiter,
    MilligramPerLiter,
    KilogramPerCubicMeter,
    PoundPerUsGallon,
}

fn to_gram_per_liter(value: f64, unit: ConcentrationUnit) -> f64 {
    match unit {
        ConcentrationUnit::GramPerLiter | ConcentrationUnit::KilogramPerCubicMeter => value,
        ConcentrationUnit::MilligramPerLiter => value / 1000.0,
        // 453.59237 g / 3.785411784 L
        ConcentrationUnit::PoundPerUsGallon => value * 119.826_427_3,
    }
}

fn from_gram_per_liter(value: f64, unit: ConcentrationUnit) -> f64 {
    match unit {
        ConcentrationUnit::GramPerLiter | ConcentrationUnit::KilogramPerCubicMeter => value,
        ConcentrationUnit::MilligramPerLiter => value * 1000.0,
        ConcentrationUnit::PoundPerUsGallon => value / 119.826_427_3,
    }
}

/// 농도를 변환한다.
pub fn convert_concentration(value: f64, from: ConcentrationUnit, to: ConcentrationUnit) -> f64 {
    let base = to_gram_per_liter(value, from);
    from_gram_per_liter(base, to)
}
