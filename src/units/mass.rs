use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Milligram,
    Pound,
    Ounce,
}

impl MassUnit {
    pub const ALL: [MassUnit; 5] = [
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Milligram,
        MassUnit::Pound,
        MassUnit::Ounce,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Milligram => "mg",
            MassUnit::Pound => "lb",
            MassUnit::Ounce => "oz",
        }
    }
}

pub(crate) fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 1000.0,
        MassUnit::Milligram => value / 1_000_000.0,
        MassUnit::Pound => value * 0.453_592_37,
        MassUnit::Ounce => value * 0.028_349_523_125,
    }
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value * 1000.0,
        MassUnit::Milligram => value * 1_000_000.0,
        MassUnit::Pound => value / 0.453_592_37,
        MassUnit::Ounce => value / 0.028_349_523_125,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let base = to_kg(value, from);
    from_kg(base, to)
}
