use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 리터이다(염욕 물량은 리터로 입력받는 경우가 대부분).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    CubicMeter,
    UsGallon,
    ImperialGallon,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 5] = [
        VolumeUnit::Liter,
        VolumeUnit::Milliliter,
        VolumeUnit::CubicMeter,
        VolumeUnit::UsGallon,
        VolumeUnit::ImperialGallon,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Liter => "L",
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::CubicMeter => "m3",
            VolumeUnit::UsGallon => "gal(US)",
            VolumeUnit::ImperialGallon => "gal(UK)",
        }
    }
}

pub(crate) fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value / 1000.0,
        VolumeUnit::CubicMeter => value * 1000.0,
        VolumeUnit::UsGallon => value * 3.785_411_784,
        VolumeUnit::ImperialGallon => value * 4.546_09,
    }
}

fn from_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value * 1000.0,
        VolumeUnit::CubicMeter => value / 1000.0,
        VolumeUnit::UsGallon => value / 3.785_411_784,
        VolumeUnit::ImperialGallon => value / 4.546_09,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let liters = to_liter(value, from);
    from_liter(liters, to)
}
