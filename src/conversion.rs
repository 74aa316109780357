use crate::quantity::{QuantityKind, QuantityValue};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `kg`, `lb`, `L`, `m3`, `gal`, `g/l`, `ppm` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Concentration => {
            let from = parse_concentration_unit(from_unit_str)?;
            let to = parse_concentration_unit(to_unit_str)?;
            Ok(convert_concentration(value, from, to))
        }
    }
}

/// 입력값을 물리량별 기준 단위(kg, L, g/l)로 환산한다.
pub fn to_base(
    kind: QuantityKind,
    value: f64,
    unit_str: &str,
) -> Result<QuantityValue, ConversionError> {
    let base_unit = match kind {
        QuantityKind::Mass => "kg",
        QuantityKind::Volume => "l",
        QuantityKind::Concentration => "g/l",
    };
    let value_base = convert(kind, value, unit_str, base_unit)?;
    Ok(QuantityValue { kind, value_base })
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg" | "kilogram" => Ok(MassUnit::Kilogram),
        "g" | "gm" | "gram" => Ok(MassUnit::Gram),
        "mg" | "milligram" => Ok(MassUnit::Milligram),
        "lb" | "lbs" => Ok(MassUnit::Pound),
        "oz" | "ounce" => Ok(MassUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "l" | "liter" | "litre" | "ltr" => Ok(VolumeUnit::Liter),
        "ml" | "milliliter" => Ok(VolumeUnit::Milliliter),
        "m3" | "m^3" | "cbm" => Ok(VolumeUnit::CubicMeter),
        "gal" | "gal(us)" | "usgal" => Ok(VolumeUnit::UsGallon),
        "gal(uk)" | "impgal" => Ok(VolumeUnit::ImperialGallon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_concentration_unit(s: &str) -> Result<ConcentrationUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "g/l" | "gpl" => Ok(ConcentrationUnit::GramPerLiter),
        "mg/l" | "ppm" => Ok(ConcentrationUnit::MilligramPerLiter),
        "kg/m3" => Ok(ConcentrationUnit::KilogramPerCubicMeter),
        "lb/gal" => Ok(ConcentrationUnit::PoundPerUsGallon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
