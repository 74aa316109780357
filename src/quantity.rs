/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// 질량 (원단 중량, 약품 사용량)
    Mass,
    /// 체적 (염욕 물량)
    Volume,
    /// 농도 (dosing, g/l)
    Concentration,
}

impl QuantityKind {
    /// 변환기 메뉴에 노출되는 순서.
    pub const ALL: [QuantityKind; 3] = [
        QuantityKind::Mass,
        QuantityKind::Volume,
        QuantityKind::Concentration,
    ];
}

/// 내부 기준 단위로 환산된 값을 담는 컨테이너.
///
/// 기준 단위는 질량=kg, 체적=L, 농도=g/l 이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityValue {
    pub kind: QuantityKind,
    pub value_base: f64,
}
