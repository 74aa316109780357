use serde::{Deserialize, Serialize};

use super::deriver::SubunitQty;

/// 요청서 행의 품목 분류. `DyeingStep`은 약품이 아닌 공정 지시문 행이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemType {
    /// 아직 분류를 고르지 않은 새 행
    #[default]
    #[serde(rename = "")]
    Unassigned,
    #[serde(rename = "Dye")]
    Dye,
    #[serde(rename = "Chemical")]
    Chemical,
    #[serde(rename = "Auxiliary")]
    Auxiliary,
    #[serde(rename = "Dyeing step")]
    DyeingStep,
}

impl ItemType {
    pub const ALL: [ItemType; 5] = [
        ItemType::Unassigned,
        ItemType::Dye,
        ItemType::Chemical,
        ItemType::Auxiliary,
        ItemType::DyeingStep,
    ];

    /// 저장 파일과 화면에 쓰이는 표기.
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Unassigned => "",
            ItemType::Dye => "Dye",
            ItemType::Chemical => "Chemical",
            ItemType::Auxiliary => "Auxiliary",
            ItemType::DyeingStep => "Dyeing step",
        }
    }

    /// 표기 문자열을 분류로 되돌린다. 대소문자는 구분하지 않는다.
    pub fn parse(s: &str) -> Option<ItemType> {
        let s = s.trim();
        ItemType::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(s))
    }

    pub fn state(&self) -> RowState {
        if *self == ItemType::DyeingStep {
            RowState::DyeingStep
        } else {
            RowState::Normal
        }
    }
}

/// 행이 약품 행인지 공정 지시 행인지를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Normal,
    DyeingStep,
}

/// 요청서 표의 한 행.
///
/// `qty`와 `costing`은 파생값이므로 직접 수정하지 않고 sweep으로만 갱신한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemicalLineItem {
    pub item_type: ItemType,
    /// 약품명. 공정 지시 행에서는 지시문 자체.
    pub item_name: String,
    pub lot_no: String,
    /// g/l
    pub dosing: Option<f64>,
    /// 원단 중량 대비 %
    pub shade: Option<f64>,
    pub qty: SubunitQty,
    /// kg당 단가
    pub unit_price: Option<f64>,
    pub costing: f64,
    pub remarks: String,
    pub highlight: bool,
}

impl ChemicalLineItem {
    /// "항목 추가" 시 생성되는 빈 행.
    pub fn new() -> Self {
        Self::default()
    }

    /// 공정 지시 행을 만든다.
    pub fn dyeing_step(instruction: impl Into<String>) -> Self {
        Self {
            item_type: ItemType::DyeingStep,
            item_name: instruction.into(),
            ..Self::default()
        }
    }

    pub fn state(&self) -> RowState {
        self.item_type.state()
    }

    /// dosing을 설정한다. 값이 있으면 shade는 비운다.
    pub fn set_dosing(&mut self, dosing: Option<f64>) {
        self.dosing = dosing;
        if dosing.is_some() {
            self.shade = None;
        }
    }

    /// shade를 설정한다. 값이 있으면 dosing은 비운다.
    pub fn set_shade(&mut self, shade: Option<f64>) {
        self.shade = shade;
        if shade.is_some() {
            self.dosing = None;
        }
    }

    /// 품목 분류를 바꾼다.
    ///
    /// 약품 행과 공정 지시 행 사이를 오가면 수치/텍스트 필드와 품목명을 모두 비운다.
    /// 같은 상태 안에서의 변경(예: Dye → Chemical)은 분류만 바꾼다.
    pub fn set_item_type(&mut self, item_type: ItemType) {
        let crosses = self.item_type.state() != item_type.state();
        self.item_type = item_type;
        if crosses {
            self.clear_step_fields();
            self.item_name.clear();
        }
    }

    /// 공정 지시 행에서 비어 있어야 하는 필드가 모두 초기값인지 확인한다.
    pub fn is_at_step_reset(&self) -> bool {
        self.lot_no.is_empty()
            && self.dosing.is_none()
            && self.shade.is_none()
            && self.qty == SubunitQty::UNKNOWN
            && self.unit_price.is_none()
            && self.costing == 0.0
            && self.remarks.is_empty()
    }

    /// `item_type`, `item_name`, `highlight`를 제외한 필드를 초기화한다.
    pub(crate) fn clear_step_fields(&mut self) {
        self.lot_no.clear();
        self.dosing = None;
        self.shade = None;
        self.qty = SubunitQty::UNKNOWN;
        self.unit_price = None;
        self.costing = 0.0;
        self.remarks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_labels_parse_back() {
        for t in ItemType::ALL {
            assert_eq!(ItemType::parse(t.label()), Some(t));
        }
        assert_eq!(ItemType::parse("dyeing STEP"), Some(ItemType::DyeingStep));
        assert_eq!(ItemType::parse("Pigment"), None);
    }

    #[test]
    fn normal_to_normal_keeps_fields() {
        let mut row = ChemicalLineItem::new();
        row.set_item_type(ItemType::Dye);
        row.item_name = "Reactive Red".into();
        row.set_dosing(Some(2.0));
        row.set_item_type(ItemType::Chemical);
        assert_eq!(row.item_type, ItemType::Chemical);
        assert_eq!(row.item_name, "Reactive Red");
        assert_eq!(row.dosing, Some(2.0));
    }

    #[test]
    fn serialized_type_uses_reserved_marker() {
        let row = ChemicalLineItem::dyeing_step("Run 60C for 45 min");
        let text = toml::to_string(&row).unwrap();
        assert!(text.contains("item_type = \"Dyeing step\""), "{text}");
    }
}
