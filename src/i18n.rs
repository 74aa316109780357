use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const BACK: &str = "general.back";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_EDIT: &str = "main_menu.edit";
    pub const MAIN_MENU_REPORT: &str = "main_menu.report";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_FILE: &str = "main_menu.file";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_NO_SUCH_ITEM: &str = "error.no_such_item";

    pub const EDIT_HEADING: &str = "edit.heading";
    pub const EDIT_OPTIONS_LINE1: &str = "edit.options_line1";
    pub const EDIT_OPTIONS_LINE2: &str = "edit.options_line2";
    pub const EDIT_KEEP_HINT: &str = "edit.keep_hint";
    pub const PROMPT_TOTAL_WATER: &str = "prompt.total_water";
    pub const PROMPT_FABRIC_WEIGHT: &str = "prompt.fabric_weight";
    pub const PROMPT_ITEM_NUMBER: &str = "prompt.item_number";
    pub const PROMPT_MOVE_TO: &str = "prompt.move_to";
    pub const PROMPT_ITEM_TYPE: &str = "prompt.item_type";
    pub const PROMPT_ITEM_NAME: &str = "prompt.item_name";
    pub const PROMPT_INSTRUCTION: &str = "prompt.instruction";
    pub const PROMPT_LOT_NO: &str = "prompt.lot_no";
    pub const PROMPT_RECIPE_BASIS: &str = "prompt.recipe_basis";
    pub const PROMPT_DOSING: &str = "prompt.dosing";
    pub const PROMPT_SHADE: &str = "prompt.shade";
    pub const PROMPT_UNIT_PRICE: &str = "prompt.unit_price";
    pub const PROMPT_REMARKS: &str = "prompt.remarks";
    pub const RESULT_ITEM_ADDED: &str = "result.item_added";
    pub const RESULT_ITEM_REMOVED: &str = "result.item_removed";
    pub const RESULT_ITEM_MOVED: &str = "result.item_moved";
    pub const RESULT_HIGHLIGHT_TOGGLED: &str = "result.highlight_toggled";

    pub const HEADER_HEADING: &str = "header.heading";
    pub const HEADER_REQUISITION_NO: &str = "header.requisition_no";
    pub const HEADER_DATE: &str = "header.date";
    pub const HEADER_PARTY: &str = "header.party";
    pub const HEADER_ORDER_NO: &str = "header.order_no";
    pub const HEADER_COLOR: &str = "header.color";
    pub const HEADER_BATCH_NO: &str = "header.batch_no";
    pub const HEADER_MACHINE_NO: &str = "header.machine_no";
    pub const HEADER_FABRIC: &str = "header.fabric";
    pub const HEADER_NOTE: &str = "header.note";
    pub const HEADER_REVISION: &str = "header.revision";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_TOTAL_WATER: &str = "report.total_water";
    pub const REPORT_FABRIC_WEIGHT: &str = "report.fabric_weight";
    pub const REPORT_LIQUOR_RATIO: &str = "report.liquor_ratio";
    pub const REPORT_COL_NO: &str = "report.col_no";
    pub const REPORT_COL_TYPE: &str = "report.col_type";
    pub const REPORT_COL_NAME: &str = "report.col_name";
    pub const REPORT_COL_LOT: &str = "report.col_lot";
    pub const REPORT_COL_DOSING: &str = "report.col_dosing";
    pub const REPORT_COL_SHADE: &str = "report.col_shade";
    pub const REPORT_COL_KG: &str = "report.col_kg";
    pub const REPORT_COL_GM: &str = "report.col_gm";
    pub const REPORT_COL_MG: &str = "report.col_mg";
    pub const REPORT_COL_UNIT_PRICE: &str = "report.col_unit_price";
    pub const REPORT_COL_COSTING: &str = "report.col_costing";
    pub const REPORT_COL_REMARKS: &str = "report.col_remarks";
    pub const REPORT_STEP_PREFIX: &str = "report.step_prefix";
    pub const REPORT_TOTAL_QTY: &str = "report.total_qty";
    pub const REPORT_TOTAL_COSTING: &str = "report.total_costing";
    pub const REPORT_EMPTY: &str = "report.empty";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const FILE_HEADING: &str = "file.heading";
    pub const FILE_OPTIONS: &str = "file.options";
    pub const FILE_CURRENT: &str = "file.current";
    pub const FILE_NONE: &str = "file.none";
    pub const PROMPT_FILE_PATH: &str = "prompt.file_path";
    pub const RESULT_SAVED: &str = "result.saved";
    pub const RESULT_LOADED: &str = "result.loaded";
    pub const RESULT_CLEARED: &str = "result.cleared";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_PROMPT_FABRIC_UNIT: &str = "settings.prompt_fabric_unit";
    pub const SETTINGS_PROMPT_WATER_UNIT: &str = "settings.prompt_water_unit";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순으로 찾고, 한국어에 없으면 영어를 쓴다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    for var in ["LANG", "LC_ALL"] {
        if let Some(code) = std::env::var(var)
            .ok()
            .and_then(|v| normalize_locale_string(&v))
        {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 (중첩 가능한) 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            log::warn!("language pack {} is empty or invalid", path.display());
        }
        map
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        BACK => "0) 돌아가기",
        MAIN_MENU_TITLE => "\n=== 염색 약품 요청서 ===",
        MAIN_MENU_EDIT => "1) 요청서 편집",
        MAIN_MENU_REPORT => "2) 보고서 보기",
        MAIN_MENU_UNIT_CONVERSION => "3) 단위 변환기",
        MAIN_MENU_FILE => "4) 파일 (저장/불러오기)",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_NO_SUCH_ITEM => "해당 번호의 항목이 없습니다.",
        EDIT_HEADING => "\n-- 요청서 편집 --",
        EDIT_OPTIONS_LINE1 => "1) 머리글  2) 총 물량  3) 원단 중량  4) 항목 추가  5) 공정 지시 추가",
        EDIT_OPTIONS_LINE2 => "6) 항목 수정  7) 항목 삭제  8) 항목 이동  9) 강조 전환  0) 돌아가기",
        EDIT_KEEP_HINT => "(엔터=유지, '-'=비움)",
        PROMPT_TOTAL_WATER => "총 물량 (예: 800 L, 1.2 m3): ",
        PROMPT_FABRIC_WEIGHT => "원단 중량 (예: 100 kg, 220 lb): ",
        PROMPT_ITEM_NUMBER => "항목 번호: ",
        PROMPT_MOVE_TO => "옮길 위치: ",
        PROMPT_ITEM_TYPE => "분류 (1=Dye 2=Chemical 3=Auxiliary 4=Dyeing step): ",
        PROMPT_ITEM_NAME => "품목명: ",
        PROMPT_INSTRUCTION => "공정 지시: ",
        PROMPT_LOT_NO => "Lot 번호: ",
        PROMPT_RECIPE_BASIS => "기준 (d=dosing g/l, s=shade %): ",
        PROMPT_DOSING => "Dosing [g/l]: ",
        PROMPT_SHADE => "Shade [%]: ",
        PROMPT_UNIT_PRICE => "단가 [/kg]: ",
        PROMPT_REMARKS => "비고: ",
        RESULT_ITEM_ADDED => "항목이 추가되었습니다:",
        RESULT_ITEM_REMOVED => "항목이 삭제되었습니다:",
        RESULT_ITEM_MOVED => "항목을 옮겼습니다.",
        RESULT_HIGHLIGHT_TOGGLED => "강조 표시를 바꿨습니다.",
        HEADER_HEADING => "\n-- 머리글 --",
        HEADER_REQUISITION_NO => "요청서 번호",
        HEADER_DATE => "일자",
        HEADER_PARTY => "거래처",
        HEADER_ORDER_NO => "오더 번호",
        HEADER_COLOR => "색상",
        HEADER_BATCH_NO => "배치 번호",
        HEADER_MACHINE_NO => "기계 번호",
        HEADER_FABRIC => "원단",
        HEADER_NOTE => "메모",
        HEADER_REVISION => "판",
        REPORT_TITLE => "염색 약품 요청서",
        REPORT_TOTAL_WATER => "총 물량 [L]",
        REPORT_FABRIC_WEIGHT => "원단 중량 [kg]",
        REPORT_LIQUOR_RATIO => "욕비 1:",
        REPORT_COL_NO => "No",
        REPORT_COL_TYPE => "분류",
        REPORT_COL_NAME => "품목명",
        REPORT_COL_LOT => "Lot",
        REPORT_COL_DOSING => "g/l",
        REPORT_COL_SHADE => "%",
        REPORT_COL_KG => "kg",
        REPORT_COL_GM => "g",
        REPORT_COL_MG => "mg",
        REPORT_COL_UNIT_PRICE => "단가",
        REPORT_COL_COSTING => "금액",
        REPORT_COL_REMARKS => "비고",
        REPORT_STEP_PREFIX => ">>",
        REPORT_TOTAL_QTY => "약품 합계 [kg]",
        REPORT_TOTAL_COSTING => "금액 합계",
        REPORT_EMPTY => "(항목 없음)",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 질량  2) 체적  3) 농도",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: kg, L, g/l): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: lb, gal, ppm): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        FILE_HEADING => "\n-- 파일 --",
        FILE_OPTIONS => "1) 저장  2) 다른 이름으로 저장  3) 새 판으로 저장  4) 불러오기  5) 새 요청서  0) 돌아가기",
        FILE_CURRENT => "현재 파일:",
        FILE_NONE => "(없음)",
        PROMPT_FILE_PATH => "파일 경로: ",
        RESULT_SAVED => "저장했습니다:",
        RESULT_LOADED => "불러왔습니다:",
        RESULT_CLEARED => "새 요청서를 시작합니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 통화  3) 원단 중량 단위  4) 물량 단위  0) 돌아가기",
        SETTINGS_PROMPT_LANGUAGE => "언어 (auto/ko/en): ",
        SETTINGS_PROMPT_CURRENCY => "통화 표기: ",
        SETTINGS_PROMPT_FABRIC_UNIT => "원단 중량 단위 (kg/g/lb/oz): ",
        SETTINGS_PROMPT_WATER_UNIT => "물량 단위 (L/mL/m3/gal/gal(uk)): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        BACK => "0) Back",
        MAIN_MENU_TITLE => "\n=== Dyeing Chemical Requisition ===",
        MAIN_MENU_EDIT => "1) Edit requisition",
        MAIN_MENU_REPORT => "2) Show report",
        MAIN_MENU_UNIT_CONVERSION => "3) Unit converter",
        MAIN_MENU_FILE => "4) File (save/load)",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_NO_SUCH_ITEM => "No item with that number.",
        EDIT_HEADING => "\n-- Edit Requisition --",
        EDIT_OPTIONS_LINE1 => "1) Header  2) Total water  3) Fabric weight  4) Add item  5) Add dyeing step",
        EDIT_OPTIONS_LINE2 => "6) Edit item  7) Remove item  8) Move item  9) Toggle highlight  0) Back",
        EDIT_KEEP_HINT => "(enter=keep, '-'=clear)",
        PROMPT_TOTAL_WATER => "Total water (ex: 800 L, 1.2 m3): ",
        PROMPT_FABRIC_WEIGHT => "Fabric weight (ex: 100 kg, 220 lb): ",
        PROMPT_ITEM_NUMBER => "Item number: ",
        PROMPT_MOVE_TO => "Move to position: ",
        PROMPT_ITEM_TYPE => "Type (1=Dye 2=Chemical 3=Auxiliary 4=Dyeing step): ",
        PROMPT_ITEM_NAME => "Item name: ",
        PROMPT_INSTRUCTION => "Instruction: ",
        PROMPT_LOT_NO => "Lot no: ",
        PROMPT_RECIPE_BASIS => "Basis (d=dosing g/l, s=shade %): ",
        PROMPT_DOSING => "Dosing [g/l]: ",
        PROMPT_SHADE => "Shade [%]: ",
        PROMPT_UNIT_PRICE => "Unit price [/kg]: ",
        PROMPT_REMARKS => "Remarks: ",
        RESULT_ITEM_ADDED => "Item added:",
        RESULT_ITEM_REMOVED => "Item removed:",
        RESULT_ITEM_MOVED => "Item moved.",
        RESULT_HIGHLIGHT_TOGGLED => "Highlight toggled.",
        HEADER_HEADING => "\n-- Header --",
        HEADER_REQUISITION_NO => "Requisition no",
        HEADER_DATE => "Date",
        HEADER_PARTY => "Party",
        HEADER_ORDER_NO => "Order no",
        HEADER_COLOR => "Color",
        HEADER_BATCH_NO => "Batch no",
        HEADER_MACHINE_NO => "Machine no",
        HEADER_FABRIC => "Fabric",
        HEADER_NOTE => "Note",
        HEADER_REVISION => "Revision",
        REPORT_TITLE => "DYEING CHEMICAL REQUISITION",
        REPORT_TOTAL_WATER => "Total water [L]",
        REPORT_FABRIC_WEIGHT => "Fabric weight [kg]",
        REPORT_LIQUOR_RATIO => "M:L 1:",
        REPORT_COL_NO => "No",
        REPORT_COL_TYPE => "Type",
        REPORT_COL_NAME => "Item",
        REPORT_COL_LOT => "Lot",
        REPORT_COL_DOSING => "g/l",
        REPORT_COL_SHADE => "%",
        REPORT_COL_KG => "kg",
        REPORT_COL_GM => "g",
        REPORT_COL_MG => "mg",
        REPORT_COL_UNIT_PRICE => "Price",
        REPORT_COL_COSTING => "Costing",
        REPORT_COL_REMARKS => "Remarks",
        REPORT_STEP_PREFIX => ">>",
        REPORT_TOTAL_QTY => "Chemical total [kg]",
        REPORT_TOTAL_COSTING => "Total costing",
        REPORT_EMPTY => "(no items)",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Mass  2) Volume  3) Concentration",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: kg, L, g/l): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: lb, gal, ppm): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        FILE_HEADING => "\n-- File --",
        FILE_OPTIONS => "1) Save  2) Save as  3) Save as new revision  4) Load  5) New requisition  0) Back",
        FILE_CURRENT => "Current file:",
        FILE_NONE => "(none)",
        PROMPT_FILE_PATH => "File path: ",
        RESULT_SAVED => "Saved:",
        RESULT_LOADED => "Loaded:",
        RESULT_CLEARED => "Started a new requisition.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Currency  3) Fabric weight unit  4) Water unit  0) Back",
        SETTINGS_PROMPT_LANGUAGE => "Language (auto/ko/en): ",
        SETTINGS_PROMPT_CURRENCY => "Currency label: ",
        SETTINGS_PROMPT_FABRIC_UNIT => "Fabric weight unit (kg/g/lb/oz): ",
        SETTINGS_PROMPT_WATER_UNIT => "Water unit (L/mL/m3/gal/gal(uk)): ",
        SETTINGS_INVALID => "Invalid input; setting unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        _ => "[missing translation]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english_for_unknown_keys() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t(keys::APP_EXIT), "프로그램을 종료합니다.");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en-gb")), "en-us");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[gui.tab]\nrequisition = \"R\"\n").unwrap();
        assert_eq!(map.get("gui.tab.requisition").map(String::as_str), Some("R"));
    }

    #[test]
    fn built_in_packs_cover_the_same_gui_keys() {
        let en = built_in_pack("en-us").unwrap();
        let ko = built_in_pack("ko-kr").unwrap();
        assert_eq!(en.get("gui.tab.requisition").map(String::as_str), Some("Requisition"));
        let mut missing: Vec<_> = en.keys().filter(|k| !ko.contains_key(*k)).collect();
        missing.sort();
        assert!(missing.is_empty(), "{missing:?}");
    }
}
