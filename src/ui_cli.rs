use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::{AppError, Session};
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::requisition::report::{format_money, render_text_report};
use crate::requisition::summary::summarize;
use crate::requisition::{ChemicalLineItem, ItemType, RowState};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditRequisition,
    Report,
    UnitConversion,
    File,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_EDIT,
        keys::MAIN_MENU_REPORT,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_FILE,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EditRequisition),
            "2" => return Ok(MenuChoice::Report),
            "3" => return Ok(MenuChoice::UnitConversion),
            "4" => return Ok(MenuChoice::File),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 요청서 편집 메뉴를 처리한다. 0을 고를 때까지 반복한다.
pub fn handle_edit(tr: &Translator, cfg: &Config, session: &mut Session) -> Result<(), AppError> {
    loop {
        print_item_list(tr, cfg, session);
        println!("{}", tr.t(keys::EDIT_HEADING));
        println!("{}", tr.t(keys::EDIT_OPTIONS_LINE1));
        println!("{}", tr.t(keys::EDIT_OPTIONS_LINE2));
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        let doc = &mut session.document;
        match sel.trim() {
            "1" => edit_header(tr, session)?,
            "2" => {
                let unit = cfg.default_units.total_water.symbol();
                if let Some(liters) = read_quantity(
                    tr,
                    tr.t(keys::PROMPT_TOTAL_WATER),
                    QuantityKind::Volume,
                    unit,
                    doc.totals.total_water_l,
                )? {
                    doc.set_total_water(liters);
                }
            }
            "3" => {
                let unit = cfg.default_units.fabric_weight.symbol();
                if let Some(kg) = read_quantity(
                    tr,
                    tr.t(keys::PROMPT_FABRIC_WEIGHT),
                    QuantityKind::Mass,
                    unit,
                    doc.totals.fabric_weight_kg,
                )? {
                    doc.set_fabric_weight(kg);
                }
            }
            "4" => {
                let idx = doc.add_item();
                fill_item(tr, session, idx)?;
                println!("{} #{}", tr.t(keys::RESULT_ITEM_ADDED), idx + 1);
            }
            "5" => {
                let instruction = read_line(tr.t(keys::PROMPT_INSTRUCTION))?;
                let idx = doc.push_item(ChemicalLineItem::dyeing_step(instruction.trim()));
                println!("{} #{}", tr.t(keys::RESULT_ITEM_ADDED), idx + 1);
            }
            "6" => {
                if let Some(idx) = read_item_index(tr, doc.items.len())? {
                    fill_item(tr, session, idx)?;
                }
            }
            "7" => {
                if let Some(idx) = read_item_index(tr, doc.items.len())? {
                    if let Some(item) = doc.remove_item(idx) {
                        println!("{} {}", tr.t(keys::RESULT_ITEM_REMOVED), item.item_name);
                    }
                }
            }
            "8" => {
                if let Some(from) = read_item_index(tr, doc.items.len())? {
                    let to = read_usize(tr, tr.t(keys::PROMPT_MOVE_TO))?;
                    if to >= 1 && doc.move_item(from, to - 1) {
                        println!("{}", tr.t(keys::RESULT_ITEM_MOVED));
                    } else {
                        println!("{}", tr.t(keys::ERROR_NO_SUCH_ITEM));
                    }
                }
            }
            "9" => {
                if let Some(idx) = read_item_index(tr, doc.items.len())? {
                    doc.edit_item(idx, |item| item.highlight = !item.highlight);
                    println!("{}", tr.t(keys::RESULT_HIGHLIGHT_TOGGLED));
                }
            }
            "0" => return Ok(()),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn edit_header(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HEADER_HEADING));
    println!("{}", tr.t(keys::EDIT_KEEP_HINT));
    let h = &mut session.document.header;
    for (key, field) in [
        (keys::HEADER_REQUISITION_NO, &mut h.requisition_no),
        (keys::HEADER_DATE, &mut h.date),
        (keys::HEADER_PARTY, &mut h.party),
        (keys::HEADER_ORDER_NO, &mut h.order_no),
        (keys::HEADER_COLOR, &mut h.color),
        (keys::HEADER_BATCH_NO, &mut h.batch_no),
        (keys::HEADER_MACHINE_NO, &mut h.machine_no),
        (keys::HEADER_FABRIC, &mut h.fabric),
        (keys::HEADER_NOTE, &mut h.note),
    ] {
        let prompt = format!("{} [{}]: ", tr.t(key), field);
        *field = read_text_edit(&prompt, field)?;
    }
    Ok(())
}

/// 한 행의 입력값을 묻는다. 빈 입력은 기존 값을 유지한다.
fn fill_item(tr: &Translator, session: &mut Session, idx: usize) -> Result<(), AppError> {
    let doc = &mut session.document;
    let Some(mut item) = doc.items.get(idx).cloned() else {
        println!("{}", tr.t(keys::ERROR_NO_SUCH_ITEM));
        return Ok(());
    };
    println!("{}", tr.t(keys::EDIT_KEEP_HINT));
    let type_sel = read_line(&format!(
        "{}[{}] ",
        tr.t(keys::PROMPT_ITEM_TYPE),
        item.item_type.label()
    ))?;
    if let Some(t) = parse_item_type(type_sel.trim()) {
        item.set_item_type(t);
    }
    match item.state() {
        RowState::DyeingStep => {
            let prompt = format!("{}[{}] ", tr.t(keys::PROMPT_INSTRUCTION), item.item_name);
            item.item_name = read_text_edit(&prompt, &item.item_name)?;
        }
        RowState::Normal => {
            let prompt = format!("{}[{}] ", tr.t(keys::PROMPT_ITEM_NAME), item.item_name);
            item.item_name = read_text_edit(&prompt, &item.item_name)?;
            let prompt = format!("{}[{}] ", tr.t(keys::PROMPT_LOT_NO), item.lot_no);
            item.lot_no = read_text_edit(&prompt, &item.lot_no)?;
            let basis = read_line(tr.t(keys::PROMPT_RECIPE_BASIS))?;
            match basis.trim().to_lowercase().as_str() {
                "d" => {
                    let v = read_optional_f64(tr, tr.t(keys::PROMPT_DOSING), item.dosing)?;
                    item.set_dosing(v);
                }
                "s" => {
                    let v = read_optional_f64(tr, tr.t(keys::PROMPT_SHADE), item.shade)?;
                    item.set_shade(v);
                }
                _ => {}
            }
            item.unit_price = read_optional_f64(tr, tr.t(keys::PROMPT_UNIT_PRICE), item.unit_price)?;
            let prompt = format!("{}[{}] ", tr.t(keys::PROMPT_REMARKS), item.remarks);
            item.remarks = read_text_edit(&prompt, &item.remarks)?;
        }
    }
    doc.edit_item(idx, |slot| *slot = item);
    Ok(())
}

fn parse_item_type(s: &str) -> Option<ItemType> {
    match s {
        "1" => Some(ItemType::Dye),
        "2" => Some(ItemType::Chemical),
        "3" => Some(ItemType::Auxiliary),
        "4" => Some(ItemType::DyeingStep),
        other => ItemType::parse(other).filter(|t| *t != ItemType::Unassigned),
    }
}

fn print_item_list(tr: &Translator, cfg: &Config, session: &Session) {
    let doc = &session.document;
    println!();
    print!("{}", render_text_report(doc, tr, &cfg.currency));
    let summary = summarize(&doc.items);
    log::debug!(
        "{} chemical rows, {} steps, costing {}",
        summary.chemical_rows,
        summary.step_rows,
        format_money(summary.total_costing)
    );
}

/// 보고서를 출력한다.
pub fn handle_report(tr: &Translator, cfg: &Config, session: &Session) {
    println!();
    print!(
        "{}",
        render_text_report(&session.document, tr, &cfg.currency)
    );
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Some(kind) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| QuantityKind::ALL.get(n).copied())
        {
            break kind;
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// 파일 메뉴(저장/다른 이름/새 판/불러오기/새 요청서)를 처리한다.
pub fn handle_file(tr: &Translator, cfg: &mut Config, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FILE_HEADING));
    let current = session
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| tr.t(keys::FILE_NONE).to_string());
    println!("{} {current}", tr.t(keys::FILE_CURRENT));
    println!("{}", tr.t(keys::FILE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" | "2" => {
            let path = match (&session.path, sel.trim()) {
                (Some(p), "1") => p.clone(),
                _ => read_path(tr)?,
            };
            session.document.save_to(&path)?;
            println!("{} {}", tr.t(keys::RESULT_SAVED), path.display());
            remember(cfg, session, path);
        }
        "3" => {
            let path = match &session.path {
                Some(p) => p.clone(),
                None => read_path(tr)?,
            };
            let target = session.document.save_new_revision(&path)?;
            println!("{} {}", tr.t(keys::RESULT_SAVED), target.display());
            remember(cfg, session, target);
        }
        "4" => {
            let path = read_path(tr)?;
            *session = Session::open(path.clone())?;
            println!("{} {}", tr.t(keys::RESULT_LOADED), path.display());
            remember(cfg, session, path);
        }
        "5" => {
            session.document.clear();
            session.path = None;
            println!("{}", tr.t(keys::RESULT_CLEARED));
        }
        "0" => {}
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn remember(cfg: &mut Config, session: &mut Session, path: PathBuf) {
    cfg.last_document = Some(path.display().to_string());
    session.path = Some(path);
}

fn read_path(tr: &Translator) -> Result<PathBuf, AppError> {
    loop {
        let p = read_line(tr.t(keys::PROMPT_FILE_PATH))?;
        let p = p.trim();
        if !p.is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
}

/// 설정 메뉴를 처리한다. 값이 바뀌었으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} lang={} currency={} fabric={} water={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.currency,
        cfg.default_units.fabric_weight.symbol(),
        cfg.default_units.total_water.symbol()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match lang.trim().to_lowercase().as_str() {
                l @ ("auto" | "ko" | "en") => cfg.language = l.to_string(),
                _ => return invalid_setting(tr),
            }
        }
        "2" => {
            let currency = read_line(tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
            if currency.trim().is_empty() {
                return invalid_setting(tr);
            }
            cfg.currency = currency.trim().to_string();
        }
        "3" => {
            let unit = read_line(tr.t(keys::SETTINGS_PROMPT_FABRIC_UNIT))?;
            match conversion::parse_mass_unit(&unit) {
                Ok(u) => cfg.default_units.fabric_weight = u,
                Err(_) => return invalid_setting(tr),
            }
        }
        "4" => {
            let unit = read_line(tr.t(keys::SETTINGS_PROMPT_WATER_UNIT))?;
            match conversion::parse_volume_unit(&unit) {
                Ok(u) => cfg.default_units.total_water = u,
                Err(_) => return invalid_setting(tr),
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn invalid_setting(tr: &Translator) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_INVALID));
    Ok(false)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_usize(tr: &Translator, prompt: &str) -> Result<usize, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<usize>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 1부터 시작하는 항목 번호를 읽어 0 기반 인덱스로 돌려준다.
fn read_item_index(tr: &Translator, len: usize) -> Result<Option<usize>, AppError> {
    let n = read_usize(tr, tr.t(keys::PROMPT_ITEM_NUMBER))?;
    if n >= 1 && n <= len {
        Ok(Some(n - 1))
    } else {
        println!("{}", tr.t(keys::ERROR_NO_SUCH_ITEM));
        Ok(None)
    }
}

fn read_text_edit(prompt: &str, current: &str) -> Result<String, AppError> {
    let s = read_line(prompt)?;
    Ok(match edit_input(&s) {
        EditInput::Keep => current.to_string(),
        EditInput::Clear => String::new(),
        EditInput::Value(v) => v.to_string(),
    })
}

fn read_optional_f64(
    tr: &Translator,
    prompt: &str,
    current: Option<f64>,
) -> Result<Option<f64>, AppError> {
    let shown = current.map(|v| v.to_string()).unwrap_or_default();
    loop {
        let s = read_line(&format!("{prompt}[{shown}] "))?;
        match edit_input(&s) {
            EditInput::Keep => return Ok(current),
            EditInput::Clear => return Ok(None),
            EditInput::Value(v) => match v.parse::<f64>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
            },
        }
    }
}

/// "800 L", "1.2m3", "220" 같은 입력을 기준 단위 값으로 읽는다.
/// 빈 입력은 취소(None), '-'는 값 비움(Some(None)).
fn read_quantity(
    tr: &Translator,
    prompt: &str,
    kind: QuantityKind,
    default_unit: &str,
    current_base: Option<f64>,
) -> Result<Option<Option<f64>>, AppError> {
    let shown = current_base.map(|v| v.to_string()).unwrap_or_default();
    loop {
        let s = read_line(&format!("{prompt}[{shown}] "))?;
        let text = match edit_input(&s) {
            EditInput::Keep => return Ok(None),
            EditInput::Clear => return Ok(Some(None)),
            EditInput::Value(v) => v,
        };
        match parse_quantity_input(kind, text, default_unit) {
            Ok(Some(v)) => return Ok(Some(Some(v))),
            Ok(None) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum EditInput<'a> {
    Keep,
    Clear,
    Value(&'a str),
}

fn edit_input(raw: &str) -> EditInput<'_> {
    match raw.trim() {
        "" => EditInput::Keep,
        "-" => EditInput::Clear,
        v => EditInput::Value(v),
    }
}

/// 숫자와 (선택적) 단위를 분리해 기준 단위로 환산한다. 숫자가 아니면 Ok(None).
///
/// 숫자로 읽히는 가장 긴 앞부분을 값으로 쓰므로 `1e3 L` 같은 지수 표기도 받는다.
fn parse_quantity_input(
    kind: QuantityKind,
    text: &str,
    default_unit: &str,
) -> Result<Option<f64>, conversion::ConversionError> {
    let text = text.trim();
    let Some((value, unit)) = (1..=text.len())
        .rev()
        .filter(|&i| text.is_char_boundary(i))
        .find_map(|i| {
            let (number, unit) = text.split_at(i);
            number
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| (v, unit))
        })
    else {
        return Ok(None);
    };
    let unit = if unit.trim().is_empty() {
        default_unit
    } else {
        unit.trim()
    };
    conversion::to_base(kind, value, unit).map(|q| Some(q.value_base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_input_accepts_attached_and_default_units() {
        let v = parse_quantity_input(QuantityKind::Volume, "1.2m3", "L").unwrap();
        assert_eq!(v, Some(1200.0));
        let v = parse_quantity_input(QuantityKind::Mass, "250", "g").unwrap();
        assert_eq!(v, Some(0.25));
        let v = parse_quantity_input(QuantityKind::Mass, "abc", "kg").unwrap();
        assert_eq!(v, None);
        assert!(parse_quantity_input(QuantityKind::Mass, "3 stone", "kg").is_err());
    }

    #[test]
    fn quantity_input_accepts_exponent_notation() {
        let v = parse_quantity_input(QuantityKind::Volume, "1e3 L", "m3").unwrap();
        assert_eq!(v, Some(1000.0));
        let v = parse_quantity_input(QuantityKind::Mass, "2.5E2g", "kg").unwrap();
        assert_eq!(v, Some(0.25));
        let v = parse_quantity_input(QuantityKind::Volume, "1.2m3", "L").unwrap();
        assert_eq!(v, Some(1200.0));
        let v = parse_quantity_input(QuantityKind::Mass, "nan", "kg").unwrap();
        assert_eq!(v, None);
    }

    #[test]
    fn edit_input_distinguishes_keep_and_clear() {
        assert_eq!(edit_input("\n"), EditInput::Keep);
        assert_eq!(edit_input(" - \n"), EditInput::Clear);
        assert_eq!(edit_input("Soda ash\n"), EditInput::Value("Soda ash"));
    }

    #[test]
    fn item_type_menu_numbers() {
        assert_eq!(parse_item_type("4"), Some(ItemType::DyeingStep));
        assert_eq!(parse_item_type("chemical"), Some(ItemType::Chemical));
        assert_eq!(parse_item_type(""), None);
    }
}
