//! 화면/인쇄용 포맷팅과 텍스트 보고서.
//!
//! 수량 자리는 소수점 없이, 금액과 단가는 소수 둘째 자리까지 표시한다.
//! 미정 값은 빈 칸으로 표시하고 금액은 항상 숫자로 표시한다.

use std::fmt::Write;

use super::document::RequisitionDocument;
use super::line_item::RowState;
use super::summary::summarize;
use crate::i18n::{keys, Translator};

pub fn format_subunit(value: Option<i64>) -> String {
    value.map(|v| format!("{v}")).unwrap_or_default()
}

pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

pub fn format_optional_money(value: Option<f64>) -> String {
    value.map(format_money).unwrap_or_default()
}

pub fn format_optional_decimal(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{v:.decimals$}"))
        .unwrap_or_default()
}

/// 인쇄용 고정폭 텍스트 보고서를 만든다.
pub fn render_text_report(doc: &RequisitionDocument, tr: &Translator, currency: &str) -> String {
    let mut out = String::new();
    // String에 쓰는 것은 실패하지 않는다.
    let _ = write_report(&mut out, doc, tr, currency);
    out
}

fn write_report(
    out: &mut String,
    doc: &RequisitionDocument,
    tr: &Translator,
    currency: &str,
) -> std::fmt::Result {
    let h = &doc.header;
    let rule = "-".repeat(118);
    writeln!(out, "{}", tr.t(keys::REPORT_TITLE))?;
    writeln!(out, "{rule}")?;
    let header_pairs = [
        (keys::HEADER_REQUISITION_NO, h.requisition_no.clone()),
        (keys::HEADER_DATE, h.date.clone()),
        (keys::HEADER_REVISION, h.revision.to_string()),
        (keys::HEADER_PARTY, h.party.clone()),
        (keys::HEADER_ORDER_NO, h.order_no.clone()),
        (keys::HEADER_COLOR, h.color.clone()),
        (keys::HEADER_BATCH_NO, h.batch_no.clone()),
        (keys::HEADER_MACHINE_NO, h.machine_no.clone()),
        (keys::HEADER_FABRIC, h.fabric.clone()),
    ];
    for pair in header_pairs.chunks(3) {
        let line: Vec<String> = pair
            .iter()
            .map(|(key, value)| format!("{:<16} {:<20}", format!("{}:", tr.t(key)), value))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }
    write!(
        out,
        "{}: {}   {}: {}",
        tr.t(keys::REPORT_TOTAL_WATER),
        format_optional_decimal(doc.totals.total_water_l, 2),
        tr.t(keys::REPORT_FABRIC_WEIGHT),
        format_optional_decimal(doc.totals.fabric_weight_kg, 2),
    )?;
    if let Some(ratio) = doc.totals.liquor_ratio() {
        write!(out, "   {}{ratio:.1}", tr.t(keys::REPORT_LIQUOR_RATIO))?;
    }
    writeln!(out)?;
    if !h.note.is_empty() {
        writeln!(out, "{}: {}", tr.t(keys::HEADER_NOTE), h.note)?;
    }
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:>3} {:<10} {:<24} {:<8} {:>7} {:>7} {:>5} {:>4} {:>4} {:>9} {:>11}  {}",
        tr.t(keys::REPORT_COL_NO),
        tr.t(keys::REPORT_COL_TYPE),
        tr.t(keys::REPORT_COL_NAME),
        tr.t(keys::REPORT_COL_LOT),
        tr.t(keys::REPORT_COL_DOSING),
        tr.t(keys::REPORT_COL_SHADE),
        tr.t(keys::REPORT_COL_KG),
        tr.t(keys::REPORT_COL_GM),
        tr.t(keys::REPORT_COL_MG),
        tr.t(keys::REPORT_COL_UNIT_PRICE),
        tr.t(keys::REPORT_COL_COSTING),
        tr.t(keys::REPORT_COL_REMARKS),
    )?;
    writeln!(out, "{rule}")?;
    if doc.items.is_empty() {
        writeln!(out, "{}", tr.t(keys::REPORT_EMPTY))?;
    }
    for (idx, item) in doc.items.iter().enumerate() {
        let marker = if item.highlight { "*" } else { " " };
        match item.state() {
            RowState::DyeingStep => {
                writeln!(
                    out,
                    "{:>3}{marker}{} {}",
                    idx + 1,
                    tr.t(keys::REPORT_STEP_PREFIX),
                    item.item_name
                )?;
            }
            RowState::Normal => {
                writeln!(
                    out,
                    "{:>3}{marker}{:<10} {:<24} {:<8} {:>7} {:>7} {:>5} {:>4} {:>4} {:>9} {:>11}  {}",
                    idx + 1,
                    item.item_type.label(),
                    item.item_name,
                    item.lot_no,
                    format_optional_decimal(item.dosing, 3),
                    format_optional_decimal(item.shade, 3),
                    format_subunit(item.qty.kg),
                    format_subunit(item.qty.gm),
                    format_subunit(item.qty.mg),
                    format_optional_money(item.unit_price),
                    format_money(item.costing),
                    item.remarks,
                )?;
            }
        }
    }
    let summary = summarize(&doc.items);
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{}: {:.3}   {}: {} {currency}",
        tr.t(keys::REPORT_TOTAL_QTY),
        summary.total_quantity_kg,
        tr.t(keys::REPORT_TOTAL_COSTING),
        format_money(summary.total_costing),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requisition::{ChemicalLineItem, ItemType};

    #[test]
    fn unknown_subunit_is_blank_and_money_has_two_decimals() {
        assert_eq!(format_subunit(None), "");
        assert_eq!(format_subunit(Some(500)), "500");
        assert_eq!(format_money(1.0), "1.00");
        assert_eq!(format_optional_money(None), "");
        assert_eq!(format_optional_decimal(Some(0.5), 3), "0.500");
    }

    #[test]
    fn report_lists_steps_as_instructions() {
        let tr = Translator::new("en");
        let mut doc = RequisitionDocument::new();
        doc.set_total_water(Some(100.0));
        let i = doc.add_item();
        doc.edit_item(i, |row| {
            row.set_item_type(ItemType::Dye);
            row.item_name = "Navy".into();
            row.set_dosing(Some(5.0));
            row.unit_price = Some(2.0);
            row.highlight = true;
        });
        doc.push_item(ChemicalLineItem::dyeing_step("Hold 20 min at 60 °C"));
        let text = render_text_report(&doc, &tr, "BDT");
        assert!(text.contains(">> Hold 20 min at 60 °C"));
        assert!(text.contains("  1*Dye"));
        assert!(text.contains("Total costing: 1.00 BDT"));
    }

    #[test]
    fn empty_report_says_so() {
        let tr = Translator::new("en");
        let text = render_text_report(&RequisitionDocument::new(), &tr, "USD");
        assert!(text.contains("(no items)"));
    }
}
