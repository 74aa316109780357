#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use dyehouse_requisition_toolbox::{
    config, conversion, i18n,
    quantity::QuantityKind,
    requisition::{
        document::RequisitionDocument,
        report::{format_money, format_subunit, render_text_report},
        summary::summarize,
        ChemicalLineItem, ItemType, RowState, SharedTotals,
    },
    units::{convert_mass, convert_volume, MassUnit, VolumeUnit},
};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    // CLI 옵션: --lang xx / --lang=xx (auto/en/ko), 마지막 위치 인자는 열 요청서 파일
    let mut cli_lang: Option<String> = None;
    let mut cli_file: Option<PathBuf> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        } else if !a.starts_with('-') {
            cli_file = Some(PathBuf::from(a));
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([1320.0, 820.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        log::warn!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Dyehouse Requisition Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                log::warn!("font setup: {e}");
            }
            let mut app = GuiApp::new(app_cfg);
            if let Some(path) = cli_file.as_deref() {
                app.open_document(path);
            }
            Box::new(app)
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui에 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾아 적용한다.
/// 1) assets/fonts/ 아래 폰트
/// 2) 운영체제 폰트(맑은 고딕, 나눔고딕, Apple SD 고딕 등)
/// 모두 실패하면 기본 폰트를 유지하고 Err를 돌려준다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/malgun.ttf"),
        PathBuf::from("assets/fonts/NanumGothic.ttf"),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .iter()
        .map(PathBuf::from),
    );
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            log::info!("using font {}", p.display());
            return Ok(());
        }
    }
    Err("Korean font not found; falling back to the default font.".into())
}

/// 선택적 숫자 입력 칸. 빈 칸은 None이다. 값이 바뀌면 true.
///
/// 모델 값과 입력 버퍼가 어긋나면(행 삭제, 파일 로드, dosing/shade 상호 비움 등) 버퍼를 모델 값으로 맞춘다.
fn optional_number_field(
    ui: &mut egui::Ui,
    value: &mut Option<f64>,
    buf: &mut String,
    width: f32,
) -> bool {
    if parse_optional(buf) != *value {
        *buf = value.map(|v| v.to_string()).unwrap_or_default();
    }
    let resp = ui.add(egui::TextEdit::singleline(buf).desired_width(width));
    if resp.changed() {
        let parsed = parse_optional(buf);
        if parsed != *value {
            *value = parsed;
            return true;
        }
    }
    false
}

fn parse_optional(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 행별 숫자 입력 버퍼.
#[derive(Debug, Clone, Default)]
struct RowBuffers {
    dosing: String,
    shade: String,
    unit_price: String,
}

enum RowAction {
    Remove(usize),
    Move(usize, usize),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Requisition,
    UnitConv,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    window_alpha: f32,
    // 요청서
    document: RequisitionDocument,
    doc_path: Option<PathBuf>,
    dirty: bool,
    row_buffers: Vec<RowBuffers>,
    water_input: Option<f64>,
    water_buf: String,
    water_unit: VolumeUnit,
    fabric_input: Option<f64>,
    fabric_buf: String,
    fabric_unit: MassUnit,
    liquor_ratio_input: f64,
    status: Option<String>,
    // 단위 변환
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // 설정
    show_settings_modal: bool,
    show_help_modal: bool,
    lang_input: String,
    currency_input: String,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let (conv_from, conv_to) = default_units_for_kind(QuantityKind::Mass);
        Self {
            tab: Tab::Requisition,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            document: RequisitionDocument::new(),
            doc_path: None,
            dirty: false,
            row_buffers: Vec::new(),
            water_input: None,
            water_buf: String::new(),
            water_unit: config.default_units.total_water,
            fabric_input: None,
            fabric_buf: String::new(),
            fabric_unit: config.default_units.fabric_weight,
            liquor_ratio_input: 8.0,
            status: None,
            conv_kind: QuantityKind::Mass,
            conv_value: 1.0,
            conv_from: conv_from.to_string(),
            conv_to: conv_to.to_string(),
            conv_result: None,
            show_settings_modal: false,
            show_help_modal: false,
            lang_input: config.language.clone(),
            currency_input: config.currency.clone(),
            settings_status: None,
            tr,
            config,
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 문서를 교체하고 합계 입력칸을 문서 값(사용자 단위)으로 맞춘다.
    fn replace_document(&mut self, document: RequisitionDocument, path: Option<PathBuf>) {
        self.water_input = document
            .totals
            .total_water_l
            .map(|l| convert_volume(l, VolumeUnit::Liter, self.water_unit));
        self.fabric_input = document
            .totals
            .fabric_weight_kg
            .map(|kg| convert_mass(kg, MassUnit::Kilogram, self.fabric_unit));
        self.document = document;
        self.doc_path = path;
        self.row_buffers.clear();
        self.dirty = false;
    }

    fn apply_totals_input(&mut self) {
        let totals = SharedTotals::from_units(
            self.water_input,
            self.water_unit,
            self.fabric_input,
            self.fabric_unit,
        );
        self.document.set_totals(totals);
        self.dirty = true;
    }

    fn open_document(&mut self, path: &Path) {
        match RequisitionDocument::load_from(path) {
            Ok(doc) => {
                self.replace_document(doc, Some(path.to_path_buf()));
                self.remember_path(path);
                self.status = Some(format!("{} {}", self.txt("gui.file.loaded", "Loaded"), path.display()));
            }
            Err(e) => {
                log::warn!("open {}: {e}", path.display());
                self.status = Some(format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)));
            }
        }
    }

    fn save_document(&mut self, path: &Path) {
        match self.document.save_to(path) {
            Ok(()) => {
                self.doc_path = Some(path.to_path_buf());
                self.dirty = false;
                self.remember_path(path);
                self.status = Some(format!("{} {}", self.txt("gui.file.saved", "Saved"), path.display()));
            }
            Err(e) => {
                self.status = Some(format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)));
            }
        }
    }

    fn save_new_revision(&mut self, path: &Path) {
        match self.document.save_new_revision(path) {
            Ok(target) => {
                self.doc_path = Some(target.clone());
                self.dirty = false;
                self.remember_path(&target);
                self.status = Some(format!("{} {}", self.txt("gui.file.saved", "Saved"), target.display()));
            }
            Err(e) => {
                self.status = Some(format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)));
            }
        }
    }

    fn remember_path(&mut self, path: &Path) {
        self.config.last_document = Some(path.display().to_string());
        if let Err(e) = self.config.save() {
            log::warn!("config save failed: {e}");
        }
    }

    fn toml_dialog() -> FileDialog {
        FileDialog::new().add_filter("Requisition (TOML)", &["toml"])
    }

    fn ui_file_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button(self.txt("gui.file.new", "New")).clicked() {
                self.replace_document(RequisitionDocument::new(), None);
                self.status = None;
            }
            if ui.button(self.txt("gui.file.open", "Open…")).clicked() {
                if let Some(path) = Self::toml_dialog().pick_file() {
                    self.open_document(&path);
                }
            }
            if ui.button(self.txt("gui.file.save", "Save")).clicked() {
                let path = self
                    .doc_path
                    .clone()
                    .or_else(|| Self::toml_dialog().save_file());
                if let Some(path) = path {
                    self.save_document(&path);
                }
            }
            if ui.button(self.txt("gui.file.save_as", "Save as…")).clicked() {
                if let Some(path) = Self::toml_dialog().save_file() {
                    self.save_document(&path);
                }
            }
            let revision_btn = ui
                .add_enabled(
                    self.doc_path.is_some(),
                    egui::Button::new(self.txt("gui.file.new_revision", "Save as new revision")),
                )
                .on_hover_text(self.txt(
                    "gui.file.new_revision_tip",
                    "Increment the revision and save beside the current file as <name>_rN.toml",
                ));
            if revision_btn.clicked() {
                if let Some(path) = self.doc_path.clone() {
                    self.save_new_revision(&path);
                }
            }
            if ui.button(self.txt("gui.file.export_report", "Export report…")).clicked() {
                if let Some(path) = FileDialog::new().add_filter("Text", &["txt"]).save_file() {
                    let text = render_text_report(&self.document, &self.tr, &self.config.currency);
                    self.status = Some(match fs::write(&path, text) {
                        Ok(()) => format!("{} {}", self.txt("gui.file.saved", "Saved"), path.display()),
                        Err(e) => format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)),
                    });
                }
            }
            ui.separator();
            let name = self
                .doc_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| self.txt("gui.file.untitled", "(untitled)"));
            ui.label(if self.dirty { format!("{name} *") } else { name });
        });
        if let Some(msg) = &self.status {
            ui.small(msg.as_str());
        }
    }

    fn ui_header(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let h = &mut self.document.header;
        let mut changed = false;
        let title = tr
            .lookup("gui.header.heading")
            .unwrap_or_else(|| "Requisition header".to_string());
        egui::CollapsingHeader::new(title)
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("header_grid")
                    .num_columns(6)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        let fields = [
                            (i18n::keys::HEADER_REQUISITION_NO, &mut h.requisition_no),
                            (i18n::keys::HEADER_DATE, &mut h.date),
                            (i18n::keys::HEADER_PARTY, &mut h.party),
                            (i18n::keys::HEADER_ORDER_NO, &mut h.order_no),
                            (i18n::keys::HEADER_COLOR, &mut h.color),
                            (i18n::keys::HEADER_BATCH_NO, &mut h.batch_no),
                            (i18n::keys::HEADER_MACHINE_NO, &mut h.machine_no),
                            (i18n::keys::HEADER_FABRIC, &mut h.fabric),
                            (i18n::keys::HEADER_NOTE, &mut h.note),
                        ];
                        for (i, (key, field)) in fields.into_iter().enumerate() {
                            ui.label(tr.t(key));
                            changed |= ui
                                .add(egui::TextEdit::singleline(field).desired_width(160.0))
                                .changed();
                            if i % 3 == 2 {
                                ui.end_row();
                            }
                        }
                        ui.label(tr.t(i18n::keys::HEADER_REVISION));
                        ui.label(h.revision.to_string());
                        ui.end_row();
                    });
            });
        if changed {
            self.dirty = true;
        }
    }

    fn ui_totals(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label(self.txt("gui.totals.water", "Total water"))
                .on_hover_text(self.txt(
                    "gui.totals.water_tip",
                    "Liquor volume of the dye bath. Dosing rows stay blank until this is set.",
                ));
            changed |= optional_number_field(ui, &mut self.water_input, &mut self.water_buf, 80.0);
            let before = self.water_unit;
            egui::ComboBox::from_id_source("water_unit")
                .selected_text(self.water_unit.symbol())
                .show_ui(ui, |ui| {
                    for u in VolumeUnit::ALL {
                        ui.selectable_value(&mut self.water_unit, u, u.symbol());
                    }
                });
            if before != self.water_unit {
                self.water_input = self
                    .water_input
                    .map(|v| convert_volume(v, before, self.water_unit));
            }
            ui.separator();
            ui.label(self.txt("gui.totals.fabric", "Fabric weight"))
                .on_hover_text(self.txt(
                    "gui.totals.fabric_tip",
                    "Batch fabric weight. Shade rows stay blank until this is set.",
                ));
            changed |= optional_number_field(ui, &mut self.fabric_input, &mut self.fabric_buf, 80.0);
            let before = self.fabric_unit;
            egui::ComboBox::from_id_source("fabric_unit")
                .selected_text(self.fabric_unit.symbol())
                .show_ui(ui, |ui| {
                    for u in MassUnit::ALL {
                        ui.selectable_value(&mut self.fabric_unit, u, u.symbol());
                    }
                });
            if before != self.fabric_unit {
                self.fabric_input = self
                    .fabric_input
                    .map(|v| convert_mass(v, before, self.fabric_unit));
            }
            ui.separator();
            match self.document.totals.liquor_ratio() {
                Some(r) => ui.label(format!("M:L 1:{r:.1}")),
                None => ui.label("M:L -"),
            };
            ui.add(
                egui::DragValue::new(&mut self.liquor_ratio_input)
                    .speed(0.1)
                    .clamp_range(1.0..=50.0)
                    .prefix("1:"),
            );
            if ui
                .button(self.txt("gui.totals.apply_ratio", "Water from M:L"))
                .clicked()
            {
                if let Some(liters) = self
                    .document
                    .totals
                    .water_for_liquor_ratio(self.liquor_ratio_input)
                {
                    self.water_input = Some(convert_volume(liters, VolumeUnit::Liter, self.water_unit));
                    changed = true;
                }
            }
        });
        if changed {
            self.apply_totals_input();
        }
    }

    fn ui_items(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        self.row_buffers
            .resize_with(self.document.items.len(), RowBuffers::default);
        let len = self.document.items.len();
        let mut edits: Vec<(usize, ChemicalLineItem)> = Vec::new();
        let mut action: Option<RowAction> = None;

        egui::Grid::new("items_grid")
            .striped(true)
            .num_columns(15)
            .spacing([6.0, 4.0])
            .show(ui, |ui| {
                for key in [
                    i18n::keys::REPORT_COL_NO,
                    i18n::keys::REPORT_COL_TYPE,
                    i18n::keys::REPORT_COL_NAME,
                    i18n::keys::REPORT_COL_LOT,
                    i18n::keys::REPORT_COL_DOSING,
                    i18n::keys::REPORT_COL_SHADE,
                    i18n::keys::REPORT_COL_KG,
                    i18n::keys::REPORT_COL_GM,
                    i18n::keys::REPORT_COL_MG,
                    i18n::keys::REPORT_COL_UNIT_PRICE,
                    i18n::keys::REPORT_COL_COSTING,
                    i18n::keys::REPORT_COL_REMARKS,
                ] {
                    ui.strong(tr.t(key));
                }
                ui.strong("★");
                ui.label("");
                ui.label("");
                ui.end_row();

                for (idx, (item, bufs)) in self
                    .document
                    .items
                    .iter()
                    .zip(self.row_buffers.iter_mut())
                    .enumerate()
                {
                    let mut row = item.clone();
                    ui.label(format!("{}", idx + 1));
                    let mut item_type = row.item_type;
                    egui::ComboBox::from_id_source(("item_type", idx))
                        .selected_text(item_type.label())
                        .width(100.0)
                        .show_ui(ui, |ui| {
                            for t in ItemType::ALL {
                                ui.selectable_value(&mut item_type, t, t.label());
                            }
                        });
                    if item_type != row.item_type {
                        row.set_item_type(item_type);
                    }
                    let state = row.state();
                    let highlight = row.highlight;
                    let mut name_edit = egui::TextEdit::singleline(&mut row.item_name);
                    if highlight {
                        name_edit = name_edit.text_color(egui::Color32::from_rgb(210, 60, 60));
                    }
                    match state {
                        RowState::DyeingStep => {
                            ui.add(
                                name_edit
                                    .desired_width(200.0)
                                    .hint_text(txt("gui.items.instruction_hint", "Process instruction")),
                            );
                            for _ in 0..9 {
                                ui.label("");
                            }
                        }
                        RowState::Normal => {
                            ui.add(name_edit.desired_width(200.0));
                            ui.add(egui::TextEdit::singleline(&mut row.lot_no).desired_width(70.0));
                            let mut dosing = row.dosing;
                            if optional_number_field(ui, &mut dosing, &mut bufs.dosing, 55.0) {
                                row.set_dosing(dosing);
                            }
                            let mut shade = row.shade;
                            if optional_number_field(ui, &mut shade, &mut bufs.shade, 55.0) {
                                row.set_shade(shade);
                            }
                            ui.label(format_subunit(row.qty.kg));
                            ui.label(format_subunit(row.qty.gm));
                            ui.label(format_subunit(row.qty.mg));
                            optional_number_field(ui, &mut row.unit_price, &mut bufs.unit_price, 65.0);
                            ui.label(format_money(row.costing));
                            ui.add(egui::TextEdit::singleline(&mut row.remarks).desired_width(120.0));
                        }
                    }
                    ui.checkbox(&mut row.highlight, "");
                    ui.horizontal(|ui| {
                        if ui.add_enabled(idx > 0, egui::Button::new("⬆").small()).clicked() {
                            action = Some(RowAction::Move(idx, idx - 1));
                        }
                        if ui
                            .add_enabled(idx + 1 < len, egui::Button::new("⬇").small())
                            .clicked()
                        {
                            action = Some(RowAction::Move(idx, idx + 1));
                        }
                    });
                    if ui
                        .small_button("✖")
                        .on_hover_text(txt("gui.items.remove", "Remove item"))
                        .clicked()
                    {
                        action = Some(RowAction::Remove(idx));
                    }
                    ui.end_row();
                    if row != *item {
                        edits.push((idx, row));
                    }
                }
            });

        for (idx, row) in edits {
            self.document.edit_item(idx, |slot| *slot = row);
            self.dirty = true;
        }
        match action {
            Some(RowAction::Remove(idx)) => {
                self.document.remove_item(idx);
                self.dirty = true;
            }
            Some(RowAction::Move(from, to)) => {
                self.dirty |= self.document.move_item(from, to);
            }
            None => {}
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button(txt("gui.items.add", "+ Add item")).clicked() {
                self.document.add_item();
                self.dirty = true;
            }
            if ui.button(txt("gui.items.add_step", "+ Add dyeing step")).clicked() {
                self.document.push_item(ChemicalLineItem::dyeing_step(""));
                self.dirty = true;
            }
        });
    }

    fn ui_summary(&self, ui: &mut egui::Ui) {
        let s = summarize(&self.document.items);
        ui.horizontal(|ui| {
            ui.label(format!(
                "{}: {}  |  {}: {}",
                self.txt("gui.summary.chemicals", "Chemical rows"),
                s.chemical_rows,
                self.txt("gui.summary.steps", "Dyeing steps"),
                s.step_rows
            ));
            ui.separator();
            ui.strong(format!(
                "{}: {:.3}",
                self.tr.t(i18n::keys::REPORT_TOTAL_QTY),
                s.total_quantity_kg
            ));
            ui.separator();
            ui.strong(format!(
                "{}: {} {}",
                self.tr.t(i18n::keys::REPORT_TOTAL_COSTING),
                format_money(s.total_costing),
                self.config.currency
            ));
        });
    }

    fn ui_requisition(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.requisition.heading", "Dyeing Chemical Requisition"))
            .on_hover_text(self.txt(
                "gui.requisition.tip",
                "Quantity = dosing × water / 1000 or shade / 100 × fabric weight. Costing = quantity × unit price.",
            ));
        self.ui_file_bar(ui);
        ui.separator();
        self.ui_header(ui);
        ui.separator();
        self.ui_totals(ui);
        ui.separator();
        egui::ScrollArea::horizontal()
            .id_source("items_scroll")
            .show(ui, |ui| self.ui_items(ui));
        ui.separator();
        self.ui_summary(ui);
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.unit.heading", "Unit Converter"));
        ui.add_space(6.0);
        let before = self.conv_kind;
        egui::ComboBox::from_id_source("conv_kind")
            .selected_text(kind_label(&self.tr, self.conv_kind))
            .show_ui(ui, |ui| {
                for kind in QuantityKind::ALL {
                    ui.selectable_value(&mut self.conv_kind, kind, kind_label(&self.tr, kind));
                }
            });
        if before != self.conv_kind {
            let (from, to) = default_units_for_kind(self.conv_kind);
            self.conv_from = from.to_string();
            self.conv_to = to.to_string();
            self.conv_result = None;
        }
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(&mut self.conv_value).speed(0.1));
            unit_combo(ui, "conv_from", &mut self.conv_from, unit_options(self.conv_kind));
            ui.label("→");
            unit_combo(ui, "conv_to", &mut self.conv_to, unit_options(self.conv_kind));
        });
        if ui.button(self.txt("gui.unit.convert", "Convert")).clicked() {
            self.conv_result = Some(
                match conversion::convert(self.conv_kind, self.conv_value, &self.conv_from, &self.conv_to) {
                    Ok(v) => format!("{} = {v:.6} {}", self.conv_value, self.conv_to),
                    Err(e) => format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)),
                },
            );
        }
        if let Some(res) = &self.conv_result {
            ui.strong(res.as_str());
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(self.txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Requisition, self.txt("gui.tab.requisition", "Requisition")),
            (Tab::UnitConv, self.txt("gui.tab.unit_conv", "Unit Converter")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    /// 설정 창에서 저장을 누르면 설정을 반영하고 파일에 기록한다.
    fn apply_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.currency = self.currency_input.trim().to_string();
        self.config.window_alpha = self.window_alpha;
        self.config.default_units.total_water = self.water_unit;
        self.config.default_units.fabric_weight = self.fabric_unit;
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.txt("gui.settings.saved", "Saved."),
            Err(e) => format!("Save error: {e}"),
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Dyehouse Requisition Toolbox"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            let mut save_clicked = false;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.as_str())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), txt("gui.settings.lang_auto", "System"));
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    ui.separator();
                    ui.label(txt("gui.settings.currency", "Currency"));
                    ui.add(egui::TextEdit::singleline(&mut self.currency_input).desired_width(80.0));
                    ui.separator();
                    ui.label(txt(
                        "gui.settings.units_hint",
                        "Current water/fabric units become the defaults when saved.",
                    ));
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        save_clicked = true;
                    }
                    if let Some(msg) = &self.settings_status {
                        ui.label(msg.as_str());
                    }
                });
            if save_clicked {
                self.apply_settings();
            }
        }

        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.about.app", "Dyeing chemical requisition calculator"));
                    ui.separator();
                    ui.label(txt("gui.about.dosing", "Dosing [g/l]: quantity kg = dosing × total water [L] / 1000"));
                    ui.label(txt("gui.about.shade", "Shade [%]: quantity kg = shade / 100 × fabric weight [kg]"));
                    ui.label(txt("gui.about.exclusive", "Entering dosing clears shade and vice versa."));
                    ui.label(txt("gui.about.subunits", "kg and g are truncated, mg is rounded."));
                    ui.label(txt("gui.about.costing", "Costing = (kg + g/1000 + mg/1000000) × unit price; blanks count as zero."));
                    ui.label(txt("gui.about.step", "A 'Dyeing step' row is a text instruction; its numeric fields stay empty."));
                });
        }

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(170.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Requisition => self.ui_requisition(ui),
                    Tab::UnitConv => self.ui_unit_conv(ui),
                });
        });
    }
}

fn kind_label(tr: &i18n::Translator, kind: QuantityKind) -> String {
    let (key, default) = match kind {
        QuantityKind::Mass => ("gui.unit.kind.mass", "Mass"),
        QuantityKind::Volume => ("gui.unit.kind.volume", "Volume"),
        QuantityKind::Concentration => ("gui.unit.kind.concentration", "Concentration"),
    };
    tr.lookup(key).unwrap_or_else(|| default.to_string())
}

fn default_units_for_kind(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Mass => ("kg", "lb"),
        QuantityKind::Volume => ("L", "gal"),
        QuantityKind::Concentration => ("g/l", "ppm"),
    }
}

fn unit_options(kind: QuantityKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        QuantityKind::Mass => &[("kg", "kg"), ("g", "g"), ("mg", "mg"), ("lb", "lb"), ("oz", "oz")],
        QuantityKind::Volume => &[
            ("L", "L"),
            ("mL", "mL"),
            ("m³", "m3"),
            ("gal (US)", "gal"),
            ("gal (UK)", "gal(uk)"),
        ],
        QuantityKind::Concentration => &[
            ("g/l", "g/l"),
            ("mg/l (ppm)", "ppm"),
            ("kg/m³", "kg/m3"),
            ("lb/gal (US)", "lb/gal"),
        ],
    }
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[(&str, &str)]) {
    let current = options
        .iter()
        .find(|(_, c)| value.eq_ignore_ascii_case(c))
        .map(|(l, _)| *l)
        .unwrap_or(value.as_str())
        .to_string();
    egui::ComboBox::from_id_source(id)
        .selected_text(current)
        .show_ui(ui, |ui| {
            for (label, code) in options {
                ui.selectable_value(value, code.to_string(), *label);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_optional_blank_and_garbage_are_none() {
        assert_eq!(parse_optional("  "), None);
        assert_eq!(parse_optional("abc"), None);
        assert_eq!(parse_optional("NaN"), None);
        assert_eq!(parse_optional(" 2.5 "), Some(2.5));
    }

    #[test]
    fn totals_input_is_converted_to_liters_and_kilograms() {
        let mut app = GuiApp::new(config::Config::default());
        app.water_unit = VolumeUnit::CubicMeter;
        app.water_input = Some(0.8);
        app.fabric_unit = MassUnit::Kilogram;
        app.fabric_input = Some(100.0);
        app.document.add_item();
        app.document.edit_item(0, |row| {
            row.set_item_type(ItemType::Dye);
            row.set_dosing(Some(2.0));
        });
        app.apply_totals_input();
        assert_eq!(app.document.totals.total_water_l, Some(800.0));
        assert_eq!(app.document.items[0].qty.kg, Some(1));
        assert_eq!(app.document.items[0].qty.gm, Some(600));
        assert!(app.dirty);
    }

    #[test]
    fn replace_document_shows_totals_in_user_units() {
        let mut app = GuiApp::new(config::Config::default());
        app.fabric_unit = MassUnit::Gram;
        let mut doc = RequisitionDocument::new();
        doc.set_fabric_weight(Some(2.5));
        app.replace_document(doc, None);
        assert_eq!(app.fabric_input, Some(2500.0));
        assert_eq!(app.water_input, None);
        assert!(!app.dirty);
    }

    #[test]
    fn item_grid_draws_step_and_chemical_rows_without_edits() {
        let mut app = GuiApp::new(config::Config::default());
        let mut doc = RequisitionDocument::new();
        doc.set_total_water(Some(100.0));
        let i = doc.add_item();
        doc.edit_item(i, |row| {
            row.set_item_type(ItemType::Dye);
            row.item_name = "Navy".into();
            row.set_dosing(Some(5.0));
            row.highlight = true;
        });
        doc.push_item(ChemicalLineItem::dyeing_step("Hold 20 min"));
        app.replace_document(doc.clone(), None);

        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| app.ui_items(ui));
            });
        }
        assert_eq!(app.document, doc);
        assert_eq!(app.row_buffers.len(), 2);
        assert_eq!(app.row_buffers[0].dosing, "5");
        assert!(!app.dirty);
    }

    #[test]
    fn unit_options_parse_in_converter() {
        for kind in QuantityKind::ALL {
            let (from, to) = default_units_for_kind(kind);
            assert!(conversion::convert(kind, 1.0, from, to).is_ok());
            for (_, code) in unit_options(kind) {
                assert!(conversion::convert(kind, 1.0, code, from).is_ok(), "{code}");
            }
        }
    }
}
