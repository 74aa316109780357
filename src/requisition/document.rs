use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::line_item::ChemicalLineItem;
use super::sweep::recompute_in_place;
use super::totals::SharedTotals;

/// 요청서 머리글. 계산에는 쓰이지 않고 보고서 출력에만 쓰인다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequisitionHeader {
    pub requisition_no: String,
    pub date: String,
    pub party: String,
    pub order_no: String,
    pub color: String,
    pub batch_no: String,
    pub machine_no: String,
    pub fabric: String,
    pub note: String,
    /// 새 버전으로 저장할 때마다 1씩 증가한다.
    pub revision: u32,
}

/// 요청서 문서 한 건. 행 목록과 공유 합계를 함께 소유한다.
///
/// 모든 변경 메서드는 반환 전에 sweep을 수행하므로 파생값이 낡은 채로 남지 않는다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequisitionDocument {
    pub header: RequisitionHeader,
    pub totals: SharedTotals,
    pub items: Vec<ChemicalLineItem>,
}

/// 요청서 저장/로드 시 발생 가능한 오류.
#[derive(Debug)]
pub enum DocumentError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 판 번호가 더 올라갈 수 없음
    RevisionOverflow(u32),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            DocumentError::Parse(e) => write!(f, "요청서 파싱 오류: {e}"),
            DocumentError::Serialize(e) => write!(f, "요청서 직렬화 오류: {e}"),
            DocumentError::RevisionOverflow(rev) => write!(f, "판 번호를 더 올릴 수 없음: {rev}"),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<std::io::Error> for DocumentError {
    fn from(value: std::io::Error) -> Self {
        DocumentError::Io(value)
    }
}

impl From<toml::de::Error> for DocumentError {
    fn from(value: toml::de::Error) -> Self {
        DocumentError::Parse(value)
    }
}

impl From<toml::ser::Error> for DocumentError {
    fn from(value: toml::ser::Error) -> Self {
        DocumentError::Serialize(value)
    }
}

impl RequisitionDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// 빈 행을 끝에 추가하고 그 인덱스를 돌려준다.
    pub fn add_item(&mut self) -> usize {
        self.items.push(ChemicalLineItem::new());
        self.refresh();
        self.items.len() - 1
    }

    /// 이미 채워진 행을 끝에 추가한다.
    pub fn push_item(&mut self, item: ChemicalLineItem) -> usize {
        self.items.push(item);
        self.refresh();
        self.items.len() - 1
    }

    pub fn remove_item(&mut self, index: usize) -> Option<ChemicalLineItem> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.refresh();
        Some(item)
    }

    /// 행 위치를 옮긴다. 범위를 벗어나면 false.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.refresh();
        true
    }

    /// 한 행을 수정한 뒤 sweep을 수행한다. 인덱스가 없으면 false.
    pub fn edit_item<F>(&mut self, index: usize, edit: F) -> bool
    where
        F: FnOnce(&mut ChemicalLineItem),
    {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        edit(item);
        self.refresh();
        true
    }

    pub fn set_total_water(&mut self, liters: Option<f64>) {
        self.totals.total_water_l = liters;
        self.refresh();
    }

    pub fn set_fabric_weight(&mut self, kg: Option<f64>) {
        self.totals.fabric_weight_kg = kg;
        self.refresh();
    }

    pub fn set_totals(&mut self, totals: SharedTotals) {
        self.totals = totals;
        self.refresh();
    }

    /// 머리글, 합계, 행을 모두 비운다.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// 파생값을 현재 합계 기준으로 다시 맞춘다. 바뀐 행 수를 돌려준다.
    pub fn refresh(&mut self) -> usize {
        recompute_in_place(&mut self.items, self.totals)
    }

    /// 기존 파일을 덮어쓴다.
    pub fn save_to(&self, path: &Path) -> Result<(), DocumentError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::info!(
            "saved requisition '{}' rev {} to {}",
            self.header.requisition_no,
            self.header.revision,
            path.display()
        );
        Ok(())
    }

    /// 판(revision)을 올려 `<stem>_r<N>.toml`로 같은 폴더에 저장하고 그 경로를 돌려준다.
    pub fn save_new_revision(&mut self, path: &Path) -> Result<PathBuf, DocumentError> {
        let previous = self.header.revision;
        self.header.revision = previous
            .checked_add(1)
            .ok_or(DocumentError::RevisionOverflow(previous))?;
        let target = revision_path(path, self.header.revision);
        if let Err(e) = self.save_to(&target) {
            self.header.revision = previous;
            return Err(e);
        }
        Ok(target)
    }

    /// 파일을 읽고 sweep으로 파생값을 정규화한다.
    pub fn load_from(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        let mut doc: RequisitionDocument = toml::from_str(&content)?;
        let fixed = doc.refresh();
        if fixed > 0 {
            log::warn!(
                "{}: {fixed} rows had stale derived values and were recomputed",
                path.display()
            );
        }
        Ok(doc)
    }
}

/// `dir/batch12.toml` + 3 -> `dir/batch12_r3.toml`. 기존 `_rN` 꼬리는 교체한다.
pub fn revision_path(path: &Path, revision: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("requisition");
    let base = match stem.rsplit_once("_r") {
        Some((head, tail)) if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) => head,
        _ => stem,
    };
    path.with_file_name(format!("{base}_r{revision}.toml"))
}
