//! 염색 약품 요청서(requisition) 관련 계산 모듈 모음.

pub mod deriver;
pub mod document;
pub mod line_item;
pub mod report;
pub mod summary;
pub mod sweep;
pub mod totals;

pub use deriver::*;
pub use line_item::*;
pub use sweep::*;
pub use totals::SharedTotals;
