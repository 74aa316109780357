//! 염색 약품 요청서 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod quantity;
pub mod requisition;
pub mod ui_cli;
pub mod units;
