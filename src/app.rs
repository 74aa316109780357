use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigError};
use crate::conversion;
use crate::i18n::{self, Translator};
use crate::requisition::document::{DocumentError, RequisitionDocument};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 요청서 저장/로드 오류
    Document(DocumentError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Document(e) => write!(f, "요청서 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<DocumentError> for AppError {
    fn from(value: DocumentError) -> Self {
        AppError::Document(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// CLI 세션 상태. 편집 중인 요청서와 그 파일 경로를 가진다.
#[derive(Debug, Default)]
pub struct Session {
    pub document: RequisitionDocument,
    pub path: Option<PathBuf>,
}

impl Session {
    pub fn open(path: PathBuf) -> Result<Self, AppError> {
        let document = RequisitionDocument::load_from(&path)?;
        Ok(Self {
            document,
            path: Some(path),
        })
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 파일/변환 오류는 메시지만 출력하고 메뉴로 돌아간다. 표준 입출력 오류만 루프를 끝낸다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    tr: &mut Translator,
    session: &mut Session,
) -> Result<(), AppError> {
    loop {
        let result = match ui_cli::main_menu(tr)? {
            MenuChoice::EditRequisition => ui_cli::handle_edit(tr, config, session),
            MenuChoice::Report => {
                ui_cli::handle_report(tr, config, session);
                Ok(())
            }
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr),
            MenuChoice::File => ui_cli::handle_file(tr, config, session),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config).and_then(|changed| {
                    if changed {
                        config.save_to(config_path)?;
                        let lang = i18n::resolve_language(&config.language, None);
                        *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                        println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                    }
                    Ok(())
                })
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match result {
            Ok(()) => {}
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => {
                log::warn!("{e}");
                println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            }
        }
    }
    Ok(())
}
