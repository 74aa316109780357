use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::{MassUnit, VolumeUnit};

/// 설정 파일 기본 경로(작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 공유 합계 입력에 쓰는 기본 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub fabric_weight: MassUnit,
    pub total_water: VolumeUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            fabric_weight: MassUnit::Kilogram,
            total_water: VolumeUnit::Liter,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / ko / en
    pub language: String,
    pub language_pack_dir: Option<String>,
    pub default_units: DefaultUnits,
    /// 금액 옆에 붙는 통화 표기
    pub currency: String,
    pub window_alpha: f32,
    /// 마지막으로 열거나 저장한 요청서 파일
    pub last_document: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            default_units: DefaultUnits::default(),
            currency: "BDT".into(),
            window_alpha: 1.0,
            last_document: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드하거나 없으면 기본 설정을 그 경로에 생성한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        log::info!("created default config at {}", path.display());
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
