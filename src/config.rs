use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::integrations::ApiKeys;
use crate::system::SystemConfiguration;

/// 기본 설정 파일 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 마지막으로 입력한 시스템 구성도 함께 저장한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en-us)
    pub language: String,
    /// 언어팩(TOML) 디렉터리. 없으면 `locales/`를 찾는다.
    pub language_pack_dir: Option<String>,
    /// 금액 표시 기호
    pub currency_symbol: String,
    pub system: SystemConfiguration,
    pub api_keys: ApiKeys,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            currency_symbol: "$".to_string(),
            system: SystemConfiguration::default(),
            api_keys: ApiKeys::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정 경로의 설정을 로드하고, 파일이 없으면 기본 설정을 그 경로에 만든다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        tracing::info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

/// 지정 경로의 설정 파일을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    tracing::info!(path = %path.display(), "설정 로드");
    Ok(cfg)
}

/// 설정을 지정 경로에 저장한다.
pub fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "설정 저장");
    Ok(())
}
