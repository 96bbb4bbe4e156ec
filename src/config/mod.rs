use crate::error::{CustomizationError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// customizations 사용자 설정
///
/// 설정 파일은 ~/.customizations/config.toml에 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API 백엔드 (memory, file)
    #[serde(default = "default_backend")]
    pub backend: String,

    /// file 백엔드가 사용하는 JSON 파일 경로
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// 결제 커스터마이제이션 function id
    #[serde(default = "default_payment_function_id")]
    pub payment_function_id: String,

    /// 배송 커스터마이제이션 function id
    #[serde(default = "default_delivery_function_id")]
    pub delivery_function_id: String,

    /// 일괄 삭제 전 확인 여부
    #[serde(default = "default_confirm_bulk_delete")]
    pub confirm_bulk_delete: bool,
}

fn default_backend() -> String {
    "file".to_string()
}

fn default_store_path() -> String {
    Config::config_dir()
        .join("customizations.json")
        .display()
        .to_string()
}

fn default_payment_function_id() -> String {
    "payment-customization".to_string()
}

fn default_delivery_function_id() -> String {
    "delivery-customization".to_string()
}

fn default_confirm_bulk_delete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            store_path: default_store_path(),
            payment_function_id: default_payment_function_id(),
            delivery_function_id: default_delivery_function_id(),
            confirm_bulk_delete: default_confirm_bulk_delete(),
        }
    }
}

impl Config {
    /// 설정 디렉토리 경로
    fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".customizations")
    }

    /// 설정 파일 경로 가져오기
    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// 설정 파일에서 로드 (없으면 기본값 사용)
    ///
    /// # Examples
    /// ```no_run
    /// use customizations::config::Config;
    ///
    /// let config = Config::load().unwrap();
    /// println!("{}", config.backend);
    /// ```
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        // 설정 파일이 없으면 기본값 반환
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            CustomizationError::ConfigError(format!("invalid config.toml: {}", e))
        })
    }

    /// 설정을 파일에 저장
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_path();

        // 디렉토리가 없으면 생성
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| CustomizationError::ConfigError(e.to_string()))?;

        fs::write(&config_path, toml_string)?;

        Ok(())
    }

    /// 설정 파일 초기화 (기본값으로)
    pub fn init() -> Result<PathBuf> {
        let config = Self::default();
        config.save()?;
        Ok(Self::config_path())
    }
}
