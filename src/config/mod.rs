use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const API_URL_ENV_VAR: &str = "PETDOR_API_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8501/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            timeout_seconds: None,
        }
    }

    /// 從環境變數讀取 base URL，未設定時退回預設值
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var(API_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(api_base_url)
    }

    /// 設定單次請求的超時秒數；未設定時交給傳輸層預設值
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

impl ConfigProvider for ClientConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)
    }
}
