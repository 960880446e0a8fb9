use crate::adapters::clock::SystemClock;
use crate::adapters::http::ApiClient;
use crate::utils::error::{ReservationError, Result};
use crate::utils::validation::{validate_required_field, validate_timezone, validate_url, Validate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 唯一讀取的環境變數：API base URL
pub const BASE_URL_ENV: &str = "RESERVATION_API_BASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub restaurant: RestaurantConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantConfig {
    /// IANA 時區名稱，例如 "America/New_York"
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReservationError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReservationError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 有指定檔案就載入，否則用預設值；最後由環境變數覆寫 base URL
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_base_url_override(std::env::var(BASE_URL_ENV).ok()))
    }

    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = Some(url);
        }
        self
    }

    pub fn with_timezone_override(mut self, timezone: Option<String>) -> Self {
        if let Some(timezone) = timezone.filter(|tz| !tz.trim().is_empty()) {
            self.restaurant.timezone = timezone;
        }
        self
    }

    /// 替換環境變數 (例如 ${API_HOST})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReservationError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn base_url(&self) -> Result<&str> {
        validate_required_field("api.base_url", &self.api.base_url).map(String::as_str)
    }

    pub fn api_client(&self) -> Result<ApiClient> {
        ApiClient::new(self.base_url()?)
    }

    pub fn timezone(&self) -> Result<Tz> {
        validate_timezone("restaurant.timezone", &self.restaurant.timezone)
    }

    pub fn clock(&self) -> Result<SystemClock> {
        Ok(SystemClock::new(self.timezone()?))
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", self.base_url()?)?;
        self.timezone()?;
        Ok(())
    }
}
