use thiserror::Error;

/// 無法取得伺服器或傳輸層訊息時的預設訊息
pub const NETWORK_FALLBACK_MESSAGE: &str = "Network or server error. Please try again later.";

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API request failed: {message}")]
    ApiError { status: Option<u16>, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },
}

impl ReservationError {
    /// 統一 API 失敗訊息：伺服器訊息優先，其次是傳輸層訊息，
    /// 都沒有時用 [`NETWORK_FALLBACK_MESSAGE`]
    pub fn api_failure(
        status: Option<u16>,
        server_message: Option<&str>,
        transport_message: &str,
    ) -> Self {
        let message = server_message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .or_else(|| Some(transport_message.trim()).filter(|m| !m.is_empty()))
            .unwrap_or(NETWORK_FALLBACK_MESSAGE)
            .to_string();

        ReservationError::ApiError { status, message }
    }

    /// 給使用者看的訊息（通知用）
    pub fn user_message(&self) -> String {
        match self {
            ReservationError::ApiError { message, .. } => message.clone(),
            ReservationError::InvalidInput { message, .. } => message.clone(),
            ReservationError::HttpError(e) => {
                let text = e.to_string();
                if text.trim().is_empty() {
                    NETWORK_FALLBACK_MESSAGE.to_string()
                } else {
                    text
                }
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReservationError>;
