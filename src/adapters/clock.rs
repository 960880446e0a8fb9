use crate::core::Clock;
use crate::utils::error::{ReservationError, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// 系統時間，換算成餐廳所在時區
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

/// 固定回傳同一個時間點（測試、`--now` 使用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Tz>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self { instant }
    }

    /// 解析 RFC 3339 時間（例如 `2026-10-16T22:59:00-04:00`），再換算到 `tz`
    pub fn parse(rfc3339: &str, tz: Tz) -> Result<Self> {
        DateTime::parse_from_rfc3339(rfc3339)
            .map(|instant| Self::new(instant.with_timezone(&tz)))
            .map_err(|e| ReservationError::InvalidInput {
                field: "now".to_string(),
                message: format!("invalid RFC 3339 timestamp {:?}: {}", rfc3339, e),
            })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.instant
    }
}
