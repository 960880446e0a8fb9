use crate::domain::model::ReservationPayload;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;

/// 目前時間，以餐廳所在時區表示
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

/// 給使用者的通知（瀏覽器的 toast、終端機的一行訊息）
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[async_trait]
pub trait ReservationApi: Send + Sync {
    /// 原樣回傳 response body；失敗一律已轉成
    /// [`crate::utils::error::ReservationError::ApiError`]
    async fn create_reservation(&self, payload: &ReservationPayload) -> Result<serde_json::Value>;
}
