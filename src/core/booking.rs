use crate::core::validator::parse_date;
use crate::core::{ReservationPayload, ReservationRequest, SubmissionOutcome, TimeSlot};
use crate::utils::error::{ReservationError, Result};
use chrono::{LocalResult, SecondsFormat, Utc};
use chrono_tz::Tz;

pub const SUCCESS_FALLBACK_MESSAGE: &str = "Reservation successful!";
pub const FAILURE_FALLBACK_MESSAGE: &str = "Reservation failed.";

/// 組出送往 API 的 payload
///
/// 時段以餐廳時區 `tz` 的當地時間解讀（含日光節約時間），
/// 再轉成 UTC、精確到毫秒的 RFC 3339 字串。
/// 當地時間不存在或有兩個對應時刻時回傳 [`ReservationError::InvalidInput`]。
pub fn compose_payload(request: &ReservationRequest, tz: Tz) -> Result<ReservationPayload> {
    let date = parse_date(&request.date).ok_or_else(|| ReservationError::InvalidInput {
        field: "date".to_string(),
        message: format!("invalid date: {:?}", request.date),
    })?;

    let slot = request
        .time
        .parse::<TimeSlot>()
        .map_err(|message| ReservationError::InvalidInput {
            field: "time".to_string(),
            message,
        })?;

    let naive = date
        .and_hms_opt(slot.hour(), 0, 0)
        .ok_or_else(|| ReservationError::InvalidInput {
            field: "time".to_string(),
            message: format!("cannot place {} on {}", slot, date),
        })?;

    let local = match naive.and_local_timezone(tz) {
        LocalResult::Single(local) => local,
        LocalResult::Ambiguous(_, _) => {
            return Err(ReservationError::InvalidInput {
                field: "time".to_string(),
                message: format!("{} on {} is ambiguous in {}", slot, date, tz),
            })
        }
        LocalResult::None => {
            return Err(ReservationError::InvalidInput {
                field: "time".to_string(),
                message: format!("{} on {} does not exist in {}", slot, date, tz),
            })
        }
    };

    Ok(ReservationPayload {
        customer_name: request.name.trim().to_string(),
        customer_email: request.email.trim().to_string(),
        phone_number: request.phone.trim().to_string(),
        newsletter_signup: request.newsletter_signup,
        time_slot: local
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        guests: request.guests,
    })
}

impl SubmissionOutcome {
    /// body 明確寫著 `"success": true` 才算成功
    pub fn from_response(body: &serde_json::Value) -> Self {
        let success = body
            .get("success")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);

        let message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                if success {
                    SUCCESS_FALLBACK_MESSAGE.to_string()
                } else {
                    FAILURE_FALLBACK_MESSAGE.to_string()
                }
            });

        Self { success, message }
    }

    pub fn from_error(error: &ReservationError) -> Self {
        let message = error.user_message();
        Self {
            success: false,
            message: if message.trim().is_empty() {
                FAILURE_FALLBACK_MESSAGE.to_string()
            } else {
                message
            },
        }
    }
}
