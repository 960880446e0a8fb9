use crate::core::{Field, TimeSlot};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// 數字、空白、括號、加號、連字號，7 到 20 個字元
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9()+\- ]{7,20}$").unwrap());

/// 驗證單一欄位，`None` 表示通過
///
/// 只有 [`Field::Date`] 會用到 `today`：日期不能早於今天
pub fn validate_field(field: Field, value: &str, today: NaiveDate) -> Option<&'static str> {
    let value = value.trim();

    match field {
        Field::Name => value.is_empty().then_some("Please enter your name."),
        Field::Email => {
            if value.is_empty() {
                Some("Please enter your email address.")
            } else if !EMAIL_RE.is_match(value) {
                Some("Please enter a valid email address.")
            } else {
                None
            }
        }
        Field::Phone => {
            if value.is_empty() || PHONE_RE.is_match(value) {
                None
            } else {
                Some("Please enter a valid phone number.")
            }
        }
        Field::Date => {
            if value.is_empty() {
                return Some("Please select a date.");
            }
            match NaiveDate::parse_from_str(value, DATE_FORMAT) {
                Ok(date) if date < today => Some("Please choose a date from today onward."),
                Ok(_) => None,
                Err(_) => Some("Please enter a valid date."),
            }
        }
        Field::Time => {
            if value.is_empty() {
                Some("Please select a time.")
            } else if value.parse::<TimeSlot>().is_err() {
                Some("Please select a valid time.")
            } else {
                None
            }
        }
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
