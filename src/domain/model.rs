use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 有驗證狀態的表單欄位；人數從固定選項挑選，不會驗證失敗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Date,
    Time,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Date,
        Field::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Date => "date",
            Field::Time => "time",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 用餐人數 1 到 8 位，更多人請直接打電話給餐廳
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Guests(u8);

impl Guests {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(count: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&count).then_some(Self(count))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// 下拉選單的所有選項
    pub fn options() -> impl Iterator<Item = Guests> {
        (Self::MIN..=Self::MAX).map(Guests)
    }

    pub fn label(&self) -> String {
        if self.0 == 1 {
            "1 Guest".to_string()
        } else {
            format!("{} Guests", self.0)
        }
    }
}

impl Default for Guests {
    fn default() -> Self {
        Guests(2)
    }
}

impl TryFrom<u8> for Guests {
    type Error = String;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Guests::new(count).ok_or_else(|| {
            format!(
                "guest count must be between {} and {}, got {}",
                Guests::MIN,
                Guests::MAX,
                count
            )
        })
    }
}

impl From<Guests> for u8 {
    fn from(guests: Guests) -> Self {
        guests.0
    }
}

/// 可預約的整點時段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u32,
}

impl TimeSlot {
    pub fn new(hour: u32) -> Option<Self> {
        (hour < 24).then_some(Self { hour })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let display_hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:00 {}", display_hour, suffix)
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    /// 接受顯示用標籤 ("5:00 PM") 或 24 小時制 "17:00"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("not a whole-hour time slot: {:?}", s);
        let trimmed = s.trim();

        let (clock, suffix) = match trimmed.rsplit_once(' ') {
            Some((clock, suffix)) => (clock.trim(), Some(suffix.to_ascii_uppercase())),
            None => (trimmed, None),
        };

        let (hour_text, minute_text) = clock.split_once(':').ok_or_else(invalid)?;
        // u32::from_str 會吃掉開頭的 '+'，先擋下非數字
        if minute_text != "00"
            || hour_text.is_empty()
            || !hour_text.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let hour: u32 = hour_text.parse().map_err(|_| invalid())?;

        let hour = match suffix.as_deref() {
            Some("AM") if (1..=12).contains(&hour) => hour % 12,
            Some("PM") if (1..=12).contains(&hour) => hour % 12 + 12,
            Some(_) => return Err(invalid()),
            None => hour,
        };

        TimeSlot::new(hour).ok_or_else(invalid)
    }
}

/// 一次表單填寫的原始輸入值
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// "YYYY-MM-DD"
    pub date: String,
    /// 選擇的時段標籤，例如 "5:00 PM"
    pub time: String,
    pub guests: Guests,
    pub newsletter_signup: bool,
}

impl ReservationRequest {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Date => &self.date,
            Field::Time => &self.time,
        }
    }

    pub(crate) fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub date: Option<&'static str>,
    pub time: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone,
            Field::Date => self.date,
            Field::Time => self.time,
        }
    }

    pub fn set(&mut self, field: Field, error: Option<&'static str>) {
        match field {
            Field::Name => self.name = error,
            Field::Email => self.email = error,
            Field::Phone => self.phone = error,
            Field::Date => self.date = error,
            Field::Time => self.time = error,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchedSet {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
    pub date: bool,
    pub time: bool,
}

impl TouchedSet {
    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone,
            Field::Date => self.date,
            Field::Time => self.time,
        }
    }

    pub fn insert(&mut self, field: Field) {
        match field {
            Field::Name => self.name = true,
            Field::Email => self.email = true,
            Field::Phone => self.phone = true,
            Field::Date => self.date = true,
            Field::Time => self.time = true,
        }
    }
}

/// `POST /reservations` 的 request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationPayload {
    pub customer_name: String,
    pub customer_email: String,
    pub phone_number: String,
    pub newsletter_signup: bool,
    /// UTC 時間點，RFC 3339 含毫秒 ("2026-10-20T21:00:00.000Z")
    pub time_slot: String,
    pub guests: Guests,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,
}
