use crate::core::TimeSlot;
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Weekday};
use chrono_tz::Tz;

/// 單一星期幾的營業時間。最後可訂時段早於打烊時間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    pub first_slot: u32,
    pub last_slot: u32,
    pub closes: u32,
}

impl OperatingHours {
    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> {
        (self.first_slot..=self.last_slot).filter_map(TimeSlot::new)
    }
}

pub fn operating_hours(weekday: Weekday) -> OperatingHours {
    match weekday {
        Weekday::Sun => OperatingHours {
            first_slot: 17,
            last_slot: 20,
            closes: 21,
        },
        _ => OperatingHours {
            first_slot: 17,
            last_slot: 22,
            closes: 23,
        },
    }
}

/// 在 `now` 這個時間點，`date` 可以提供的時段
///
/// 過去的日期沒有時段。今天只保留大於 `now.hour() + 1` 的整點，
/// 也就是至少提前一小時（分鐘直接捨去，不進位）
pub fn available_slots(date: NaiveDate, now: DateTime<Tz>) -> Vec<TimeSlot> {
    let today = now.date_naive();
    if date < today {
        return Vec::new();
    }

    let hours = operating_hours(date.weekday());
    if date == today {
        let cutoff = now.hour() + 1;
        hours.slots().filter(|slot| slot.hour() > cutoff).collect()
    } else {
        hours.slots().collect()
    }
}
