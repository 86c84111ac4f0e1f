use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::pet::PetId;
use crate::models::walker::WalkerId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    #[default]
    OneTime,
    Recurring,
}

/// Walk window; wire value is the label shown on the slot button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "8am-10am")]
    EarlyMorning,
    #[serde(rename = "10am-12pm")]
    LateMorning,
    #[serde(rename = "12pm-2pm")]
    Midday,
    #[serde(rename = "2pm-4pm")]
    Afternoon,
    #[default]
    #[serde(rename = "4pm-6pm")]
    LateAfternoon,
    #[serde(rename = "6pm-8pm")]
    Evening,
}

impl TimeSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "8am-10am",
            TimeSlot::LateMorning => "10am-12pm",
            TimeSlot::Midday => "12pm-2pm",
            TimeSlot::Afternoon => "2pm-4pm",
            TimeSlot::LateAfternoon => "4pm-6pm",
            TimeSlot::Evening => "6pm-8pm",
        }
    }
}

/// Booking assembled on the services page and carried to walker selection
/// through session storage (`bookingInfo`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub schedule: Schedule,
    pub pets: Vec<PetId>,
    pub date: String,
    pub time: TimeSlot,
    pub address: String,
}

impl BookingDraft {
    /// Header text of the walkers page
    pub fn summary(&self) -> String {
        format!("{}, {}", self.date, self.time.as_str())
    }
}

/// Body of `POST /api/bookings`: stored draft fields plus the walker.
/// A missing draft sends only `walkerId`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateBookingRequest {
    #[serde(flatten)]
    pub draft: Option<BookingDraft>,
    #[serde(rename = "walkerId")]
    pub walker_id: WalkerId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, alias = "walkerId")]
    pub walker_id: Option<WalkerId>,
    #[serde(default, alias = "walkerName")]
    pub walker_name: Option<String>,
    #[serde(default, alias = "petName")]
    pub pet_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl BookingSummary {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn title(&self) -> String {
        match self.parsed_date() {
            Some(date) => format!("Dog Walking - {}", date.format("%b %-d, %Y")),
            None if self.date.is_empty() => "Dog Walking".to_string(),
            None => format!("Dog Walking - {}", self.date),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BookingsResponse {
    #[serde(default)]
    pub bookings: Vec<BookingSummary>,
}

/// Bookings split for the two tabs of the bookings page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingLists {
    pub upcoming: Vec<BookingSummary>,
    pub past: Vec<BookingSummary>,
}

impl BookingLists {
    /// Today and later are upcoming; undated bookings count as upcoming
    pub fn partition(bookings: Vec<BookingSummary>, today: NaiveDate) -> Self {
        let (upcoming, past): (Vec<_>, Vec<_>) = bookings
            .into_iter()
            .partition(|booking| booking.parsed_date().map_or(true, |date| date >= today));
        Self { upcoming, past }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookingDraft {
        BookingDraft {
            schedule: Schedule::OneTime,
            pets: vec![3, 5],
            date: "2025-10-20".to_string(),
            time: TimeSlot::LateAfternoon,
            address: "12 Elm St".to_string(),
        }
    }

    fn booking(date: &str) -> BookingSummary {
        BookingSummary {
            id: None,
            date: date.to_string(),
            time: None,
            walker_id: None,
            walker_name: None,
            pet_name: None,
            status: None,
        }
    }

    #[test]
    fn draft_serializes_like_booking_info() {
        let json = serde_json::to_value(draft()).unwrap();
        assert_eq!(json["schedule"], "onetime");
        assert_eq!(json["time"], "4pm-6pm");
        assert_eq!(json["pets"], serde_json::json!([3, 5]));
        assert_eq!(json["address"], "12 Elm St");
    }

    #[test]
    fn create_request_flattens_draft() {
        let request = CreateBookingRequest {
            draft: Some(draft()),
            walker_id: 9,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["walkerId"], 9);
        assert_eq!(json["date"], "2025-10-20");
    }

    #[test]
    fn create_request_without_draft_sends_walker_only() {
        let request = CreateBookingRequest {
            draft: None,
            walker_id: 4,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"walkerId": 4}));
    }

    #[test]
    fn partition_splits_on_today() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        let lists = BookingLists::partition(
            vec![booking("2025-10-15"), booking("2025-10-18"), booking("2025-10-20"), booking("soon")],
            today,
        );
        assert_eq!(lists.past.len(), 1);
        assert_eq!(lists.past[0].date, "2025-10-15");
        assert_eq!(lists.upcoming.len(), 3);
    }

    #[test]
    fn title_formats_date() {
        assert_eq!(booking("2025-10-20").title(), "Dog Walking - Oct 20, 2025");
        assert_eq!(booking("").title(), "Dog Walking");
    }
}
