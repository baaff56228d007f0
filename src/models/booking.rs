use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::venue::Venue;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub date_from: String,
    pub date_to: String,
    pub guests: u32,
    pub created: String,
    pub updated: String,
    // Present only when fetched with _venue=true.
    pub venue: Option<Venue>,
}

/// Payload for POST /holidaze/bookings. Dates are plain calendar days,
/// serialized as YYYY-MM-DD.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingData {
    pub date_from: String,
    pub date_to: String,
    pub guests: u32,
    pub venue_id: String,
}

/// Narrows a wire date to a calendar day. The API serves RFC3339
/// datetimes on stored bookings but accepts plain dates on creation, so
/// both forms are taken; time-of-day and offset are discarded. Feeding a
/// day already in YYYY-MM-DD form back through is a no-op.
pub fn calendar_day(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(day);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|e| format!("Unrecognized date {:?}: {}", raw, e))
}
