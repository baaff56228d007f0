use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Location {
    /// "address, city, country" with absent parts skipped.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.address, &self.city, &self.country]
            .into_iter()
            .flatten()
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VenueMeta {
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub breakfast: bool,
    #[serde(default)]
    pub pets: bool,
}

impl VenueMeta {
    pub fn amenities(&self) -> Vec<&'static str> {
        let mut list = Vec::new();
        if self.wifi {
            list.push("WiFi");
        }
        if self.parking {
            list.push("Parking");
        }
        if self.breakfast {
            list.push("Breakfast");
        }
        if self.pets {
            list.push("Pets Allowed");
        }
        list
    }
}

/// Present only when a venue is fetched with `_owner=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueOwner {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<Media>,
}

/// Booking record embedded in a venue fetched with `_bookings=true`.
/// Dates stay raw strings here; `models::booking::calendar_day` narrows
/// them before any availability math.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueBooking {
    pub id: String,
    pub date_from: String,
    pub date_to: String,
    pub guests: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media: Vec<Media>,
    pub price: f64,
    pub max_guests: u32,
    #[serde(default)]
    pub rating: f64,
    pub created: String,
    pub updated: String,
    #[serde(default)]
    pub meta: VenueMeta,
    #[serde(default)]
    pub location: Location,
    // Only populated when requested with query flags; never shape-sniffed.
    pub owner: Option<VenueOwner>,
    pub bookings: Option<Vec<VenueBooking>>,
}

/// Payload for POST /holidaze/venues and PUT /holidaze/venues/{id}.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueInput {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<Media>,
    pub price: f64,
    pub max_guests: u32,
    pub meta: VenueMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}
