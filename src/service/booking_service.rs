use std::collections::BTreeSet;
use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::clients::{self, ApiClient, ApiError};
use crate::models::booking::{calendar_day, Booking, CreateBookingData};
use crate::models::venue::Venue;
use crate::service::availability::{
    unavailable_days, validate_proposed_stay, BookingRange, ProposedStay, StayRejection,
    StayValidation, VenueConstraints,
};
use crate::session::{require_auth, SessionStore};

#[async_trait]
pub trait VenueDirectory: Send + Sync {
    /// Fetch one venue with owner and bookings attached.
    async fn venue_with_bookings(&self, id: &str) -> Result<Venue, ApiError>;
}

#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn create_booking(
        &self,
        token: &str,
        booking: &CreateBookingData,
    ) -> Result<Booking, ApiError>;
}

#[async_trait]
impl VenueDirectory for ApiClient {
    async fn venue_with_bookings(&self, id: &str) -> Result<Venue, ApiError> {
        clients::venues::fetch_venue_by_id(self, id).await
    }
}

#[async_trait]
impl BookingGateway for ApiClient {
    async fn create_booking(
        &self,
        token: &str,
        booking: &CreateBookingData,
    ) -> Result<Booking, ApiError> {
        clients::bookings::create_booking(self, token, booking).await
    }
}

#[derive(Debug)]
pub enum ReserveError {
    NotLoggedIn,
    OwnVenue,
    Rejected(StayRejection),
    /// A booking on the venue carried a date we could not read. The
    /// unavailable set would be partial, so nothing is submitted.
    BadVenueData(String),
    Api(ApiError),
}

impl fmt::Display for ReserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReserveError::NotLoggedIn => {
                write!(f, "You must be logged in to make a booking")
            }
            ReserveError::OwnVenue => write!(f, "You cannot book your own venue"),
            ReserveError::Rejected(reason) => write!(f, "{}", reason),
            ReserveError::BadVenueData(detail) => {
                write!(f, "Venue booking data could not be read: {}", detail)
            }
            ReserveError::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ReserveError {}

impl From<ApiError> for ReserveError {
    fn from(err: ApiError) -> Self {
        ReserveError::Api(err)
    }
}

/// Narrows the embedded wire bookings to calendar-day ranges. A range
/// that fails to parse is an error, not silently dropped; a partial set
/// must never pass for the real one.
pub fn booking_ranges(venue: &Venue) -> Result<Vec<BookingRange>, String> {
    venue
        .bookings
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|b| {
            Ok(BookingRange {
                date_from: calendar_day(&b.date_from)?,
                date_to: calendar_day(&b.date_to)?,
                guests: b.guests,
            })
        })
        .collect()
}

pub fn constraints_of(venue: &Venue) -> VenueConstraints {
    VenueConstraints {
        max_guests: venue.max_guests,
        price: venue.price,
    }
}

pub struct BookingService;

impl BookingService {
    /// Fetches a venue and derives its unavailable-day set. Recomputed on
    /// every call; nothing is cached across fetches.
    pub async fn availability<D: VenueDirectory + ?Sized>(
        directory: &D,
        venue_id: &str,
    ) -> Result<(Venue, BTreeSet<NaiveDate>), ReserveError> {
        let venue = directory.venue_with_bookings(venue_id).await?;
        let ranges = booking_ranges(&venue).map_err(ReserveError::BadVenueData)?;
        let unavailable = unavailable_days(&ranges);
        Ok((venue, unavailable))
    }

    /// The full booking flow: auth, own-venue refusal, fresh availability,
    /// local validation, then submission. The local check only catches
    /// conflicts known at fetch time; the server runs the authoritative
    /// overlap check and its rejection is passed through verbatim.
    pub async fn reserve<D, G>(
        directory: &D,
        gateway: &G,
        store: &SessionStore,
        venue_id: &str,
        stay: &ProposedStay,
        today: NaiveDate,
    ) -> Result<Booking, ReserveError>
    where
        D: VenueDirectory + ?Sized,
        G: BookingGateway + ?Sized,
    {
        let (user, token) = require_auth(store).map_err(|_| ReserveError::NotLoggedIn)?;

        let (venue, unavailable) = Self::availability(directory, venue_id).await?;

        if let Some(owner) = &venue.owner {
            if user.venue_manager && owner.email == user.email {
                return Err(ReserveError::OwnVenue);
            }
        }

        match validate_proposed_stay(stay, &unavailable, &constraints_of(&venue), today) {
            StayValidation::Invalid(reason) => return Err(ReserveError::Rejected(reason)),
            StayValidation::Valid => {}
        }

        let payload = CreateBookingData {
            date_from: stay.check_in.format("%Y-%m-%d").to_string(),
            date_to: stay.check_out.format("%Y-%m-%d").to_string(),
            guests: stay.guests,
            venue_id: venue_id.to_string(),
        };
        gateway
            .create_booking(token, &payload)
            .await
            .map_err(ReserveError::Api)
    }
}
