use std::fmt;

use crate::clients::{self, ApiClient, ApiError};
use crate::models::venue::{Venue, VenueBooking, VenueInput};
use crate::session::{require_manager, GuardError, SessionStore};

#[derive(Debug)]
pub enum ManageError {
    Guard(GuardError),
    /// The venue exists but belongs to someone else.
    NotOwner,
    Api(ApiError),
}

impl fmt::Display for ManageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManageError::Guard(err) => write!(f, "{}", err),
            ManageError::NotOwner => write!(f, "You can only manage venues you own"),
            ManageError::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ManageError {}

impl From<GuardError> for ManageError {
    fn from(err: GuardError) -> Self {
        ManageError::Guard(err)
    }
}

impl From<ApiError> for ManageError {
    fn from(err: ApiError) -> Self {
        ManageError::Api(err)
    }
}

/// Manager-side listing operations. Ownership is ultimately enforced
/// server-side; the client guards are there to fail early with a clear
/// message.
pub struct VenueService;

impl VenueService {
    pub async fn my_venues(api: &ApiClient, store: &SessionStore) -> Result<Vec<Venue>, ManageError> {
        let (user, token) = require_manager(store)?;
        let response = clients::profiles::venues_by_profile(api, token, &user.name).await?;
        Ok(response.data)
    }

    pub async fn create(
        api: &ApiClient,
        store: &SessionStore,
        input: &VenueInput,
    ) -> Result<Venue, ManageError> {
        let (_, token) = require_manager(store)?;
        Ok(clients::venues::create_venue(api, token, input).await?)
    }

    pub async fn update(
        api: &ApiClient,
        store: &SessionStore,
        venue_id: &str,
        input: &VenueInput,
    ) -> Result<Venue, ManageError> {
        let (_, token) = require_manager(store)?;
        Ok(clients::venues::update_venue(api, token, venue_id, input).await?)
    }

    pub async fn delete(
        api: &ApiClient,
        store: &SessionStore,
        venue_id: &str,
    ) -> Result<(), ManageError> {
        let (_, token) = require_manager(store)?;
        Ok(clients::venues::delete_venue(api, token, venue_id).await?)
    }

    /// Bookings placed on one of the manager's own venues.
    pub async fn venue_bookings(
        api: &ApiClient,
        store: &SessionStore,
        venue_id: &str,
    ) -> Result<(Venue, Vec<VenueBooking>), ManageError> {
        let (user, _) = require_manager(store)?;
        let venue = clients::venues::fetch_venue_by_id(api, venue_id).await?;
        let owned = venue
            .owner
            .as_ref()
            .is_some_and(|owner| owner.email == user.email);
        if !owned {
            return Err(ManageError::NotOwner);
        }
        let bookings = venue.bookings.clone().unwrap_or_default();
        Ok((venue, bookings))
    }
}
