use reqwest::Method;

use super::{execute, execute_no_content, ApiClient, ApiError};
use crate::models::booking::{Booking, CreateBookingData};
use crate::models::envelope::{ItemResponse, ListResponse};

pub async fn create_booking(
    api: &ApiClient,
    token: &str,
    booking: &CreateBookingData,
) -> Result<Booking, ApiError> {
    let response: ItemResponse<Booking> = execute(
        api.authed(Method::POST, "/holidaze/bookings", token)
            .json(booking),
    )
    .await?;
    Ok(response.data)
}

pub async fn cancel_booking(api: &ApiClient, token: &str, id: &str) -> Result<(), ApiError> {
    execute_no_content(api.authed(Method::DELETE, &format!("/holidaze/bookings/{}", id), token))
        .await
}

/// A profile's own bookings, each with its venue attached so the list can
/// show where the stay is.
pub async fn bookings_by_profile(
    api: &ApiClient,
    token: &str,
    profile_name: &str,
) -> Result<ListResponse<Booking>, ApiError> {
    execute(
        api.authed(
            Method::GET,
            &format!("/holidaze/profiles/{}/bookings", profile_name),
            token,
        )
        .query(&[("_venue", "true")]),
    )
    .await
}
