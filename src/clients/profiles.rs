use reqwest::Method;

use super::{execute, ApiClient, ApiError};
use crate::models::envelope::{ItemResponse, ListResponse};
use crate::models::profile::{Profile, UpdateProfileData};
use crate::models::venue::Venue;

pub async fn fetch_profile(
    api: &ApiClient,
    token: &str,
    name: &str,
) -> Result<Profile, ApiError> {
    let response: ItemResponse<Profile> = execute(api.authed(
        Method::GET,
        &format!("/holidaze/profiles/{}", name),
        token,
    ))
    .await?;
    Ok(response.data)
}

pub async fn update_profile(
    api: &ApiClient,
    token: &str,
    name: &str,
    update: &UpdateProfileData,
) -> Result<Profile, ApiError> {
    let response: ItemResponse<Profile> = execute(
        api.authed(Method::PUT, &format!("/holidaze/profiles/{}", name), token)
            .json(update),
    )
    .await?;
    Ok(response.data)
}

pub async fn search_profiles(
    api: &ApiClient,
    token: &str,
    query: &str,
) -> Result<ListResponse<Profile>, ApiError> {
    execute(
        api.authed(Method::GET, "/holidaze/profiles/search", token)
            .query(&[("q", query)]),
    )
    .await
}

/// Venues owned by a profile; the manager dashboard lists these.
pub async fn venues_by_profile(
    api: &ApiClient,
    token: &str,
    name: &str,
) -> Result<ListResponse<Venue>, ApiError> {
    execute(
        api.authed(
            Method::GET,
            &format!("/holidaze/profiles/{}/venues", name),
            token,
        )
        .query(&[("_bookings", "true")]),
    )
    .await
}
