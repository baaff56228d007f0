use reqwest::Method;

use super::{execute, execute_no_content, ApiClient, ApiError};
use crate::models::envelope::{ItemResponse, ListResponse};
use crate::models::venue::{Venue, VenueInput};

#[derive(Debug, Clone)]
pub struct FetchVenuesParams {
    pub limit: u32,
    pub page: u32,
    pub sort: String,
    pub sort_order: String,
}

impl Default for FetchVenuesParams {
    fn default() -> Self {
        Self {
            limit: 9,
            page: 1,
            sort: "name".to_string(),
            sort_order: "asc".to_string(),
        }
    }
}

pub async fn fetch_venues(
    api: &ApiClient,
    params: &FetchVenuesParams,
) -> Result<ListResponse<Venue>, ApiError> {
    execute(api.request(Method::GET, "/holidaze/venues").query(&[
        ("limit", params.limit.to_string()),
        ("page", params.page.to_string()),
        ("sort", params.sort.clone()),
        ("sortOrder", params.sort_order.clone()),
    ]))
    .await
}

/// Single venue with owner and bookings included; the detail and booking
/// flows need both.
pub async fn fetch_venue_by_id(api: &ApiClient, id: &str) -> Result<Venue, ApiError> {
    let response: ItemResponse<Venue> = execute(
        api.request(Method::GET, &format!("/holidaze/venues/{}", id))
            .query(&[("_owner", "true"), ("_bookings", "true")]),
    )
    .await?;
    Ok(response.data)
}

pub async fn search_venues(api: &ApiClient, query: &str) -> Result<ListResponse<Venue>, ApiError> {
    execute(
        api.request(Method::GET, "/holidaze/venues/search")
            .query(&[("q", query)]),
    )
    .await
}

pub async fn create_venue(
    api: &ApiClient,
    token: &str,
    venue: &VenueInput,
) -> Result<Venue, ApiError> {
    let response: ItemResponse<Venue> = execute(
        api.authed(Method::POST, "/holidaze/venues", token).json(venue),
    )
    .await?;
    Ok(response.data)
}

pub async fn update_venue(
    api: &ApiClient,
    token: &str,
    id: &str,
    venue: &VenueInput,
) -> Result<Venue, ApiError> {
    let response: ItemResponse<Venue> = execute(
        api.authed(Method::PUT, &format!("/holidaze/venues/{}", id), token)
            .json(venue),
    )
    .await?;
    Ok(response.data)
}

pub async fn delete_venue(api: &ApiClient, token: &str, id: &str) -> Result<(), ApiError> {
    execute_no_content(api.authed(Method::DELETE, &format!("/holidaze/venues/{}", id), token)).await
}
