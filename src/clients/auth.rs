use reqwest::Method;

use super::{execute, ApiClient, ApiError};
use crate::models::auth::{LoginData, RegisterData, UserData};
use crate::models::envelope::ItemResponse;

pub async fn login(api: &ApiClient, credentials: &LoginData) -> Result<UserData, ApiError> {
    let response: ItemResponse<UserData> = execute(
        api.request(Method::POST, "/auth/login").json(credentials),
    )
    .await?;
    Ok(response.data)
}

/// Registers the account, then logs it straight in so the caller gets a
/// usable token, matching how the sign-up flow behaves.
pub async fn register(api: &ApiClient, user: &RegisterData) -> Result<UserData, ApiError> {
    let _: ItemResponse<serde_json::Value> =
        execute(api.request(Method::POST, "/auth/register").json(user)).await?;

    login(
        api,
        &LoginData {
            email: user.email.clone(),
            password: user.password.clone(),
        },
    )
    .await
}
