use serde::{Deserialize, Serialize};

use super::venue::Media;

#[derive(Debug, Clone, Serialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_manager: Option<bool>,
}

/// What /auth/login returns: the user record plus the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub avatar: Option<Media>,
    pub banner: Option<Media>,
    pub access_token: String,
    #[serde(default)]
    pub venue_manager: bool,
}
