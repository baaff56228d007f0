use serde::{Deserialize, Serialize};

use super::venue::Media;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<Media>,
    pub banner: Option<Media>,
    #[serde(default)]
    pub venue_manager: bool,
    #[serde(rename = "_count")]
    pub count: Option<ProfileCount>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProfileCount {
    #[serde(default)]
    pub venues: u32,
    #[serde(default)]
    pub bookings: u32,
}

/// Payload for PUT /holidaze/profiles/{name}; every field optional, only
/// what is present gets updated.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_manager: Option<bool>,
}
