use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::auth::UserData;
use crate::models::venue::Media;

// Returns where the signed-in session is persisted.
// Defaults to a relative "./data/session.json" file.
pub fn default_session_path() -> String {
    if let Ok(path) = env::var("SESSION_FILE") {
        return path;
    }
    let base = env::var("DATA_LOCATION").unwrap_or("./data".to_string());
    format!("{}/session.json", base)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub venue_manager: bool,
    pub avatar: Option<Media>,
    pub banner: Option<Media>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    user: Option<AuthUser>,
    access_token: Option<String>,
}

/// Client-side session state, passed explicitly to whatever needs it.
/// Hydrated from disk exactly once at startup; logout clears both memory
/// and the file.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    session: PersistedSession,
}

impl SessionStore {
    /// The single hydration entry point. A missing or unreadable file
    /// yields a signed-out session rather than an error.
    pub fn hydrate(path: &str) -> Self {
        let session = fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self {
            path: PathBuf::from(path),
            session,
        }
    }

    pub fn set_auth(&mut self, user_data: UserData) -> Result<(), String> {
        self.session.access_token = Some(user_data.access_token.clone());
        self.session.user = Some(AuthUser {
            name: user_data.name,
            email: user_data.email,
            venue_manager: user_data.venue_manager,
            avatar: user_data.avatar,
            banner: user_data.banner,
        });
        self.save()
    }

    pub fn clear(&mut self) -> Result<(), String> {
        self.session = PersistedSession::default();
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.session.access_token.as_deref()
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.access_token.is_some()
    }

    fn save(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let content = serde_json::to_string_pretty(&self.session).map_err(|e| e.to_string())?;
        fs::write(&self.path, content).map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardError {
    NotLoggedIn,
    NotManager,
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            GuardError::NotLoggedIn => "You must be logged in for this. Run the login command first.",
            GuardError::NotManager => "This requires a venue manager account.",
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for GuardError {}

/// Gate for commands that need a signed-in user.
pub fn require_auth(store: &SessionStore) -> Result<(&AuthUser, &str), GuardError> {
    match (store.user(), store.token()) {
        (Some(user), Some(token)) => Ok((user, token)),
        _ => Err(GuardError::NotLoggedIn),
    }
}

/// Gate for manager-only commands; a signed-in non-manager is refused
/// differently from a signed-out user.
pub fn require_manager(store: &SessionStore) -> Result<(&AuthUser, &str), GuardError> {
    let (user, token) = require_auth(store)?;
    if !user.venue_manager {
        return Err(GuardError::NotManager);
    }
    Ok((user, token))
}
