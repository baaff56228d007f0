#![allow(non_snake_case)]

use std::env;

use venueBooker::cli;
use venueBooker::clients::ApiClient;
use venueBooker::config::{AppConfig, DEFAULT_API_BASE};
use venueBooker::session::{default_session_path, SessionStore};

#[tokio::main]
async fn main() {
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let api_base = config.prop_or("API_BASE", DEFAULT_API_BASE);
    let api_key = config
        .prop("API_KEY")
        .expect("API_KEY must be set (config file or environment)");
    let session_path = config
        .prop("SESSION_FILE")
        .unwrap_or_else(default_session_path);

    let api = ApiClient::new(&api_base, &api_key);
    let mut store = SessionStore::hydrate(&session_path);
    cli::cli(api, &mut store).await;
}
