use serde::Deserialize;

/// Single-item `{ data, meta }` envelope. `meta` is an empty object on
/// these responses, so it is kept loose instead of typed.
#[derive(Debug, Deserialize)]
pub struct ItemResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: serde_json::Value,
}

/// List `{ data, meta }` envelope with pagination info.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub current_page: u32,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
    pub page_count: u32,
    pub total_count: u64,
}

/// Error body the API sends on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEntry {
    pub message: String,
}

impl ErrorEnvelope {
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}
