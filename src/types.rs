use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Normalized batch-lookup item, shared across the three endpoint shapes.
/// `None` slots in a response mirror the API's `null` entries for unknown
/// identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupItem {
    pub name: String,
    pub artists: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<ItemArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artists: Vec<ItemArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralTracksResponse {
    pub tracks: Vec<Option<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralAlbumsResponse {
    pub albums: Vec<Option<Album>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralArtistsResponse {
    pub artists: Vec<Option<Artist>>,
}

/// Top-level envelope the Web API wraps failures in. Any response whose
/// `error` field is present and non-null aborts the run.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<serde_json::Value>,
}
