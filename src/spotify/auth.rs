use reqwest::Client;

use crate::{
    config,
    error::{ConvertError, Result},
    info,
    types::Token,
};

/// Obtains the bearer token for this run.
///
/// A token supplied via `SPOTIFY_ACCESS_TOKEN` is used as-is. Otherwise a
/// single OAuth 2.0 client-credentials exchange is performed against the
/// token endpoint, with the application credentials carried in HTTP basic
/// auth as the Accounts service expects.
///
/// # Arguments
///
/// * `client` - Shared HTTP client, already configured with any
///   pass-through options
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - Bearer token usable for every batch in the run
/// - `Err(ConvertError)` - Missing credentials, transport failure, or a
///   rejection from the token endpoint
///
/// # Token Lifecycle
///
/// The caller fetches this once, lazily, before the first batch lookup
/// and reuses it for the whole run. Client-credentials tokens cannot be
/// refreshed; a run long enough to outlive one is not a supported case.
///
/// # Example
///
/// ```
/// let client = Client::new();
/// let token = access_token(&client).await?;
/// ```
pub async fn access_token(client: &Client) -> Result<String> {
    if let Some(token) = config::access_token() {
        return Ok(token);
    }

    let client_id = config::spotify_client_id()
        .ok_or_else(|| ConvertError::Auth("SPOTIFY_CLIENT_ID not set".to_string()))?;
    let client_secret = config::spotify_client_secret()
        .ok_or_else(|| ConvertError::Auth("SPOTIFY_CLIENT_SECRET not set".to_string()))?;

    info!("No SPOTIFY_ACCESS_TOKEN set, requesting one with client credentials");

    let res = client
        .post(&config::spotify_apitoken_url())
        .basic_auth(&client_id, Some(&client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    if !res.status().is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ConvertError::Auth(format!(
            "token endpoint refused the request: {}",
            body
        )));
    }

    let token: Token = res.json().await?;
    Ok(token.access_token)
}
