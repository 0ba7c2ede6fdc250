use reqwest::Client;

use crate::{
    config,
    error::{ConvertError, Result},
    types::{
        ErrorEnvelope, GetSeveralAlbumsResponse, GetSeveralArtistsResponse,
        GetSeveralTracksResponse, LookupItem,
    },
    uri::UriKind,
};

/// Looks up one batch of identifiers against the kind's collection
/// endpoint.
///
/// Issues exactly one GET to `{api}/{tracks|albums|artists}?ids=a,b,c`
/// with bearer authentication. The response body is read as text before
/// deserializing so an API error envelope can be returned verbatim for
/// diagnosis.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `token` - Bearer token for the run
/// * `kind` - Endpoint selector; also fixes the response shape
/// * `ids` - At most 50 identifiers, the endpoint's batch cap
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Option<LookupItem>>)` - Items in response order; `None`
///   slots are the API's `null` entries for unknown identifiers
/// - `Err(ConvertError)` - Transport failure, an API-reported error
///   (raw body attached), or an undecodable response
///
/// # Error Handling
///
/// No retries: the first failing batch aborts the run, matching the
/// converter's no-partial-recovery contract.
pub async fn get_several(
    client: &Client,
    token: &str,
    kind: UriKind,
    ids: &[String],
) -> Result<Vec<Option<LookupItem>>> {
    let api_url = format!(
        "{uri}/{endpoint}?ids={ids}",
        uri = &config::spotify_apiurl(),
        endpoint = kind.endpoint(),
        ids = ids.join(",")
    );

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let body = response.text().await?;

    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&body) {
        if envelope.error.is_some() {
            return Err(ConvertError::Api(body));
        }
    }

    let items = match kind {
        UriKind::Track => serde_json::from_str::<GetSeveralTracksResponse>(&body)?
            .tracks
            .into_iter()
            .map(|slot| {
                slot.map(|track| LookupItem {
                    name: track.name,
                    artists: track.artists.into_iter().map(|a| a.name).collect(),
                })
            })
            .collect(),
        UriKind::Album => serde_json::from_str::<GetSeveralAlbumsResponse>(&body)?
            .albums
            .into_iter()
            .map(|slot| {
                slot.map(|album| LookupItem {
                    name: album.name,
                    artists: album.artists.into_iter().map(|a| a.name).collect(),
                })
            })
            .collect(),
        UriKind::Artist => serde_json::from_str::<GetSeveralArtistsResponse>(&body)?
            .artists
            .into_iter()
            .map(|slot| {
                slot.map(|artist| LookupItem {
                    name: artist.name,
                    artists: Vec::new(),
                })
            })
            .collect(),
    };

    Ok(items)
}
