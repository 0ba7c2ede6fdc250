use std::fmt;
use std::str::FromStr;

use crate::error::{ConvertError, Result};

/// Category of a remote Spotify reference. Governs which API endpoint is
/// queried and how result lines are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UriKind {
    #[default]
    Track,
    Album,
    Artist,
}

impl UriKind {
    pub const ALL: [UriKind; 3] = [UriKind::Track, UriKind::Album, UriKind::Artist];

    /// Collection endpoint segment; doubles as the key of the item array
    /// in the batch response.
    pub fn endpoint(&self) -> &'static str {
        match self {
            UriKind::Track => "tracks",
            UriKind::Album => "albums",
            UriKind::Artist => "artists",
        }
    }
}

impl fmt::Display for UriKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UriKind::Track => "track",
            UriKind::Album => "album",
            UriKind::Artist => "artist",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for UriKind {
    type Err = ConvertError;

    /// Parses a configured kind name. Case-insensitive; a bad value is a
    /// usage error since this only runs on configuration input.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "track" => Ok(UriKind::Track),
            "album" => Ok(UriKind::Album),
            "artist" => Ok(UriKind::Artist),
            other => {
                let expected = UriKind::ALL.map(|k| k.to_string()).join(", ");
                Err(ConvertError::Usage(format!(
                    "invalid URI kind '{}', expected one of: {}",
                    other, expected
                )))
            }
        }
    }
}

/// Artist/title metadata carried literally inside a local URI. Never
/// looked up remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalUri {
    pub artist: Option<String>,
    pub title: String,
}

/// One classified input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedUri {
    Local(LocalUri),
    /// `kind` is `None` for bare identifiers, which carry no textual form
    /// to infer from.
    Remote { kind: Option<UriKind>, id: String },
}

/// Classifies one input line as a local or remote URI.
///
/// Accepted remote shapes: `spotify:<kind>:<id>`,
/// `https?://open.spotify.com/<kind>/<id>` and bare alphanumeric
/// identifiers, each optionally followed by a query string. Local shapes:
/// `spotify:local:<body>` (colon-delimited) and
/// `https?://open.spotify.com/local/<body>` (slash-delimited).
pub fn parse(line: &str) -> Result<ParsedUri> {
    let token = line.trim();

    if let Some(body) = token.strip_prefix("spotify:local:") {
        return decode_local(strip_query(body), ':').map(ParsedUri::Local);
    }

    if let Some(rest) = strip_web_prefix(token) {
        if let Some(body) = rest.strip_prefix("local/") {
            return decode_local(strip_query(body), '/').map(ParsedUri::Local);
        }
        return parse_remote(token, rest, '/');
    }

    if let Some(rest) = token.strip_prefix("spotify:") {
        return parse_remote(token, rest, ':');
    }

    let id = strip_query(token);
    validate_id(id, token)?;
    Ok(ParsedUri::Remote {
        kind: None,
        id: id.to_string(),
    })
}

fn parse_remote(token: &str, rest: &str, delim: char) -> Result<ParsedUri> {
    let mut parts = rest.splitn(2, delim);
    let kind_str = parts.next().unwrap_or_default();
    let id_part = parts
        .next()
        .ok_or_else(|| ConvertError::InvalidUri(token.to_string()))?;

    let kind = kind_from_token(kind_str).ok_or_else(|| ConvertError::InvalidUri(token.to_string()))?;

    let id = strip_query(id_part);
    validate_id(id, token)?;

    Ok(ParsedUri::Remote {
        kind: Some(kind),
        id: id.to_string(),
    })
}

/// Kind names as they appear inside URIs. Exact-match, unlike the
/// configuration parser.
fn kind_from_token(s: &str) -> Option<UriKind> {
    match s {
        "track" => Some(UriKind::Track),
        "album" => Some(UriKind::Album),
        "artist" => Some(UriKind::Artist),
        _ => None,
    }
}

fn strip_web_prefix(token: &str) -> Option<&str> {
    let rest = token
        .strip_prefix("https://")
        .or_else(|| token.strip_prefix("http://"))?;
    rest.strip_prefix("open.spotify.com/")
}

fn strip_query(s: &str) -> &str {
    match s.split_once('?') {
        Some((before, _)) => before,
        None => s,
    }
}

fn validate_id(id: &str, token: &str) -> Result<()> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConvertError::InvalidUri(token.to_string()));
    }
    Ok(())
}

/// Decodes the body of a local URI.
///
/// Bodies carry artist/[album]/title/duration segments; the artist is the
/// first and the title the second-to-last, so both the three- and
/// four-segment forms decode the same way. Spaces arrive as literal `+`
/// before percent-decoding.
fn decode_local(body: &str, delim: char) -> Result<LocalUri> {
    let segments: Vec<&str> = body.split(delim).collect();
    if segments.len() < 3 {
        return Err(ConvertError::LocalFormat(body.to_string()));
    }

    let artist = decode_segment(segments[0])?;
    let title = decode_segment(segments[segments.len() - 2])?;

    Ok(LocalUri {
        artist: if artist.is_empty() { None } else { Some(artist) },
        title,
    })
}

fn decode_segment(seg: &str) -> Result<String> {
    let spaced = seg.replace('+', " ");
    let decoded = urlencoding::decode(&spaced)
        .map_err(|_| ConvertError::LocalFormat(seg.to_string()))?;
    Ok(decoded.into_owned())
}
