use std::str::FromStr;

use spuricli::uri::{ParsedUri, UriKind, parse};

// Helper to build the expected remote variant
fn remote(kind: Option<UriKind>, id: &str) -> ParsedUri {
    ParsedUri::Remote {
        kind,
        id: id.to_string(),
    }
}

fn local(artist: Option<&str>, title: &str) -> ParsedUri {
    ParsedUri::Local(spuricli::uri::LocalUri {
        artist: artist.map(|a| a.to_string()),
        title: title.to_string(),
    })
}

#[test]
fn test_parse_spotify_scheme_track() {
    let parsed = parse("spotify:track:4uLU6hMCjMI75M1A2tKUQC").unwrap();
    assert_eq!(
        parsed,
        remote(Some(UriKind::Track), "4uLU6hMCjMI75M1A2tKUQC")
    );
}

#[test]
fn test_parse_spotify_scheme_album_and_artist() {
    let album = parse("spotify:album:6dVIqQ8qmQ5GBnJ9shOYGE").unwrap();
    assert_eq!(album, remote(Some(UriKind::Album), "6dVIqQ8qmQ5GBnJ9shOYGE"));

    let artist = parse("spotify:artist:0k17h0D3J5VfsdmQ1iZtE9").unwrap();
    assert_eq!(
        artist,
        remote(Some(UriKind::Artist), "0k17h0D3J5VfsdmQ1iZtE9")
    );
}

#[test]
fn test_parse_web_url() {
    let parsed = parse("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC").unwrap();
    assert_eq!(
        parsed,
        remote(Some(UriKind::Track), "4uLU6hMCjMI75M1A2tKUQC")
    );

    // Plain http is accepted as well
    let parsed = parse("http://open.spotify.com/album/6dVIqQ8qmQ5GBnJ9shOYGE").unwrap();
    assert_eq!(parsed, remote(Some(UriKind::Album), "6dVIqQ8qmQ5GBnJ9shOYGE"));
}

#[test]
fn test_parse_strips_query_string() {
    let parsed = parse("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123&nd=1").unwrap();
    assert_eq!(
        parsed,
        remote(Some(UriKind::Track), "4uLU6hMCjMI75M1A2tKUQC")
    );
}

#[test]
fn test_parse_bare_identifier() {
    // No textual form to infer a kind from
    let parsed = parse("4uLU6hMCjMI75M1A2tKUQC").unwrap();
    assert_eq!(parsed, remote(None, "4uLU6hMCjMI75M1A2tKUQC"));
}

#[test]
fn test_parse_trims_surrounding_whitespace() {
    let parsed = parse("  spotify:track:4uLU6hMCjMI75M1A2tKUQC\r").unwrap();
    assert_eq!(
        parsed,
        remote(Some(UriKind::Track), "4uLU6hMCjMI75M1A2tKUQC")
    );
}

#[test]
fn test_parse_rejects_invalid_shapes() {
    // Non-alphanumeric identifier
    assert!(parse("spotify:track:not-an-id!").is_err());

    // Unknown kind segment
    assert!(parse("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").is_err());

    // Missing identifier
    assert!(parse("spotify:track").is_err());
    assert!(parse("spotify:").is_err());

    // Free text
    assert!(parse("what is this").is_err());
}

#[test]
fn test_local_colon_form() {
    let parsed = parse("spotify:local:Pink+Floyd::Money:123").unwrap();
    assert_eq!(parsed, local(Some("Pink Floyd"), "Money"));
}

#[test]
fn test_local_without_artist() {
    let parsed = parse("spotify:local:::Money:123").unwrap();
    assert_eq!(parsed, local(None, "Money"));
}

#[test]
fn test_local_three_segment_form() {
    // artist:title:duration, no album segment
    let parsed = parse("spotify:local:Aphex+Twin:Avril+14th:122").unwrap();
    assert_eq!(parsed, local(Some("Aphex Twin"), "Avril 14th"));
}

#[test]
fn test_local_slash_form() {
    let parsed = parse("https://open.spotify.com/local/Pink+Floyd//Money/123").unwrap();
    assert_eq!(parsed, local(Some("Pink Floyd"), "Money"));
}

#[test]
fn test_local_percent_decoding() {
    let parsed = parse("spotify:local:Sigur+R%C3%B3s::Hoppípolla:271").unwrap();
    assert_eq!(parsed, local(Some("Sigur Rós"), "Hoppípolla"));
}

#[test]
fn test_local_too_few_segments_rejected() {
    assert!(parse("spotify:local:Money").is_err());
    assert!(parse("spotify:local:Money:123").is_err());
}

#[test]
fn test_kind_from_str() {
    assert_eq!(UriKind::from_str("track").unwrap(), UriKind::Track);
    assert_eq!(UriKind::from_str("album").unwrap(), UriKind::Album);
    assert_eq!(UriKind::from_str("artist").unwrap(), UriKind::Artist);

    // Configuration parsing is forgiving about case and whitespace
    assert_eq!(UriKind::from_str(" Album ").unwrap(), UriKind::Album);

    assert!(UriKind::from_str("playlist").is_err());
    assert!(UriKind::from_str("").is_err());
}

#[test]
fn test_kind_display() {
    assert_eq!(UriKind::Track.to_string(), "track");
    assert_eq!(UriKind::Album.to_string(), "album");
    assert_eq!(UriKind::Artist.to_string(), "artist");
}

#[test]
fn test_kind_all_constant() {
    assert_eq!(UriKind::ALL.len(), 3);
    assert!(UriKind::ALL.contains(&UriKind::Track));
    assert!(UriKind::ALL.contains(&UriKind::Album));
    assert!(UriKind::ALL.contains(&UriKind::Artist));
}

#[test]
fn test_exit_codes() {
    // Bad configuration value is a usage error (exit 3)
    let err = UriKind::from_str("playlist").unwrap_err();
    assert_eq!(err.exit_code(), 3);

    // Bad input URI is a validation error (exit 1)
    let err = parse("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").unwrap_err();
    assert_eq!(err.exit_code(), 1);
}
