use spuricli::convert::{BATCH_LIMIT, Converter, Step};
use spuricli::types::LookupItem;
use spuricli::uri::UriKind;
use spuricli::utils;

// Helper function to create a lookup item
fn item(name: &str, artists: &[&str]) -> LookupItem {
    LookupItem {
        name: name.to_string(),
        artists: artists.iter().map(|a| a.to_string()).collect(),
    }
}

#[test]
fn test_kind_inferred_from_first_uri() {
    let mut converter = Converter::new(None, false);
    converter.accept("spotify:album:6dVIqQ8qmQ5GBnJ9shOYGE").unwrap();
    assert_eq!(converter.kind(), UriKind::Album);

    // A later URI of another kind must be rejected
    let err = converter.accept("spotify:track:4uLU6hMCjMI75M1A2tKUQC");
    assert!(err.is_err());
}

#[test]
fn test_kind_mismatch_against_pinned_kind() {
    // Pinned by configuration to track
    let mut converter = Converter::new(Some(UriKind::Track), false);
    let err = converter
        .accept("spotify:album:6dVIqQ8qmQ5GBnJ9shOYGE")
        .unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_bare_identifiers_pin_default_kind() {
    let mut converter = Converter::new(None, false);
    converter.accept("4uLU6hMCjMI75M1A2tKUQC").unwrap();
    assert_eq!(converter.kind(), UriKind::Track);

    // Track URIs still fit; album URIs no longer do
    assert!(converter.accept("spotify:track:1301WleyT98MSxVHPZCA6M").is_ok());
    assert!(converter.accept("spotify:album:6dVIqQ8qmQ5GBnJ9shOYGE").is_err());
}

#[test]
fn test_batch_splits_at_fifty() {
    let mut converter = Converter::new(Some(UriKind::Track), false);

    let mut flushes: Vec<Vec<String>> = Vec::new();
    for i in 0..51 {
        match converter.accept(&format!("id{}", i)).unwrap() {
            Step::Buffered => {}
            Step::Flush(ids) => flushes.push(ids),
            Step::Emit { .. } => panic!("no local URIs in this input"),
        }
    }

    // Exactly one full batch so far, the 51st identifier is still pending
    assert_eq!(flushes.len(), 1);
    assert_eq!(flushes[0].len(), BATCH_LIMIT);

    let rest = converter.take_batch().unwrap();
    assert_eq!(rest, vec!["id50".to_string()]);

    // Nothing left after draining
    assert!(converter.take_batch().is_none());
}

#[test]
fn test_order_preserved_across_batches() {
    let mut converter = Converter::new(Some(UriKind::Track), false);

    let input: Vec<String> = (0..120).map(|i| format!("x{}", i)).collect();
    let mut seen: Vec<String> = Vec::new();

    for id in &input {
        if let Step::Flush(ids) = converter.accept(id).unwrap() {
            assert_eq!(ids.len(), BATCH_LIMIT);
            seen.extend(ids);
        }
    }
    if let Some(ids) = converter.take_batch() {
        seen.extend(ids);
    }

    // Batching never reorders identifiers
    assert_eq!(seen, input);
}

#[test]
fn test_local_uri_flushes_pending_batch_first() {
    let mut converter = Converter::new(None, false);
    converter.accept("spotify:track:4uLU6hMCjMI75M1A2tKUQC").unwrap();

    match converter.accept("spotify:local:Pink+Floyd::Money:123").unwrap() {
        Step::Emit { pending, line } => {
            assert_eq!(pending, Some(vec!["4uLU6hMCjMI75M1A2tKUQC".to_string()]));
            assert_eq!(line, "Pink Floyd - Money");
        }
        other => panic!("expected Emit, got {:?}", other),
    }

    // The batch was handed out with the emit; nothing is pending now
    assert!(converter.take_batch().is_none());
}

#[test]
fn test_local_uri_without_pending_batch() {
    let mut converter = Converter::new(None, false);

    match converter.accept("spotify:local:::Money:123").unwrap() {
        Step::Emit { pending, line } => {
            assert_eq!(pending, None);
            // No artist segment means no leading dash
            assert_eq!(line, "Money");
        }
        other => panic!("expected Emit, got {:?}", other),
    }
}

#[test]
fn test_local_uri_csv_mode() {
    let mut converter = Converter::new(None, true);

    match converter.accept("spotify:local:Pink+Floyd::Money:123").unwrap() {
        Step::Emit { line, .. } => assert_eq!(line, "\"Pink Floyd\",\"Money\""),
        other => panic!("expected Emit, got {:?}", other),
    }
}

#[test]
fn test_format_track_plain() {
    let converter = Converter::new(Some(UriKind::Track), false);
    let lines = converter.format_items(&[Some(item("C", &["A", "B"]))]);
    assert_eq!(lines, vec!["A, B - C".to_string()]);
}

#[test]
fn test_format_track_csv() {
    let converter = Converter::new(Some(UriKind::Track), true);
    let lines = converter.format_items(&[Some(item("C", &["A", "B"]))]);
    assert_eq!(lines, vec!["\"A, B\",\"C\"".to_string()]);
}

#[test]
fn test_format_artist_kind() {
    let converter = Converter::new(Some(UriKind::Artist), false);
    let lines = converter.format_items(&[Some(item("Radiohead", &[]))]);
    assert_eq!(lines, vec!["Radiohead".to_string()]);

    let converter = Converter::new(Some(UriKind::Artist), true);
    let lines = converter.format_items(&[Some(item("Radiohead", &[]))]);
    assert_eq!(lines, vec!["\"Radiohead\"".to_string()]);
}

#[test]
fn test_format_without_artists_has_no_leading_dash() {
    let converter = Converter::new(Some(UriKind::Track), false);
    let lines = converter.format_items(&[Some(item("Instrumental", &[]))]);
    assert_eq!(lines, vec!["Instrumental".to_string()]);
}

#[test]
fn test_format_skips_null_slots() {
    let converter = Converter::new(Some(UriKind::Track), false);
    let items = vec![
        Some(item("First", &["A"])),
        None,
        Some(item("Second", &["B"])),
    ];
    let lines = converter.format_items(&items);
    assert_eq!(lines, vec!["A - First".to_string(), "B - Second".to_string()]);
}

#[test]
fn test_postprocess() {
    // Tabs collapse to spaces
    assert_eq!(utils::postprocess("A\t-\tB"), "A - B");

    // Leading bare dash from an empty artist join goes away
    assert_eq!(utils::postprocess(" - Money"), "Money");
    assert_eq!(utils::postprocess("-"), "");

    // Surrounding whitespace is trimmed
    assert_eq!(utils::postprocess("  A - B  "), "A - B");

    // A dash inside a name is left alone
    assert_eq!(utils::postprocess("Jay-Z - Encore"), "Jay-Z - Encore");
}

#[test]
fn test_csv_field_escapes_quotes() {
    assert_eq!(utils::csv_field("plain"), "\"plain\"");
    assert_eq!(utils::csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
}

#[test]
fn test_join_artists() {
    let artists = vec!["A".to_string(), "B".to_string()];
    assert_eq!(utils::join_artists(&artists), "A, B");
    assert_eq!(utils::join_artists(&[]), "");
}
