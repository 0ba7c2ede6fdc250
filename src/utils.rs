pub fn join_artists(artists: &[String]) -> String {
    artists.join(", ")
}

// Tabs collapse to spaces, a leading bare dash (empty artist join) goes,
// surrounding whitespace goes.
pub fn postprocess(line: &str) -> String {
    let collapsed = line.replace('\t', " ");
    let trimmed = collapsed.trim();

    let stripped = match trimmed.strip_prefix("- ") {
        Some(rest) => rest,
        None if trimmed == "-" => "",
        None => trimmed,
    };

    stripped.trim().to_string()
}

pub fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
