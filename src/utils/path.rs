use std::path::Path;

/// Get file extension as a lowercase string
pub fn get_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Get the file name as a string
pub fn get_file_name<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .map(|s| s.to_string())
}

/// Check if a path has a specific extension, ignoring case
pub fn has_extension<P: AsRef<Path>>(path: P, ext: &str) -> bool {
    get_extension(path)
        .map_or(false, |e| e == ext.to_lowercase())
}

/// Check if a path's extension is one of `exts`, ignoring case
pub fn has_any_extension<P: AsRef<Path>>(path: P, exts: &[String]) -> bool {
    match get_extension(path) {
        Some(e) => exts.iter().any(|x| x.to_lowercase() == e),
        None => false,
    }
}

/// Split a `YYYY-MM-DD-rest` file stem into its date prefix and the rest
pub fn split_date_prefix(stem: &str) -> Option<(&str, &str)> {
    let bytes = stem.as_bytes();
    if bytes.len() < 11 || bytes[10] != b'-' {
        return None;
    }

    let date = &stem[..10];
    let shape_ok = date.char_indices().all(|(i, c)| match i {
        4 | 7 => c == '-',
        _ => c.is_ascii_digit(),
    });

    if shape_ok {
        Some((date, &stem[11..]))
    } else {
        None
    }
}

/// Join a URL prefix and segments with exactly one slash between each part
pub fn url_join(prefix: &str, segments: &[&str]) -> String {
    let mut url = prefix.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment.trim_matches('/'));
    }
    url
}
