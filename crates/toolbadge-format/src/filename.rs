/// Final component of a `/`-separated path
///
/// Empty segments are skipped, so leading and trailing slashes do not
/// matter. A path with no non-empty segment at all (`"/"`) is returned
/// unchanged. No other transformation is applied to the name.
pub fn filename(path: &str) -> &str {
    if path.is_empty() {
        return "";
    }
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
}

/// [`filename`] over an optional path; absent paths yield `""`
pub fn filename_of(path: Option<&str>) -> &str {
    path.map(filename).unwrap_or("")
}
