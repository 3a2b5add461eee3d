//! Absolute-URL normalization for stored file references.

/// Expand a stored reference into an absolute retrievable URL.
///
/// Absolute references pass through unchanged; anything else is treated
/// as a stored filename (only the last path segment counts) and rooted
/// at the uploads route of the public base URL.
pub fn absolutize(base: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }

    let name = reference.rsplit('/').next().unwrap_or(reference);
    format!("{}/uploads/{}", base.trim_end_matches('/'), name)
}

/// `absolutize` lifted over an optional reference.
pub fn absolutize_opt(base: &str, reference: Option<&str>) -> Option<String> {
    reference.map(|r| absolutize(base, r))
}
