use crate::constants::MAPBOX_STYLE_SCHEME_PREFIX;
use crate::error::{MapError, Result};

/// Normalizes `owner/style-id` or `mapbox://styles/owner/style-id` into two
/// percent-encoded path segments.
pub fn resolve_style(style: &str) -> Result<String> {
    let path = style
        .strip_prefix(MAPBOX_STYLE_SCHEME_PREFIX)
        .unwrap_or(style);

    let segments: Vec<&str> = path.split('/').collect();
    match segments.as_slice() {
        [owner, style_id] if !owner.is_empty() && !style_id.is_empty() => Ok(format!(
            "{}/{}",
            urlencoding::encode(owner),
            urlencoding::encode(style_id)
        )),
        _ => Err(MapError::InvalidStyle(style.to_string())),
    }
}
