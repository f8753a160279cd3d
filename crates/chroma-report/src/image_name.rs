pub const UNKNOWN_IMAGE: &str = "unknown-image";
pub const UPLOADED_IMAGE: &str = "uploaded-image";

/// Display name for an image source.
///
/// `blob:` URLs become `uploaded-image`. Paths and URLs keep their last
/// segment up to the first `.`, ignoring any query or fragment.
pub fn extract_image_name(source: Option<&str>) -> String {
    let Some(source) = source.map(str::trim).filter(|s| !s.is_empty()) else {
        return UNKNOWN_IMAGE.to_string();
    };
    if source.starts_with("blob:") {
        return UPLOADED_IMAGE.to_string();
    }
    let path = source.split(['?', '#']).next().unwrap_or_default();
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    if stem.is_empty() {
        UNKNOWN_IMAGE.to_string()
    } else {
        stem.to_string()
    }
}
