//! Content type resolution based on file extensions.

/// Returns the extension of the final path segment: the text after its last `.`.
///
/// A segment without a dot, or one ending in a dot, has no extension.
///
/// # Example
///
/// ```
/// # use webworker::http::mime::extension_of;
/// assert_eq!(extension_of("./index.html"), Some("html"));
/// assert_eq!(extension_of("./img/logo.v2.png"), Some("png"));
/// assert_eq!(extension_of("./README"), None);
/// ```
pub fn extension_of(path: &str) -> Option<&str> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// Maps an extension to the MIME type written in the `Content-Type` header.
///
/// Plain text is served as `text/html` on purpose so clients render it as markup.
/// Anything outside the table has no content type at all.
pub fn content_type(extension: Option<&str>) -> Option<&'static str> {
    match extension? {
        "jpg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "html" | "txt" => Some("text/html"),
        _ => None,
    }
}

/// Whether files with this extension go through template substitution.
pub fn is_textual(extension: Option<&str>) -> bool {
    matches!(extension, Some("html" | "txt"))
}
