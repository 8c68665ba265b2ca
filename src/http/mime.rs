use std::path::Path;

/// Selects a MIME type by exact extension match.
///
/// Anything outside the table is served as plain text; there is no content
/// sniffing.
pub fn from_path(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("stl") => "model/stl",
        _ => "text/plain",
    }
}
