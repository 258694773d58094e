//! Upload filename rules: allowed extensions and sanitizing.

pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// Lowercase extension after the last `.`, if it is one we can parse.
pub fn allowed_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Reduces a client filename to a safe single path component.
///
/// Path separators and whitespace become `_`, anything outside
/// `[A-Za-z0-9._-]` is dropped, and leading/trailing `.`/`_` are trimmed.
/// Falls back to `upload.<ext>` when nothing usable with the right extension
/// remains.
pub fn sanitize_filename(filename: &str, ext: &str) -> String {
    let replaced: String = filename
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    let name = replaced.trim_matches(|c| c == '.' || c == '_');

    match allowed_extension(name) {
        Some(kept) if kept == ext => name.to_string(),
        _ => format!("upload.{ext}"),
    }
}
