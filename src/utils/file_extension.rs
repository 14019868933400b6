//! File extension filtering for extracted hrefs.

/// Extensions reported by default: documents and common image formats.
pub const DEFAULT_FILE_EXTENSIONS: [&str; 4] = [".pdf", ".png", ".jpeg", ".jpg"];

/// Lowercases and trims a list of extensions, dropping empty entries.
pub fn normalize_extensions<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|ext| ext.as_ref().trim().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Returns true if `href` ends with one of `extensions`, ignoring case.
///
/// The check runs on the raw href, so a query string or fragment after the
/// extension (`report.pdf?v=2`) does not match. `extensions` are expected to
/// be lowercase already, see [`normalize_extensions`].
pub fn has_file_extension(href: &str, extensions: &[String]) -> bool {
    let href = href.to_lowercase();
    extensions.iter().any(|ext| href.ends_with(ext.as_str()))
}
