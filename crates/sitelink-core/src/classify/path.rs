//! Path helpers: file extension and locale-segment handling.

/// Returns the lowercased file extension of the last path segment.
///
/// Returns `None` for directory-style paths (trailing `/`), dotfiles and
/// segments without a dot.
pub fn path_extension(path: &str) -> Option<String> {
    if path.is_empty() || path.ends_with('/') {
        return None;
    }
    let segment = path.rsplit('/').next()?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Strips a leading `/<locale>` segment if it is one of `locales`.
///
/// `/de/glossary/` with `de` known yields `/glossary/`.
pub fn strip_locale_segment<'a>(path: &'a str, locales: &[String]) -> Option<&'a str> {
    let rest = path.strip_prefix('/')?;
    let first = rest.split('/').next()?;
    if first.is_empty() || !locales.iter().any(|l| l.eq_ignore_ascii_case(first)) {
        return None;
    }
    let tail = &rest[first.len()..];
    if tail.is_empty() {
        Some("/")
    } else {
        Some(tail)
    }
}
