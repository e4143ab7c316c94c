//! Registry name matching shared by palettes, charsets and kernels.

/// Compare a user-supplied name against a registry key.
///
/// ASCII case-insensitive; `-`, `_` and spaces are ignored so that
/// `Floyd-Steinberg`, `floyd_steinberg` and `floydsteinberg` all match.
pub(crate) fn matches(input: &str, key: &str) -> bool {
    let mut normalized = input
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase());
    let mut expected = key.chars();
    loop {
        match (normalized.next(), expected.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
    }
}
