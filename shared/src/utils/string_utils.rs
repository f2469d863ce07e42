use crate::utils::CONSTANTS;

/// Escapes a value for use inside a double quoted `#EXTINF` attribute.
pub fn escape_m3u_attribute(value: &str) -> String {
    let single_line = CONSTANTS.re_whitespace.replace_all(value.trim(), " ");
    single_line.replace('"', "'")
}

/// A channel name must be usable as a single url path segment.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '\\'))
}

pub fn eq_ignore_case(first: &str, second: &str) -> bool {
    first.to_lowercase() == second.to_lowercase()
}
