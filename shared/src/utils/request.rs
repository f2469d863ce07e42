use url::Url;
use crate::utils::HLS_EXT;

pub fn is_hls_url(url: &str) -> bool {
    let lc_url = url.to_lowercase();
    let path = lc_url.split(['?', '#']).next().unwrap_or_default();
    path.ends_with(HLS_EXT)
}

/// Returns true for absolute `http` or `https` urls with a host.
pub fn is_http_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
}

pub fn get_base_url_from_str(url: &str) -> Option<String> {
    if let Ok(url) = Url::parse(url) {
        Some(url.origin().ascii_serialization())
    } else {
        None
    }
}

/// Percent encodes a query parameter value.
pub fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
