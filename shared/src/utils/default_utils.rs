use crate::utils::{DEFAULT_HLS_JS_URL, DEFAULT_PLAYER_JS_URL};

pub const fn default_as_true() -> bool { true }
pub const fn is_true(value: &bool) -> bool { *value }

pub fn default_host() -> String { String::from("0.0.0.0") }
pub const fn default_port() -> u16 { 8901 }

pub fn default_title() -> String { String::from("Live TV Channels") }

pub const fn default_volume() -> f64 { 0.8 }
pub fn default_theme() -> String { String::from("#FADFA3") }
pub fn default_hls_js_url() -> String { String::from(DEFAULT_HLS_JS_URL) }
pub fn default_player_js_url() -> String { String::from(DEFAULT_PLAYER_JS_URL) }

// hls.js tuning for live streams
pub const fn default_back_buffer_length() -> u32 { 90 }

pub fn is_blank_optional_string(s: &Option<String>) -> bool {
    s.as_ref().is_none_or(|s| s.chars().all(char::is_whitespace))
}

