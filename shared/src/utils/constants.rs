use regex::Regex;
use std::sync::LazyLock;

pub const CONFIG_PATH: &str = "config";
pub const CONFIG_FILE: &str = "config.yml";

pub const HLS_EXT: &str = ".m3u8";

pub const DEFAULT_HLS_JS_URL: &str = "https://cdn.jsdelivr.net/npm/hls.js@1.4.0/dist/hls.min.js";
pub const DEFAULT_PLAYER_JS_URL: &str = "https://cdn.jsdelivr.net/npm/dplayer@1.26.0/dist/DPlayer.min.js";

/// Query parameter carrying the channel name on the index page (`/?c=<name>`).
pub const CHANNEL_QUERY_PARAM: &str = "c";

/// User gestures after which a muted autoplay is unmuted.
pub const UNMUTE_EVENTS: &[&str] = &["click", "touchstart", "keydown"];

pub const MSG_CHANNEL_NOT_FOUND: &str = "Channel not found";
pub const MSG_PLAYER_LOAD_FAILED: &str = "Failed to load player";
pub const MSG_PLAYER_INIT_FAILED: &str = "Failed to initialize player";
pub const MSG_PLAYBACK_ERROR: &str = "Playback error";

pub struct Constants {
    pub re_env_var: Regex,
    pub re_whitespace: Regex,
}

pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(||
    Constants {
        re_env_var: Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap(),
        re_whitespace: Regex::new(r"\s+").unwrap(),
    });
