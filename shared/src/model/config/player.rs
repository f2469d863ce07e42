use crate::error::LiveTvError;
use crate::info_err_res;
use crate::utils::{default_as_true, default_back_buffer_length, default_hls_js_url, default_player_js_url,
                   default_theme, default_volume, is_http_url};
use log::warn;

/// Options handed through to hls.js.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HlsConfigDto {
    #[serde(default)]
    pub enable_worker: bool,
    #[serde(default = "default_as_true")]
    pub low_latency_mode: bool,
    #[serde(default = "default_back_buffer_length")]
    pub back_buffer_length: u32,
}

impl Default for HlsConfigDto {
    fn default() -> Self {
        HlsConfigDto {
            enable_worker: false,
            low_latency_mode: default_as_true(),
            back_buffer_length: default_back_buffer_length(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfigDto {
    #[serde(default = "default_as_true")]
    pub autoplay: bool,
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_hls_js_url")]
    pub hls_js_url: String,
    #[serde(default = "default_player_js_url")]
    pub player_js_url: String,
    #[serde(default)]
    pub hls: HlsConfigDto,
}

impl Default for PlayerConfigDto {
    fn default() -> Self {
        PlayerConfigDto {
            autoplay: default_as_true(),
            volume: default_volume(),
            theme: default_theme(),
            hls_js_url: default_hls_js_url(),
            player_js_url: default_player_js_url(),
            hls: HlsConfigDto::default(),
        }
    }
}

impl PlayerConfigDto {
    pub fn prepare(&mut self) -> Result<(), LiveTvError> {
        if !self.volume.is_finite() {
            warn!("Invalid player volume {}, using default", self.volume);
            self.volume = default_volume();
        } else if !(0.0..=1.0).contains(&self.volume) {
            let volume = self.volume.clamp(0.0, 1.0);
            warn!("Player volume {} out of range, clamped to {volume}", self.volume);
            self.volume = volume;
        }
        self.theme = self.theme.trim().to_string();
        if self.theme.is_empty() {
            self.theme = default_theme();
        }
        for (field, url) in [("hls_js_url", &self.hls_js_url), ("player_js_url", &self.player_js_url)] {
            if !is_http_url(url.trim()) {
                return info_err_res!("player.{field} is not a valid http(s) url: {url}");
            }
        }
        self.hls_js_url = self.hls_js_url.trim().to_string();
        self.player_js_url = self.player_js_url.trim().to_string();
        Ok(())
    }
}
