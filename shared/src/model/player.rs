use crate::model::{Channel, HlsConfigDto, PlayerConfigDto};
use crate::utils::{MSG_PLAYBACK_ERROR, MSG_PLAYER_INIT_FAILED, MSG_PLAYER_LOAD_FAILED, UNMUTE_EVENTS};

/// hls.js constructor options, field names as hls.js expects them.
#[derive(Debug, Clone, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HlsSettings {
    pub enable_worker: bool,
    pub low_latency_mode: bool,
    pub back_buffer_length: u32,
}

impl From<&HlsConfigDto> for HlsSettings {
    fn from(dto: &HlsConfigDto) -> Self {
        Self {
            enable_worker: dto.enable_worker,
            low_latency_mode: dto.low_latency_mode,
            back_buffer_length: dto.back_buffer_length,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMessages {
    pub load_failed: &'static str,
    pub init_failed: &'static str,
    pub playback_error: &'static str,
}

impl Default for PlayerMessages {
    fn default() -> Self {
        Self {
            load_failed: MSG_PLAYER_LOAD_FAILED,
            init_failed: MSG_PLAYER_INIT_FAILED,
            playback_error: MSG_PLAYBACK_ERROR,
        }
    }
}

/// Everything the browser side bootstrap needs to mount a player for one channel.
///
/// Serialized as json into the player page, the script reads it from there.
#[derive(Debug, Clone, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSettings {
    pub channel: String,
    pub url: String,
    pub autoplay: bool,
    pub volume: f64,
    pub theme: String,
    pub hls_js_url: String,
    pub player_js_url: String,
    pub hls: HlsSettings,
    pub unmute_events: &'static [&'static str],
    pub messages: PlayerMessages,
}

impl PlayerSettings {
    pub fn new(channel: &Channel, config: &PlayerConfigDto) -> Self {
        Self {
            channel: channel.name.clone(),
            url: channel.url.clone(),
            autoplay: config.autoplay,
            volume: config.volume,
            theme: config.theme.clone(),
            hls_js_url: config.hls_js_url.clone(),
            player_js_url: config.player_js_url.clone(),
            hls: HlsSettings::from(&config.hls),
            unmute_events: UNMUTE_EVENTS,
            messages: PlayerMessages::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{ChannelCatalog, PlayerConfigDto, PlayerSettings};

    #[test]
    fn test_player_settings_json() {
        let catalog = ChannelCatalog::builtin().unwrap();
        let channel = catalog.find("sonypixhd").unwrap();
        let settings = PlayerSettings::new(channel, &PlayerConfigDto::default());
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["channel"], "sonypixhd");
        assert_eq!(json["url"], "https://tataplay.slivcdn.com/hls/live/2011748/PIXHD/master_3500.m3u8");
        assert_eq!(json["autoplay"], true);
        assert_eq!(json["volume"], 0.8);
        assert_eq!(json["theme"], "#FADFA3");
        assert_eq!(json["hls"]["enableWorker"], false);
        assert_eq!(json["hls"]["lowLatencyMode"], true);
        assert_eq!(json["hls"]["backBufferLength"], 90);
        assert_eq!(json["unmuteEvents"], serde_json::json!(["click", "touchstart", "keydown"]));
        assert_eq!(json["messages"]["loadFailed"], "Failed to load player");
    }
}
