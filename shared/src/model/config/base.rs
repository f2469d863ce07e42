use crate::error::LiveTvError;
use crate::model::{ConfigApiDto, LogConfigDto, PlayerConfigDto, WebUiConfigDto};
use crate::utils::is_blank_optional_string;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigDto {
    #[serde(default)]
    pub api: ConfigApiDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfigDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_ui: Option<WebUiConfigDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerConfigDto>,
    /// Catalog file replacing the embedded channel list.
    #[serde(default, skip_serializing_if = "is_blank_optional_string")]
    pub catalog: Option<String>,
}

impl ConfigDto {
    pub fn prepare(&mut self) -> Result<(), LiveTvError> {
        self.api.prepare();
        if let Some(log) = self.log.as_mut() {
            log.clean();
        }
        if self.log.as_ref().is_some_and(LogConfigDto::is_empty) {
            self.log = None;
        }
        if let Some(web_ui) = self.web_ui.as_mut() {
            web_ui.prepare()?;
        }
        if let Some(player) = self.player.as_mut() {
            player.prepare()?;
        }
        if is_blank_optional_string(&self.catalog) {
            self.catalog = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::ConfigDto;

    #[test]
    fn test_empty_config_uses_defaults() {
        let mut cfg: ConfigDto = serde_json::from_str("{}").unwrap();
        cfg.prepare().unwrap();
        assert_eq!(cfg.api.host, "0.0.0.0");
        assert_eq!(cfg.api.port, 8901);
        assert!(cfg.player.is_none());
        assert!(cfg.catalog.is_none());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(serde_json::from_str::<ConfigDto>(r#"{"threads": 4}"#).is_err());
        assert!(serde_json::from_str::<ConfigDto>(r#"{"player": {"volumes": 1}}"#).is_err());
    }

    #[test]
    fn test_blank_catalog_cleared() {
        let mut cfg: ConfigDto = serde_json::from_str(r#"{"catalog": "  ", "api": {"port": 9000}}"#).unwrap();
        cfg.prepare().unwrap();
        assert!(cfg.catalog.is_none());
        assert_eq!(cfg.api.port, 9000);
    }

    #[test]
    fn test_blank_log_level_dropped() {
        let mut cfg: ConfigDto = serde_json::from_str(r#"{"log": {"log_level": " "}}"#).unwrap();
        cfg.prepare().unwrap();
        assert!(cfg.log.is_none());
    }
}
