use shared::model::{ChannelCatalog, ConfigApiDto, ConfigDto, ContentSecurityPolicyConfigDto, PlayerConfigDto, WebUiConfigDto};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ConfigApi {
    pub host: String,
    pub port: u16,
    pub web_root: Option<String>,
}

impl From<&ConfigApiDto> for ConfigApi {
    fn from(dto: &ConfigApiDto) -> Self {
        Self {
            host: dto.host.clone(),
            port: dto.port,
            web_root: if dto.web_root.is_empty() { None } else { Some(dto.web_root.clone()) },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContentSecurityPolicyConfig {
    pub enabled: bool,
    pub custom_attributes: Vec<String>,
}

impl From<&ContentSecurityPolicyConfigDto> for ContentSecurityPolicyConfig {
    fn from(dto: &ContentSecurityPolicyConfigDto) -> Self {
        Self {
            enabled: dto.enabled,
            custom_attributes: dto.custom_attributes.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WebUiConfig {
    pub title: String,
    pub m3u_enabled: bool,
    pub content_security_policy: Option<ContentSecurityPolicyConfig>,
}

impl From<&WebUiConfigDto> for WebUiConfig {
    fn from(dto: &WebUiConfigDto) -> Self {
        Self {
            title: dto.title.clone(),
            m3u_enabled: dto.m3u_enabled,
            content_security_policy: dto.content_security_policy.as_ref()
                .map(Into::into)
                .filter(|csp: &ContentSecurityPolicyConfig| csp.enabled),
        }
    }
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self::from(&WebUiConfigDto::default())
    }
}

/// Runtime configuration, built from the prepared [`ConfigDto`].
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ConfigApi,
    pub web_ui: WebUiConfig,
    pub player: PlayerConfigDto,
    pub catalog: Option<String>,
}

impl From<ConfigDto> for Config {
    fn from(dto: ConfigDto) -> Self {
        Self {
            api: ConfigApi::from(&dto.api),
            web_ui: dto.web_ui.as_ref().map(WebUiConfig::from).unwrap_or_default(),
            player: dto.player.unwrap_or_default(),
            catalog: dto.catalog,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub config_path: String,
    pub config_file_path: String,
    pub catalog_file_path: Option<String>,
}

/// Configuration and catalog, both immutable once the server runs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub config: Arc<Config>,
    pub catalog: Arc<ChannelCatalog>,
    pub paths: ConfigPaths,
}

impl AppConfig {
    pub fn new(config: Config, catalog: ChannelCatalog, paths: ConfigPaths) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            paths,
        }
    }
}
