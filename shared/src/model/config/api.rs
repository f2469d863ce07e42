use crate::utils::{default_host, default_port};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigApiDto {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub web_root: String,
}

impl Default for ConfigApiDto {
    fn default() -> Self {
        ConfigApiDto {
            host: default_host(),
            port: default_port(),
            web_root: String::new(),
        }
    }
}

impl ConfigApiDto {
    pub fn prepare(&mut self) {
        self.host = self.host.trim().to_string();
        if self.host.is_empty() {
            self.host = default_host();
        }
        self.web_root = self.web_root.trim().to_string();
    }
}
