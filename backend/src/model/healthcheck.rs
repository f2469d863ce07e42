use shared::model::ConfigApiDto;
use shared::utils::is_blank_optional_string;
use serde::{Deserialize, Serialize};

pub const HEALTHCHECK_OK: &str = "ok";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Healthcheck {
    pub status: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "is_blank_optional_string")]
    pub build_time: Option<String>,
    pub server_time: String,
    #[serde(default)]
    pub channels: usize,
}

impl Healthcheck {
    pub fn is_ok(&self) -> bool {
        self.status == HEALTHCHECK_OK
    }
}

// The healthcheck probe only needs to know where the server listens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthcheckConfig {
    #[serde(default)]
    pub api: ConfigApiDto,
}
