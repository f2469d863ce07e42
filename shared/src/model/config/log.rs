use crate::utils::is_blank_optional_string;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LogConfigDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl LogConfigDto {
    pub fn is_empty(&self) -> bool {
        is_blank_optional_string(&self.log_level)
    }

    pub fn clean(&mut self) {
        if is_blank_optional_string(&self.log_level) {
            self.log_level = None;
        }
    }
}

// Only the log section is read before the logger is initialized,
// everything else in the config file is ignored.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct LogLevelConfigDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfigDto>,
}
