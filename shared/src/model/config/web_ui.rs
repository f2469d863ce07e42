use crate::error::LiveTvError;
use crate::info_err_res;
use crate::utils::{default_as_true, default_title, is_true};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContentSecurityPolicyConfigDto {
    #[serde(default = "default_as_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<Vec<String>>,
}

impl Default for ContentSecurityPolicyConfigDto {
    fn default() -> Self {
        ContentSecurityPolicyConfigDto {
            enabled: default_as_true(),
            custom_attributes: None,
        }
    }
}

impl ContentSecurityPolicyConfigDto {
    pub fn validate(&self) -> Result<(), LiveTvError> {
        if let Some(attrs) = self.custom_attributes.as_ref() {
            for (i, attr) in attrs.iter().enumerate() {
                // Prohibit CR/LF/NUL (header injection)
                if attr.contains('\r') || attr.contains('\n') || attr.contains('\0') {
                    return info_err_res!("custom_attributes[{i}] contains forbidden control characters");
                }
                if attr.chars().any(|c| {
                    let u = c as u32;
                    (u < 0x20 && c != '\t') || u == 0x7F
                }) {
                    return info_err_res!("custom_attributes[{i}] contains control characters");
                }
            }
        }
        Ok(())
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_content_security_policy() -> Option<ContentSecurityPolicyConfigDto> {
    Some(ContentSecurityPolicyConfigDto::default())
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WebUiConfigDto {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_as_true", skip_serializing_if = "is_true")]
    pub m3u_enabled: bool,
    #[serde(default = "default_content_security_policy", skip_serializing_if = "Option::is_none")]
    pub content_security_policy: Option<ContentSecurityPolicyConfigDto>,
}

impl Default for WebUiConfigDto {
    fn default() -> Self {
        WebUiConfigDto {
            title: default_title(),
            m3u_enabled: default_as_true(),
            content_security_policy: default_content_security_policy(),
        }
    }
}

impl WebUiConfigDto {
    pub fn prepare(&mut self) -> Result<(), LiveTvError> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            self.title = default_title();
        }
        if let Some(csp) = self.content_security_policy.as_ref() {
            csp.validate()?;
        }
        Ok(())
    }
}
