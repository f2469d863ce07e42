use crate::create_livetv_error;
use crate::error::{LiveTvError, LiveTvErrorKind};
use crate::utils::{eq_ignore_case, escape_m3u_attribute, is_http_url, is_valid_slug};

/// One entry of the channel catalog.
///
/// `name` doubles as the case-insensitive lookup key and the url slug,
/// `url` is handed to the player untouched.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Channel {
    pub name: String,
    #[serde(default)]
    pub logo: String,
    pub url: String,
    pub category: String,
}

impl Channel {
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    pub fn is_in_category(&self, category: &str) -> bool {
        eq_ignore_case(&self.category, category)
    }

    /// The `#EXTINF` line followed by the stream url.
    pub fn to_m3u(&self) -> String {
        let name = escape_m3u_attribute(&self.name);
        let mut line = format!("#EXTINF:-1 tvg-id=\"{name}\" tvg-name=\"{name}\"");
        if !self.logo.is_empty() {
            line.push_str(&format!(" tvg-logo=\"{}\"", escape_m3u_attribute(&self.logo)));
        }
        line.push_str(&format!(" group-title=\"{}\"", escape_m3u_attribute(&self.category)));
        format!("{line},{name}\n{}", self.url)
    }

    pub fn prepare(&mut self) {
        self.name = self.name.trim().to_string();
        self.logo = self.logo.trim().to_string();
        self.url = self.url.trim().to_string();
        self.category = self.category.trim().to_string();
    }

    pub fn validate(&self, index: usize) -> Result<(), LiveTvError> {
        if !is_valid_slug(&self.name) {
            return Err(create_livetv_error!(LiveTvErrorKind::Catalog,
                "channel[{index}] has an invalid name '{}', expected a non empty name without whitespace, '/', '?' or '#'", self.name));
        }
        if self.category.is_empty() {
            return Err(create_livetv_error!(LiveTvErrorKind::Catalog, "channel[{index}] '{}' has no category", self.name));
        }
        if !is_http_url(&self.url) {
            return Err(create_livetv_error!(LiveTvErrorKind::Catalog,
                "channel[{index}] '{}' has an invalid stream url '{}'", self.name, self.url));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Channel;

    fn channel(name: &str, url: &str, category: &str) -> Channel {
        Channel {
            name: name.to_string(),
            logo: String::new(),
            url: url.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_validate() {
        assert!(channel("sonyyay", "https://example.com/yay.m3u8", "Kids").validate(0).is_ok());
        assert!(channel("sony yay", "https://example.com/yay.m3u8", "Kids").validate(0).is_err());
        assert!(channel("", "https://example.com/yay.m3u8", "Kids").validate(0).is_err());
        assert!(channel("sony#yay", "https://example.com/yay.m3u8", "Kids").validate(0).is_err());
        assert!(channel("sonyyay", "yay.m3u8", "Kids").validate(0).is_err());
        assert!(channel("sonyyay", "https://example.com/yay.m3u8", "").validate(0).is_err());
    }

    #[test]
    fn test_prepare_trims() {
        let mut ch = channel(" sonyyay ", " https://example.com/yay.m3u8", "Kids ");
        ch.prepare();
        assert_eq!(ch.name, "sonyyay");
        assert_eq!(ch.url, "https://example.com/yay.m3u8");
        assert_eq!(ch.category, "Kids");
        assert!(ch.validate(0).is_ok());
    }

    #[test]
    fn test_to_m3u() {
        let mut ch = channel("sonyyay", "https://example.com/yay.m3u8", "Kids");
        assert_eq!(ch.to_m3u(), "#EXTINF:-1 tvg-id=\"sonyyay\" tvg-name=\"sonyyay\" group-title=\"Kids\",sonyyay\nhttps://example.com/yay.m3u8");
        ch.logo = "https://example.com/yay.png".to_string();
        assert_eq!(ch.to_m3u(), "#EXTINF:-1 tvg-id=\"sonyyay\" tvg-name=\"sonyyay\" tvg-logo=\"https://example.com/yay.png\" group-title=\"Kids\",sonyyay\nhttps://example.com/yay.m3u8");
    }

    #[test]
    fn test_logo_optional() {
        let ch: Channel = serde_json::from_str(r#"{"name":"a","url":"https://example.com/a.m3u8","category":"News"}"#).unwrap();
        assert!(ch.logo.is_empty());
    }
}
