use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://sri-aurobindo.co.in/workings/matherials/rigveda/";
pub const DEFAULT_CONTAINER_TAG: &str = "div";
pub const DEFAULT_CONTAINER_CLASS: &str = "pada_dev_acc";
pub const DEFAULT_TEXT_TAG: &str = "span";
pub const DEFAULT_TEXT_CLASS: &str = "sanskrit";
pub const DEFAULT_OUTPUT: &str = "output.docx";

/// Where pages live and which markup holds the text.
///
/// A fragment is collected from every `container_tag.container_class`
/// element, built from the `text_tag.text_class` elements nested inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Always ends with `/`.
    pub base_url: String,
    pub container_tag: String,
    pub container_class: String,
    pub text_tag: String,
    pub text_class: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            container_tag: DEFAULT_CONTAINER_TAG.to_string(),
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            text_tag: DEFAULT_TEXT_TAG.to_string(),
            text_class: DEFAULT_TEXT_CLASS.to_string(),
        }
    }
}

impl SiteConfig {
    /// Build a config with the default tags, validating every field.
    pub fn new(
        base_url: &str,
        container_class: &str,
        text_class: &str,
    ) -> Result<Self, ConfigError> {
        Self {
            base_url: base_url.to_string(),
            container_class: container_class.to_string(),
            text_class: text_class.to_string(),
            ..Self::default()
        }
        .validated()
    }

    /// Check names and normalize the base URL to end with `/`.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(base.to_string()));
        }
        self.base_url = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };

        check_tag("container tag", &self.container_tag)?;
        check_tag("text tag", &self.text_tag)?;
        check_class("container class", &self.container_class)?;
        check_class("text class", &self.text_class)?;

        Ok(self)
    }

    /// CSS selector for fragment containers, e.g. `div.pada_dev_acc`.
    pub fn container_selector(&self) -> String {
        format!("{}.{}", self.container_tag, self.container_class)
    }

    /// CSS selector for text elements inside a container, e.g. `span.sanskrit`.
    pub fn text_selector(&self) -> String {
        format!("{}.{}", self.text_tag, self.text_class)
    }
}

fn check_class(role: &'static str, value: &str) -> Result<(), ConfigError> {
    let re = Regex::new(r"^-?[_a-zA-Z][_a-zA-Z0-9-]*$").expect("valid regex");
    if re.is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidClassName {
            role,
            value: value.to_string(),
        })
    }
}

fn check_tag(role: &'static str, value: &str) -> Result<(), ConfigError> {
    let re = Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*$").expect("valid regex");
    if re.is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidTagName {
            role,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default().validated().unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.container_selector(), "div.pada_dev_acc");
        assert_eq!(config.text_selector(), "span.sanskrit");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = SiteConfig::new("http://localhost:8080/rigveda", "a", "b").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/rigveda/");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert_eq!(
            SiteConfig::new("  ", "a", "b"),
            Err(ConfigError::EmptyBaseUrl)
        );
        assert!(matches!(
            SiteConfig::new("ftp://example.com/", "a", "b"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_rejects_bad_class_names() {
        for bad in ["", "two words", "a.b", "9lives", "x>y"] {
            let err = SiteConfig::new(DEFAULT_BASE_URL, bad, "sanskrit").unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidClassName { role: "container class", .. }),
                "{bad:?} should be rejected"
            );
        }
        let err = SiteConfig::new(DEFAULT_BASE_URL, "pada_dev_acc", "").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidClassName { role: "text class", .. }));
    }

    #[test]
    fn test_accepts_hyphenated_class_names() {
        assert!(SiteConfig::new(DEFAULT_BASE_URL, "pada-dev", "-x_1").is_ok());
    }

    #[test]
    fn test_rejects_bad_tag_names() {
        let config = SiteConfig {
            text_tag: "span.x".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            config.validated(),
            Err(ConfigError::InvalidTagName { role: "text tag", .. })
        ));
    }
}
