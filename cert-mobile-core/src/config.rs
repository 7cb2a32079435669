use serde::Deserialize;
use thiserror::Error;
use time::UtcOffset;

use cert_providers::plugin_config::{error::PluginConfigError, PluginConfig};

use crate::model::{ShareOnLinkedin, ShareTimeZone};

pub const SHOW_SHARE_ON_LINKEDIN_KEY: &str = "show_shareonlinkedin";
pub const LINKEDIN_ORGANIZATION_ID_KEY: &str = "linkedinorganizationid";

pub const LINKEDIN_ADD_TO_PROFILE_URL: &str = "https://www.linkedin.com/profile/add";

/// The mobile app cannot paginate, so a single page of this size is shown.
pub const ISSUES_PER_PAGE: usize = 20;

const DEFAULT_INIT_JAVASCRIPT: &str = include_str!("../mobileapp/js/mycertificates_init.js");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown `show_shareonlinkedin` value `{0}`")]
    UnknownShareMode(i64),
    #[error("Issues per page must be positive")]
    InvalidPageSize,
    #[error("Plugin config error: `{0}`")]
    PluginConfigError(#[from] PluginConfigError),
    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MobileCoreConfig {
    pub site: SiteConfig,
    pub listing: ListingConfig,
    #[serde(skip)]
    pub share: ShareConfig,
    #[serde(skip)]
    pub init_javascript: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub www_root: String,
    pub site_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub issues_per_page: usize,
}

#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub mode: ShareOnLinkedin,
    pub organization_id: String,
    pub add_to_profile_url: String,
    pub time_zone: ShareTimeZone,
}

impl Default for MobileCoreConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            listing: ListingConfig::default(),
            share: ShareConfig::default(),
            init_javascript: DEFAULT_INIT_JAVASCRIPT.to_owned(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            www_root: "https://www.example.com/moodle".to_owned(),
            site_id: 1,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            issues_per_page: ISSUES_PER_PAGE,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            mode: ShareOnLinkedin::Disabled,
            organization_id: String::new(),
            add_to_profile_url: LINKEDIN_ADD_TO_PROFILE_URL.to_owned(),
            time_zone: ShareTimeZone::ServerLocal,
        }
    }
}

impl MobileCoreConfig {
    /// Reads the site and listing sections from JSON; missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.listing.issues_per_page == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(config)
    }

    /// Overrides the share settings with the values stored by the plugin.
    pub fn with_plugin_config(mut self, config: &dyn PluginConfig) -> Result<Self, ConfigError> {
        let mode = config.get_integer(SHOW_SHARE_ON_LINKEDIN_KEY)?;
        self.share.mode =
            ShareOnLinkedin::from_setting(mode).ok_or(ConfigError::UnknownShareMode(mode))?;
        self.share.organization_id = config.get_string(LINKEDIN_ORGANIZATION_ID_KEY)?;
        Ok(self)
    }

    /// Splits share-link dates in a fixed offset instead of the server's zone.
    pub fn with_time_zone(mut self, time_zone: UtcOffset) -> Self {
        self.share.time_zone = ShareTimeZone::Fixed(time_zone);
        self
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use cert_providers::plugin_config::{model::ConfigValue, MockPluginConfig};

    use super::*;

    fn plugin_config(values: HashMap<&'static str, ConfigValue>) -> MockPluginConfig {
        let mut config = MockPluginConfig::default();
        config
            .expect_get_integer()
            .returning({
                let values = values.clone();
                move |key| match values.get(key) {
                    Some(ConfigValue::Integer(value)) => Ok(*value),
                    _ => Ok(0),
                }
            });
        config.expect_get_string().returning(move |key| match values.get(key) {
            Some(ConfigValue::String(value)) => Ok(value.clone()),
            _ => Ok(String::new()),
        });
        config
    }

    #[test]
    fn test_defaults() {
        let config = MobileCoreConfig::default();

        assert_eq!(config.listing.issues_per_page, 20);
        assert_eq!(config.site.site_id, 1);
        assert_eq!(config.share.mode, ShareOnLinkedin::Disabled);
        assert_eq!(config.share.time_zone, ShareTimeZone::ServerLocal);
        assert!(config.init_javascript.contains("registerHandler"));
    }

    #[test]
    fn test_from_json_keeps_defaults_for_missing_fields() {
        let config =
            MobileCoreConfig::from_json(r#"{"site": {"www_root": "https://lms.test"}}"#).unwrap();

        assert_eq!(config.site.www_root, "https://lms.test");
        assert_eq!(config.site.site_id, 1);
        assert_eq!(config.listing.issues_per_page, 20);
    }

    #[test]
    fn test_from_json_rejects_zero_page_size() {
        let result = MobileCoreConfig::from_json(r#"{"listing": {"issues_per_page": 0}}"#);

        assert!(matches!(result, Err(ConfigError::InvalidPageSize)));
    }

    #[test]
    fn test_with_time_zone_fixes_offset() {
        let config = MobileCoreConfig::default().with_time_zone(time::macros::offset!(-5));

        assert_eq!(
            config.share.time_zone,
            ShareTimeZone::Fixed(time::macros::offset!(-5))
        );
    }

    #[test]
    fn test_with_plugin_config_reads_share_settings() {
        let stored = HashMap::from([
            (SHOW_SHARE_ON_LINKEDIN_KEY, ConfigValue::Integer(2)),
            (LINKEDIN_ORGANIZATION_ID_KEY, ConfigValue::from("123")),
        ]);

        let config = MobileCoreConfig::default()
            .with_plugin_config(&plugin_config(stored))
            .unwrap();

        assert_eq!(config.share.mode, ShareOnLinkedin::CertificateFile);
        assert_eq!(config.share.organization_id, "123");
    }

    #[test]
    fn test_with_plugin_config_rejects_unknown_mode() {
        let stored = HashMap::from([(SHOW_SHARE_ON_LINKEDIN_KEY, ConfigValue::Integer(7))]);

        let result = MobileCoreConfig::default().with_plugin_config(&plugin_config(stored));

        assert!(matches!(result, Err(ConfigError::UnknownShareMode(7))));
    }
}
