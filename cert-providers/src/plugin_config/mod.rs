//! Read-only access to the plugin's stored settings.

use crate::plugin_config::{error::PluginConfigError, model::ConfigValue};

pub mod error;
pub mod imp;
pub mod model;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait PluginConfig: Send + Sync {
    /// Returns the stored value of `key`, `None` when the setting was never saved.
    fn get(&self, key: &str) -> Option<ConfigValue>;

    /// Reads `key` as text. A missing setting reads as an empty string.
    fn get_string(&self, key: &str) -> Result<String, PluginConfigError> {
        match self.get(key) {
            None => Ok(String::new()),
            Some(ConfigValue::String(value)) => Ok(value),
            Some(ConfigValue::Integer(value)) => Ok(value.to_string()),
            Some(ConfigValue::Bool(_)) => Err(PluginConfigError::UnexpectedType {
                key: key.to_owned(),
                expected: "string",
            }),
        }
    }

    /// Reads `key` as a whole number. A missing or empty setting reads as zero.
    fn get_integer(&self, key: &str) -> Result<i64, PluginConfigError> {
        match self.get(key) {
            None => Ok(0),
            Some(ConfigValue::Integer(value)) => Ok(value),
            Some(ConfigValue::Bool(value)) => Ok(i64::from(value)),
            Some(ConfigValue::String(value)) if value.trim().is_empty() => Ok(0),
            Some(ConfigValue::String(value)) => {
                value
                    .trim()
                    .parse()
                    .map_err(|_| PluginConfigError::UnexpectedType {
                        key: key.to_owned(),
                        expected: "integer",
                    })
            }
        }
    }
}
