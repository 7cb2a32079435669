use std::collections::HashMap;

use crate::plugin_config::{error::PluginConfigError, model::ConfigValue, PluginConfig};

/// Settings held in a map, typically loaded from a JSON object.
#[derive(Debug, Default, Clone)]
pub struct MapPluginConfig {
    values: HashMap<String, ConfigValue>,
}

impl MapPluginConfig {
    pub fn new(values: HashMap<String, ConfigValue>) -> Self {
        Self { values }
    }

    pub fn from_json(json: &str) -> Result<Self, PluginConfigError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl PluginConfig for MapPluginConfig {
    fn get(&self, key: &str) -> Option<ConfigValue> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod test {
    use maplit::hashmap;

    use super::*;

    #[test]
    fn test_from_json_reads_mixed_values() {
        let config = MapPluginConfig::from_json(
            r#"{"show_shareonlinkedin": "1", "linkedinorganizationid": "", "enabled": true, "limit": 20}"#,
        )
        .unwrap();

        assert_eq!(config.get_integer("show_shareonlinkedin").unwrap(), 1);
        assert_eq!(config.get_string("linkedinorganizationid").unwrap(), "");
        assert_eq!(config.get_integer("enabled").unwrap(), 1);
        assert_eq!(config.get_integer("limit").unwrap(), 20);
    }

    #[test]
    fn test_missing_settings_read_as_empty() {
        let config = MapPluginConfig::default();

        assert_eq!(config.get("anything"), None);
        assert_eq!(config.get_string("anything").unwrap(), "");
        assert_eq!(config.get_integer("anything").unwrap(), 0);
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let config = MapPluginConfig::new(hashmap! {
            "flag".to_owned() => ConfigValue::from(true),
            "mode".to_owned() => ConfigValue::from("often"),
        });

        assert!(matches!(
            config.get_string("flag"),
            Err(PluginConfigError::UnexpectedType { .. })
        ));
        assert!(matches!(
            config.get_integer("mode"),
            Err(PluginConfigError::UnexpectedType { .. })
        ));
    }
}
