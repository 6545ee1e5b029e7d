use crate::error::AdapterError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

pub const DRIVER_DM: &str = "dm";

const PROP_DRIVER: &str = "driver";
const PROP_SCHEMA: &str = "schema";
const PROP_NAME: &str = "name";

/// Driver-level configuration of a DM connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    #[serde(default)]
    pub name: String,
    pub driver: String,
    /// Schema used when a call names none. Empty means the link's default.
    #[serde(default)]
    pub schema: String,
}

impl DriverConfig {
    pub fn new(schema: &str) -> Self {
        DriverConfig {
            name: String::new(),
            driver: DRIVER_DM.to_string(),
            schema: schema.to_string(),
        }
    }

    pub fn from_properties(props: &HashMap<String, String>) -> Result<Self, AdapterError> {
        let driver = props
            .get(PROP_DRIVER)
            .ok_or_else(|| AdapterError::MissingProperty(PROP_DRIVER.to_string()))?;

        let config = DriverConfig {
            name: props.get(PROP_NAME).cloned().unwrap_or_default(),
            driver: driver.clone(),
            schema: props.get(PROP_SCHEMA).cloned().unwrap_or_default(),
        };
        config.validate()
    }

    pub fn from_json(json: &str) -> Result<Self, AdapterError> {
        let config: DriverConfig = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// The explicit schema when one is given, otherwise the configured one.
    pub fn resolve_schema<'a>(&'a self, schema: Option<&'a str>) -> &'a str {
        match schema {
            Some(s) if !s.is_empty() => s,
            _ => &self.schema,
        }
    }

    fn validate(self) -> Result<Self, AdapterError> {
        if !self.driver.eq_ignore_ascii_case(DRIVER_DM) {
            return Err(AdapterError::UnsupportedDriver(self.driver));
        }
        debug!(name = %self.name, schema = %self.schema, "Loaded DM driver config");
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_properties() {
        let config =
            DriverConfig::from_properties(&props(&[("driver", "DM"), ("schema", "SYSDBA")]))
                .unwrap();
        assert_eq!(config.schema(), "SYSDBA");
        assert_eq!(config.name, "");
    }

    #[test]
    fn test_missing_driver() {
        let err = DriverConfig::from_properties(&props(&[("schema", "SYSDBA")])).unwrap_err();
        assert!(matches!(err, AdapterError::MissingProperty(p) if p == "driver"));
    }

    #[test]
    fn test_unsupported_driver() {
        let err = DriverConfig::from_json(r#"{"driver": "mysql"}"#).unwrap_err();
        assert!(matches!(err, AdapterError::UnsupportedDriver(d) if d == "mysql"));
    }

    #[test]
    fn test_from_json_defaults() {
        let config = DriverConfig::from_json(r#"{"driver": "dm"}"#).unwrap();
        assert_eq!(config, DriverConfig::new(""));
    }

    #[test]
    fn test_invalid_json() {
        let err = DriverConfig::from_json("{").unwrap_err();
        assert!(matches!(err, AdapterError::InvalidConfig(_)));
    }

    #[test]
    fn test_resolve_schema() {
        let config = DriverConfig::new("app");
        assert_eq!(config.resolve_schema(Some("audit")), "audit");
        assert_eq!(config.resolve_schema(None), "app");
        assert_eq!(config.resolve_schema(Some("")), "app");
    }
}
