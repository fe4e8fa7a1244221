use serde::Deserialize;
use serde::Serialize;

use k8_types::DEFAULT_NS;

/// Settings for a locator. Embeddable in a larger config file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LocatorConfig {
    /// namespace used by lookups by name
    pub namespace: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NS.to_owned(),
        }
    }
}

impl LocatorConfig {
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

impl From<&str> for LocatorConfig {
    fn from(namespace: &str) -> Self {
        Self::default().with_namespace(namespace)
    }
}

impl From<String> for LocatorConfig {
    fn from(namespace: String) -> Self {
        Self::default().with_namespace(namespace)
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::LocatorConfig;

    #[test]
    fn test_default_namespace() {
        assert_eq!(LocatorConfig::default().namespace, "default");

        let config: LocatorConfig = serde_json::from_value(json!({})).expect("empty config");
        assert_eq!(config, LocatorConfig::default());
    }

    #[test]
    fn test_namespace_override() {
        let config: LocatorConfig =
            serde_json::from_value(json!({ "namespace": "payments" })).expect("config");
        assert_eq!(config, LocatorConfig::from("payments"));
    }
}
