use schemareg_core::{RegistryError, Result, SchemaFormat};
use serde::{Deserialize, Serialize};

/// Client side settings. Transport settings (endpoint, credentials, timeouts)
/// belong to the `RegistryService` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Serialization formats this client accepts; anything else fails validation
    pub formats: Vec<SchemaFormat>,
    /// Seed the id index with the submitted content after a registration.
    ///
    /// When disabled the id index is filled only from fetch-by-id responses,
    /// so it always holds the registry's normalized form of the content.
    pub cache_registered_content: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions {
            formats: SchemaFormat::ALL.to_vec(),
            cache_registered_content: true,
        }
    }
}

impl ClientOptions {
    /// Load options from a JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| RegistryError::Configuration(format!("unable to parse options: {}", e)))
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.formats.is_empty() {
            return Err(RegistryError::Configuration(
                "at least one serialization format must be enabled".into(),
            ));
        }
        Ok(())
    }
}
