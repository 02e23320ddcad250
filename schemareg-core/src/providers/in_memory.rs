use crate::{
    errors::{RegistryError, Result},
    service::RegistryService,
    types::{Schema, SchemaFormat, SchemaProperties},
};

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredVersion {
    id: String,
    version: u32,
    format: SchemaFormat,
    definition: String,
}

/// InMemoryRegistry is a registry service kept entirely in process memory.
///
/// It validates content per format and stores it in canonical form (compact
/// JSON, key order preserved), so fetching by id returns the normalized
/// rewrite of what was submitted. Intended for local development and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    // (group, name) -> registered versions, oldest first
    subjects: Arc<DashMap<(String, String), Vec<StoredVersion>>>,
    schemas: Arc<DashMap<String, Schema>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct schema ids handed out so far
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Validate content for its format and rewrite it in canonical form
    fn normalize(format: SchemaFormat, content: &str) -> Result<String> {
        if format == SchemaFormat::Avro {
            apache_avro::Schema::parse_str(content)
                .map_err(|e| RegistryError::Service(format!("Invalid Avro schema: {}", e)))?;
        }

        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| RegistryError::Service(format!("Invalid JSON in schema: {}", e)))?;

        serde_json::to_string(&value)
            .map_err(|e| RegistryError::Service(format!("Failed to serialize schema: {}", e)))
    }
}

#[async_trait]
impl RegistryService for InMemoryRegistry {
    async fn register_schema(
        &self,
        group_name: &str,
        name: &str,
        format: SchemaFormat,
        content: &str,
    ) -> Result<SchemaProperties> {
        let definition = Self::normalize(format, content)?;

        let mut versions = self
            .subjects
            .entry((group_name.to_string(), name.to_string()))
            .or_default();

        // Equivalent content in the same format keeps its original id and
        // version; the same text in another format is a new version
        if let Some(existing) = versions
            .iter()
            .find(|v| v.format == format && v.definition == definition)
        {
            return Ok(SchemaProperties {
                id: existing.id.clone(),
                format: existing.format,
                version: Some(existing.version),
            });
        }

        let stored = StoredVersion {
            id: Uuid::new_v4().simple().to_string(),
            version: versions.len() as u32 + 1,
            format,
            definition,
        };
        let properties = SchemaProperties {
            id: stored.id.clone(),
            format: stored.format,
            version: Some(stored.version),
        };

        self.schemas.insert(
            stored.id.clone(),
            Schema {
                definition: stored.definition.clone(),
                properties: properties.clone(),
            },
        );
        versions.push(stored);

        info!(
            group = %group_name,
            name = %name,
            id = %properties.id,
            "registered new schema version"
        );

        Ok(properties)
    }

    async fn get_schema_by_id(&self, id: &str) -> Result<Schema> {
        match self.schemas.get(id) {
            Some(schema) => Ok(schema.clone()),
            None => Err(RegistryError::NotFound(format!(
                "no schema registered with id '{}'",
                id
            ))),
        }
    }
}
