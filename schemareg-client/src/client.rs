use std::sync::Arc;

use schemareg_core::{
    validate_id, validate_with, ContentKey, RegistryError, RegistryService, Result, Schema,
    SchemaDescription, SchemaFormat, SchemaProperties,
};
use tracing::{debug, info, warn};

use crate::{
    cache::{CacheStats, CachedSchema, SchemaCache},
    options::ClientOptions,
};

/// Cache-through client for a remote schema registry.
///
/// Every registration and lookup goes through two in-memory indices before
/// reaching the registry: content key -> id and id -> content. Hits are served
/// without a remote call; misses are forwarded and the response is cached.
/// Failures are never cached, so a failed lookup is retried on the next call.
///
/// Clones share the same indices. The cache grows for the lifetime of the
/// client and is dropped with its last clone.
#[derive(Debug, Clone)]
pub struct SchemaRegistryClient {
    service: Arc<dyn RegistryService>,
    cache: Arc<SchemaCache>,
    options: ClientOptions,
}

impl SchemaRegistryClient {
    /// Initializes a new `SchemaRegistryClientBuilder` instance.
    pub fn builder() -> SchemaRegistryClientBuilder {
        SchemaRegistryClientBuilder::default()
    }

    /// Resolve a schema description to its registry id, registering it if the
    /// registry has not seen it yet.
    ///
    /// Repeating the call with byte-identical coordinates and content is
    /// answered from the content index, without a remote call; the returned
    /// properties then carry no version. The content key is derived from the
    /// exact content, so a whitespace variant of an already cached schema is a
    /// miss and goes to the registry, which resolves it to the existing id.
    pub async fn register_or_fetch_id(
        &self,
        description: &SchemaDescription,
    ) -> Result<SchemaProperties> {
        let schema = validate_with(description, &self.options.formats)?;
        let key = ContentKey::derive(&schema);

        if let Some(id) = self.cache.lookup_id(&key) {
            debug!(
                group = %schema.group_name,
                name = %schema.name,
                id = %id,
                "content index hit"
            );
            return Ok(SchemaProperties {
                id,
                format: schema.format,
                version: None,
            });
        }

        debug!(
            group = %schema.group_name,
            name = %schema.name,
            key = %key,
            "content index miss, contacting registry"
        );

        let properties = self
            .service
            .register_schema(schema.group_name, schema.name, schema.format, schema.content)
            .await
            .inspect_err(|e| {
                warn!(
                    group = %schema.group_name,
                    name = %schema.name,
                    error = %e,
                    "schema registration failed"
                )
            })?;

        self.cache.insert_id(key, &properties.id);
        if self.options.cache_registered_content {
            self.cache.insert_schema(
                &properties.id,
                CachedSchema {
                    definition: schema.content.to_string(),
                    format: schema.format,
                    version: properties.version,
                },
            );
        }

        info!(
            group = %schema.group_name,
            name = %schema.name,
            id = %properties.id,
            "resolved schema id from registry"
        );

        Ok(properties)
    }

    /// Register a schema. Same operation as `get_schema_properties`: the
    /// registry decides whether the content is new.
    pub async fn register_schema(
        &self,
        description: &SchemaDescription,
    ) -> Result<SchemaProperties> {
        self.register_or_fetch_id(description).await
    }

    /// Look up the id of an already registered schema
    pub async fn get_schema_properties(
        &self,
        description: &SchemaDescription,
    ) -> Result<SchemaProperties> {
        self.register_or_fetch_id(description).await
    }

    /// Fetch schema content by id.
    ///
    /// Content obtained from the registry is its stored form, which may be a
    /// normalized rewrite of what was originally submitted.
    pub async fn fetch_content_by_id(&self, id: &str) -> Result<Schema> {
        let id = validate_id(id)?;

        if let Some(cached) = self.cache.lookup_schema(id) {
            debug!(id = %id, "id index hit");
            return Ok(cached.into_schema(id));
        }

        debug!(id = %id, "id index miss, contacting registry");

        let schema = self
            .service
            .get_schema_by_id(id)
            .await
            .inspect_err(|e| warn!(id = %id, error = %e, "schema lookup failed"))?;

        self.cache.insert_schema(
            id,
            CachedSchema {
                definition: schema.definition.clone(),
                format: schema.properties.format,
                version: schema.properties.version,
            },
        );

        Ok(schema)
    }

    /// Alias of `fetch_content_by_id`
    pub async fn get_schema(&self, id: &str) -> Result<Schema> {
        self.fetch_content_by_id(id).await
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }
}

/// A builder for configuring and creating a `SchemaRegistryClient` instance.
///
/// A registry service is required; options default to `ClientOptions::default()`.
#[derive(Debug, Default)]
pub struct SchemaRegistryClientBuilder {
    service: Option<Arc<dyn RegistryService>>,
    options: ClientOptions,
}

impl SchemaRegistryClientBuilder {
    /// Sets the registry service the client forwards cache misses to.
    pub fn with_service<S: RegistryService + 'static>(mut self, service: S) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Sets a registry service that is shared with other owners.
    pub fn with_shared_service(mut self, service: Arc<dyn RegistryService>) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Restricts the serialization formats the client accepts.
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = SchemaFormat>) -> Self {
        self.options.formats = formats.into_iter().collect();
        self
    }

    pub fn cache_registered_content(mut self, enabled: bool) -> Self {
        self.options.cache_registered_content = enabled;
        self
    }

    /// Constructs the client with empty indices.
    pub fn build(self) -> Result<SchemaRegistryClient> {
        let service = self.service.ok_or_else(|| {
            RegistryError::Configuration("a registry service is required".into())
        })?;
        self.options.check()?;

        Ok(SchemaRegistryClient {
            service,
            cache: Arc::new(SchemaCache::new()),
            options: self.options,
        })
    }
}
