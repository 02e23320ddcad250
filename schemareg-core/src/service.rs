use crate::errors::Result;
use crate::types::{Schema, SchemaFormat, SchemaProperties};
use async_trait::async_trait;
use std::fmt;

/// The remote registry, as seen by the cache layer.
///
/// Implementations own transport, authentication and retries. Errors are
/// reported as `NotFound` when the registry has no record for the request and
/// as `Service` for every other failure.
#[async_trait]
pub trait RegistryService: Send + Sync + fmt::Debug {
    /// Register content under a group and name, or return the identity of an
    /// equivalent schema that is already registered there.
    async fn register_schema(
        &self,
        group_name: &str,
        name: &str,
        format: SchemaFormat,
        content: &str,
    ) -> Result<SchemaProperties>;

    /// Fetch the registry's stored form of a schema by id
    async fn get_schema_by_id(&self, id: &str) -> Result<Schema>;
}
