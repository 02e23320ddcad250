#![allow(dead_code)]

use async_trait::async_trait;
use schemareg_client::{
    InMemoryRegistry, RegistryError, RegistryService, Result, Schema, SchemaDescription,
    SchemaFormat, SchemaProperties, SchemaRegistryClient,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const GROUP: &str = "samples_group";

pub const USER_SCHEMA: &str = r#"{"type":"record","name":"User","namespace":"com.example.schemaregistry","fields":[{"name":"name","type":"string"},{"name":"favoriteNumber","type":"int"}]}"#;

/// Same schema as `USER_SCHEMA`, with embedded newlines and indentation
pub const USER_SCHEMA_PRETTY: &str = r#"{
  "type": "record",
  "name": "User",
  "namespace": "com.example.schemaregistry",
  "fields": [
    { "name": "name", "type": "string" },
    { "name": "favoriteNumber", "type": "int" }
  ]
}"#;

pub fn user_description() -> SchemaDescription {
    SchemaDescription::new(GROUP, "com.example.User", SchemaFormat::Avro, USER_SCHEMA)
}

/// Registry wrapper that counts remote calls, optionally delays them and can
/// be told to fail the next call.
#[derive(Debug, Clone, Default)]
pub struct CountingService {
    inner: InMemoryRegistry,
    register_calls: Arc<AtomicUsize>,
    get_calls: Arc<AtomicUsize>,
    delay: Option<Duration>,
    fail_next: Arc<Mutex<Option<RegistryError>>>,
}

impl CountingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fail_next(&self, error: RegistryError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn network_calls(&self) -> usize {
        self.register_calls() + self.get_calls()
    }

    async fn before_call(&self) -> Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let failure = self.fail_next.lock().unwrap().take();
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RegistryService for CountingService {
    async fn register_schema(
        &self,
        group_name: &str,
        name: &str,
        format: SchemaFormat,
        content: &str,
    ) -> Result<SchemaProperties> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.before_call().await?;
        self.inner
            .register_schema(group_name, name, format, content)
            .await
    }

    async fn get_schema_by_id(&self, id: &str) -> Result<Schema> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.before_call().await?;
        self.inner.get_schema_by_id(id).await
    }
}

pub fn client_for(service: &CountingService) -> SchemaRegistryClient {
    SchemaRegistryClient::builder()
        .with_service(service.clone())
        .build()
        .expect("client with a service always builds")
}
