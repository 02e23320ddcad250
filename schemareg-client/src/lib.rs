//! Schemareg-Client
//!
//! Schemareg-Client -- cache-through client for a remote schema registry

mod cache;
pub use cache::CacheStats;

mod client;
pub use client::{SchemaRegistryClient, SchemaRegistryClientBuilder};

mod options;
pub use options::ClientOptions;

pub use schemareg_core::{
    validate, validate_id, validate_with, ContentKey, DescriptionField, InMemoryRegistry,
    RegistryError, RegistryService, Result, Schema, SchemaDescription, SchemaFormat,
    SchemaProperties, ValidSchema,
};
