//! Schemareg-Core
//!
//! Data model, validation and the registry service contract shared by the
//! schema registry client.

mod errors;
pub use errors::{DescriptionField, RegistryError, Result};

mod types;
pub use types::{Schema, SchemaDescription, SchemaFormat, SchemaProperties};

mod validation;
pub use validation::{validate, validate_id, validate_with, ValidSchema};

mod content_key;
pub use content_key::ContentKey;

mod service;
pub use service::RegistryService;

mod providers;
pub use providers::in_memory::InMemoryRegistry;
