use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Field of a schema request that failed local validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionField {
    GroupName,
    Name,
    Content,
    SerializationFormat,
    Id,
}

impl DescriptionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptionField::GroupName => "group_name",
            DescriptionField::Name => "name",
            DescriptionField::Content => "content",
            DescriptionField::SerializationFormat => "serialization_format",
            DescriptionField::Id => "id",
        }
    }
}

impl fmt::Display for DescriptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Rejected locally, before any cache lookup or remote call
    #[error("invalid {field}: {reason}")]
    Validation {
        field: DescriptionField,
        reason: String,
    },

    #[error("schema not found: {0}")]
    NotFound(String),

    #[error("registry service error: {0}")]
    Service(String),

    #[error("invalid client configuration: {0}")]
    Configuration(String),
}

impl RegistryError {
    pub(crate) fn validation(field: DescriptionField, reason: impl Into<String>) -> Self {
        RegistryError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }

    /// The offending field, for validation failures
    pub fn field(&self) -> Option<DescriptionField> {
        match self {
            RegistryError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
