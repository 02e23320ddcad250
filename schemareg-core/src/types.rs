use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serialization formats accepted by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaFormat {
    /// Apache Avro schema (JSON encoded)
    Avro,
    /// JSON Schema document
    Json,
}

impl SchemaFormat {
    pub const ALL: [SchemaFormat; 2] = [SchemaFormat::Avro, SchemaFormat::Json];

    /// Convert to string representation for API calls
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaFormat::Avro => "avro",
            SchemaFormat::Json => "json",
        }
    }
}

impl fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "avro" => Ok(SchemaFormat::Avro),
            "json" => Ok(SchemaFormat::Json),
            _ => Err(format!("unsupported serialization format: '{}'", s)),
        }
    }
}

impl From<SchemaFormat> for String {
    fn from(format: SchemaFormat) -> Self {
        format.as_str().to_string()
    }
}

/// Caller supplied description of a schema: its coordinates and content.
///
/// Every field is optional so that an absent value and an empty one can both
/// be expressed (and rejected) when the description comes from untyped input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescription {
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub serialization_format: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl SchemaDescription {
    pub fn new(
        group_name: impl Into<String>,
        name: impl Into<String>,
        serialization_format: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        SchemaDescription {
            group_name: Some(group_name.into()),
            name: Some(name.into()),
            serialization_format: Some(serialization_format.into()),
            content: Some(content.into()),
        }
    }

    /// Same coordinates, different content
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        SchemaDescription {
            content: Some(content.into()),
            ..self.clone()
        }
    }
}

/// Identity of a registered schema, as assigned by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaProperties {
    /// Opaque, service assigned identifier
    pub id: String,
    pub format: SchemaFormat,
    /// Registry version, when the answer came from the registry itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// Schema content together with its identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema content as stored by the registry (possibly normalized)
    pub definition: String,
    pub properties: SchemaProperties,
}
