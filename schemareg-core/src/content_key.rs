use crate::validation::ValidSchema;
use sha2::{Digest, Sha256};
use std::fmt;

/// Lookup key for the content index, derived from a schema's coordinates and
/// its exact content.
///
/// Content is hashed byte for byte. Two descriptions that differ only in
/// whitespace produce different keys; canonical form belongs to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentKey(String);

impl ContentKey {
    pub fn derive(schema: &ValidSchema<'_>) -> Self {
        let mut hasher = Sha256::new();
        // Length prefixes keep field boundaries unambiguous
        for field in [
            schema.group_name,
            schema.name,
            schema.format.as_str(),
            schema.content,
        ] {
            hasher.update((field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
        ContentKey(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
