use dashmap::DashMap;
use schemareg_core::{ContentKey, Schema, SchemaFormat, SchemaProperties};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Content held by the id index
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CachedSchema {
    pub(crate) definition: String,
    pub(crate) format: SchemaFormat,
    pub(crate) version: Option<u32>,
}

impl CachedSchema {
    pub(crate) fn into_schema(self, id: &str) -> Schema {
        Schema {
            definition: self.definition,
            properties: SchemaProperties {
                id: id.to_string(),
                format: self.format,
                version: self.version,
            },
        }
    }
}

/// Point-in-time view of cache occupancy and hit rates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub ids_cached: usize,
    pub content_keys_cached: usize,
    pub id_hits: u64,
    pub id_misses: u64,
    pub content_hits: u64,
    pub content_misses: u64,
}

/// Two independent, grow-only indices: id -> content and content key -> id.
///
/// Both are write-once per key. Registry ids and content keys never change
/// meaning, so a second population of the same key keeps the first value.
#[derive(Debug, Default)]
pub(crate) struct SchemaCache {
    by_id: DashMap<String, CachedSchema>,
    by_content: DashMap<ContentKey, String>,
    id_hits: AtomicU64,
    id_misses: AtomicU64,
    content_hits: AtomicU64,
    content_misses: AtomicU64,
}

impl SchemaCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lookup_id(&self, key: &ContentKey) -> Option<String> {
        match self.by_content.get(key) {
            Some(id) => {
                self.content_hits.fetch_add(1, Ordering::Relaxed);
                Some(id.value().clone())
            }
            None => {
                self.content_misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub(crate) fn lookup_schema(&self, id: &str) -> Option<CachedSchema> {
        match self.by_id.get(id) {
            Some(schema) => {
                self.id_hits.fetch_add(1, Ordering::Relaxed);
                Some(schema.value().clone())
            }
            None => {
                self.id_misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert if absent; returns the id now held for `key`
    pub(crate) fn insert_id(&self, key: ContentKey, id: &str) -> String {
        self.by_content
            .entry(key)
            .or_insert_with(|| id.to_string())
            .value()
            .clone()
    }

    /// Insert if absent; returns the entry now held for `id`
    pub(crate) fn insert_schema(&self, id: &str, schema: CachedSchema) -> CachedSchema {
        self.by_id
            .entry(id.to_string())
            .or_insert(schema)
            .value()
            .clone()
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            ids_cached: self.by_id.len(),
            content_keys_cached: self.by_content.len(),
            id_hits: self.id_hits.load(Ordering::Relaxed),
            id_misses: self.id_misses.load(Ordering::Relaxed),
            content_hits: self.content_hits.load(Ordering::Relaxed),
            content_misses: self.content_misses.load(Ordering::Relaxed),
        }
    }
}
