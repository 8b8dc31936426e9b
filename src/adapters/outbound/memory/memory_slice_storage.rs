use crate::ports::outbound::SliceStorage;
use crate::shared::Result;
use dashmap::DashMap;

/// MemorySliceStorage adapter: an in-process key → JSON map.
///
/// Shared between the contexts of one test or embedding, it plays the
/// role of origin-scoped durable storage. The map is thread-safe and
/// suitable for concurrent access.
pub struct MemorySliceStorage {
    entries: DashMap<String, String>,
}

impl MemorySliceStorage {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of persisted keys (for tests/monitoring).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemorySliceStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SliceStorage for MemorySliceStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
