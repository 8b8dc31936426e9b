use crate::shared::Result;

/// SliceStorage port for durable client-side storage
///
/// This port abstracts the key → serialized-JSON string storage used to
/// persist store slices across page reloads. Implementations must tolerate
/// concurrent access from multiple contexts of the same profile.
pub trait SliceStorage: Send + Sync {
    /// Loads the serialized value for a slice key
    ///
    /// # Arguments
    /// * `key` - The slice key (e.g., "quote-cart-storage")
    ///
    /// # Returns
    /// The serialized JSON string, or `None` if nothing was ever persisted
    ///
    /// # Errors
    /// Returns an error only for infrastructure failures (I/O, permissions).
    /// A missing key is not an error.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Persists the serialized value for a slice key, overwriting any
    /// previous value (last write wins)
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the persisted value for a slice key; no-op if absent
    fn remove(&self, key: &str) -> Result<()>;
}

/// Callback invoked when another context changes a watched slice.
/// The argument is the new serialized value.
pub type ExternalChangeListener = Box<dyn Fn(&str) + Send + Sync>;

/// StorageSync port for cross-context change notification
///
/// A mutation in one context (browser tab, navbar widget) writes to durable
/// storage and publishes through this port; every *other* context watching
/// the same key is notified so it can re-read and re-render. The publishing
/// context itself is never called back, mirroring storage-event semantics.
pub trait StorageSync: Send + Sync {
    /// Announces a new serialized value for a key to all other contexts
    fn publish(&self, key: &str, value: &str);

    /// Registers a callback fired when a *different* context publishes a
    /// change for the given key
    fn on_external_change(&self, key: &str, listener: ExternalChangeListener);
}
