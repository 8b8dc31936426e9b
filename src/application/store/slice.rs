use crate::ports::outbound::{SliceStorage, StorageSync};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex, RwLock, Weak};

/// Marker for values a slice can hold: serializable, defaultable, and
/// shareable across contexts.
pub trait SliceValue: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> SliceValue for T where T: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {}

enum SliceState<T> {
    /// Rehydration has not completed; readers must not mistake this for
    /// an empty value (avoids the flash of incorrect empty-state UI).
    Loading,
    Ready(T),
}

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct SliceInner<T: SliceValue> {
    key: String,
    storage: Arc<dyn SliceStorage>,
    sync: Arc<dyn StorageSync>,
    state: RwLock<SliceState<T>>,
    subscribers: Mutex<Vec<Listener<T>>>,
}

/// One independently persisted, independently subscribed unit of the
/// client store.
///
/// Reads are synchronous against the in-memory value. Every mutation
/// persists the new value, announces it to other contexts through the
/// [`StorageSync`] port, and notifies local subscribers. Changes made by
/// *other* contexts arrive through the sync port, replace the in-memory
/// value, and notify subscribers the same way (last write wins).
pub struct Slice<T: SliceValue> {
    inner: Arc<SliceInner<T>>,
}

impl<T: SliceValue> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: SliceValue> Slice<T> {
    /// Creates a slice in the loading state without touching storage.
    /// Call [`Slice::rehydrate`] to load the persisted value.
    pub fn new(key: impl Into<String>, storage: Arc<dyn SliceStorage>, sync: Arc<dyn StorageSync>) -> Self {
        let inner = Arc::new(SliceInner {
            key: key.into(),
            storage,
            sync,
            state: RwLock::new(SliceState::Loading),
            subscribers: Mutex::new(Vec::new()),
        });

        let weak: Weak<SliceInner<T>> = Arc::downgrade(&inner);
        inner.sync.on_external_change(
            &inner.key,
            Box::new(move |payload| {
                if let Some(inner) = weak.upgrade() {
                    Slice::apply_external(&inner, payload);
                }
            }),
        );

        Self { inner }
    }

    /// Creates a slice and loads its persisted value immediately.
    pub fn mount(
        key: impl Into<String>,
        storage: Arc<dyn SliceStorage>,
        sync: Arc<dyn StorageSync>,
    ) -> Self {
        let slice = Self::new(key, storage, sync);
        slice.rehydrate();
        slice
    }

    /// Loads the last-persisted value, falling back to the default.
    ///
    /// A corrupt or unparseable persisted value is treated as absent;
    /// storage failures fall back silently the same way. Either way the
    /// slice leaves the loading state.
    pub fn rehydrate(&self) {
        let value = match self.inner.storage.load(&self.inner.key) {
            Ok(Some(serialized)) => serde_json::from_str(&serialized).unwrap_or_default(),
            Ok(None) => T::default(),
            Err(_) => T::default(),
        };
        {
            let mut state = self.inner.state.write().unwrap_or_else(|e| e.into_inner());
            *state = SliceState::Ready(value.clone());
        }
        self.notify(&value);
    }

    /// Whether rehydration has completed.
    pub fn is_ready(&self) -> bool {
        let state = self.inner.state.read().unwrap_or_else(|e| e.into_inner());
        matches!(*state, SliceState::Ready(_))
    }

    /// Synchronous read of the current in-memory value.
    ///
    /// While still loading this returns the default; pair it with
    /// [`Slice::is_ready`] where the distinction matters.
    pub fn get(&self) -> T {
        let state = self.inner.state.read().unwrap_or_else(|e| e.into_inner());
        match &*state {
            SliceState::Ready(value) => value.clone(),
            SliceState::Loading => T::default(),
        }
    }

    /// Applies an update to the current value, persists the result,
    /// announces it to other contexts, and notifies local subscribers.
    ///
    /// # Returns
    /// Whatever the updater returns (domain operations surface their
    /// outcome this way, e.g. a compare toggle result)
    ///
    /// # Errors
    /// Returns a storage error if persisting fails; the in-memory value
    /// is left unchanged in that case.
    pub fn set<R>(&self, updater: impl FnOnce(&mut T) -> R) -> Result<R> {
        let (value, serialized, outcome) = {
            let state = self.inner.state.read().unwrap_or_else(|e| e.into_inner());
            let mut value = match &*state {
                SliceState::Ready(value) => value.clone(),
                SliceState::Loading => T::default(),
            };
            drop(state);

            let outcome = updater(&mut value);
            let serialized =
                serde_json::to_string(&value).map_err(|e| CatalogError::Storage {
                    key: self.inner.key.clone(),
                    details: format!("serialization failed: {}", e),
                })?;
            (value, serialized, outcome)
        };

        self.inner
            .storage
            .save(&self.inner.key, &serialized)
            .map_err(|e| CatalogError::Storage {
                key: self.inner.key.clone(),
                details: e.to_string(),
            })?;

        {
            let mut state = self.inner.state.write().unwrap_or_else(|e| e.into_inner());
            *state = SliceState::Ready(value.clone());
        }

        self.inner.sync.publish(&self.inner.key, &serialized);
        self.notify(&value);
        Ok(outcome)
    }

    /// Registers a callback invoked on every change to this slice,
    /// including changes originating in another context.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) {
        let mut subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        subscribers.push(Arc::new(listener));
    }

    pub fn key(&self) -> &str {
        &self.inner.key
    }

    fn notify(&self, value: &T) {
        // snapshot the listeners so callbacks run without the lock held;
        // a listener may call set or subscribe on this slice in turn
        let snapshot: Vec<Listener<T>> = {
            let subscribers = self
                .inner
                .subscribers
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            subscribers.iter().map(Arc::clone).collect()
        };
        for listener in snapshot {
            listener(value);
        }
    }

    /// Handles a change published by another context: adopt the payload,
    /// or re-read storage if the payload does not parse.
    fn apply_external(inner: &Arc<SliceInner<T>>, payload: &str) {
        let value = match serde_json::from_str(payload) {
            Ok(value) => value,
            Err(_) => match inner.storage.load(&inner.key) {
                Ok(Some(serialized)) => serde_json::from_str(&serialized).unwrap_or_default(),
                _ => T::default(),
            },
        };
        {
            let mut state = inner.state.write().unwrap_or_else(|e| e.into_inner());
            *state = SliceState::Ready(value.clone());
        }
        let slice = Slice {
            inner: Arc::clone(inner),
        };
        slice.notify(&value);
    }
}
