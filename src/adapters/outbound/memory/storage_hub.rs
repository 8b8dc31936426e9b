use crate::ports::outbound::slice_storage::ExternalChangeListener;
use crate::ports::outbound::StorageSync;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

struct Registration {
    context_id: u64,
    key: String,
    listener: Arc<dyn Fn(&str) + Send + Sync>,
}

/// StorageHub: in-process stand-in for the platform's cross-context
/// broadcast channel.
///
/// Each context (browser tab, navbar widget host) obtains its own
/// [`HubContext`]; a publish from one context reaches the listeners of
/// every *other* context watching the same key, and never echoes back to
/// the publisher, mirroring storage-event semantics.
pub struct StorageHub {
    next_context_id: AtomicU64,
    registrations: Mutex<Vec<Registration>>,
}

impl StorageHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_context_id: AtomicU64::new(1),
            registrations: Mutex::new(Vec::new()),
        })
    }

    /// Creates a new context handle bound to this hub.
    pub fn context(self: &Arc<Self>) -> Arc<HubContext> {
        let context_id = self.next_context_id.fetch_add(1, Ordering::SeqCst);
        Arc::new(HubContext {
            hub: Arc::clone(self),
            context_id,
        })
    }

    fn publish_from(&self, from_context: u64, key: &str, value: &str) {
        // snapshot the matching listeners so callbacks run without the
        // lock held; a listener may register or publish in turn
        let matching: Vec<Arc<dyn Fn(&str) + Send + Sync>> = {
            let registrations = self
                .registrations
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            registrations
                .iter()
                .filter(|r| r.context_id != from_context && r.key == key)
                .map(|r| Arc::clone(&r.listener))
                .collect()
        };
        for listener in matching {
            listener(value);
        }
    }

    fn register(&self, context_id: u64, key: &str, listener: ExternalChangeListener) {
        let mut registrations = self
            .registrations
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        registrations.push(Registration {
            context_id,
            key: key.to_string(),
            listener: Arc::from(listener),
        });
    }
}

/// One context's handle on the hub; implements the [`StorageSync`] port.
pub struct HubContext {
    hub: Arc<StorageHub>,
    context_id: u64,
}

impl StorageSync for HubContext {
    fn publish(&self, key: &str, value: &str) {
        self.hub.publish_from(self.context_id, key, value);
    }

    fn on_external_change(&self, key: &str, listener: ExternalChangeListener) {
        self.hub.register(self.context_id, key, listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_publish_reaches_other_contexts_only() {
        let hub = StorageHub::new();
        let context_a = hub.context();
        let context_b = hub.context();

        let a_heard = Arc::new(AtomicUsize::new(0));
        let b_heard = Arc::new(AtomicUsize::new(0));

        let a_counter = Arc::clone(&a_heard);
        context_a.on_external_change("cart", Box::new(move |_| {
            a_counter.fetch_add(1, Ordering::SeqCst);
        }));
        let b_counter = Arc::clone(&b_heard);
        context_b.on_external_change("cart", Box::new(move |_| {
            b_counter.fetch_add(1, Ordering::SeqCst);
        }));

        context_a.publish("cart", "[]");

        assert_eq!(a_heard.load(Ordering::SeqCst), 0);
        assert_eq!(b_heard.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_publish_is_scoped_to_key() {
        let hub = StorageHub::new();
        let context_a = hub.context();
        let context_b = hub.context();

        let heard = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&heard);
        context_b.on_external_change("bookmarks", Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        context_a.publish("cart", "[]");
        assert_eq!(heard.load(Ordering::SeqCst), 0);

        context_a.publish("bookmarks", "[]");
        assert_eq!(heard.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_receives_published_payload() {
        let hub = StorageHub::new();
        let context_a = hub.context();
        let context_b = hub.context();

        let payload = Arc::new(Mutex::new(String::new()));
        let payload_clone = Arc::clone(&payload);
        context_b.on_external_change("cart", Box::new(move |value| {
            *payload_clone.lock().unwrap() = value.to_string();
        }));

        context_a.publish("cart", r#"{"items":[1]}"#);
        assert_eq!(*payload.lock().unwrap(), r#"{"items":[1]}"#);
    }
}
