use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A storage key whose value was just rewritten or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub key: String,
}

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&StoreChange) + Send + Sync>;

/// Synchronous fan-out of write notifications to registered listeners.
///
/// Listeners run on the writing thread while the listener table is locked,
/// so a listener must not subscribe or unsubscribe from inside its callback.
pub struct ChangeNotifier {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&StoreChange) + Send + Sync + 'static) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        listeners.push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        listeners.retain(|(listener_id, _)| *listener_id != id.0);
    }

    pub(crate) fn emit(&self, change: &StoreChange) {
        let listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        for (_, listener) in listeners.iter() {
            listener(change);
        }
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_subscribed_listener_sees_changes() {
        let notifier = ChangeNotifier::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        notifier.subscribe(move |change| {
            sink.lock().unwrap().push(change.key.clone());
        });

        notifier.emit(&StoreChange {
            key: "favorites".to_string(),
        });
        notifier.emit(&StoreChange {
            key: "customLists".to_string(),
        });

        assert_eq!(*seen.lock().unwrap(), vec!["favorites", "customLists"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let notifier = ChangeNotifier::new();
        let seen = Arc::new(Mutex::new(0u32));

        let sink = Arc::clone(&seen);
        let id = notifier.subscribe(move |_| {
            *sink.lock().unwrap() += 1;
        });

        notifier.emit(&StoreChange {
            key: "watchLater".to_string(),
        });
        notifier.unsubscribe(id);
        notifier.emit(&StoreChange {
            key: "watchLater".to_string(),
        });

        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn test_listeners_are_independent() {
        let notifier = ChangeNotifier::new();
        let first = Arc::new(Mutex::new(0u32));
        let second = Arc::new(Mutex::new(0u32));

        let sink = Arc::clone(&first);
        let first_id = notifier.subscribe(move |_| {
            *sink.lock().unwrap() += 1;
        });
        let sink = Arc::clone(&second);
        notifier.subscribe(move |_| {
            *sink.lock().unwrap() += 1;
        });

        notifier.unsubscribe(first_id);
        notifier.emit(&StoreChange {
            key: "classics".to_string(),
        });

        assert_eq!(*first.lock().unwrap(), 0);
        assert_eq!(*second.lock().unwrap(), 1);
    }
}
