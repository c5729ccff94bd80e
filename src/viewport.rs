use std::sync::{Arc, Mutex, MutexGuard, Weak};

use super::gate::MobileGate;
use super::types::Environment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    Resize,
    OrientationChange,
}

type Listener = Arc<dyn Fn(ViewportEvent, &Environment) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    // A listener that panicked cannot leave the registry half-updated.
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Viewport change notifications for resize-sensitive consumers.
#[derive(Default, Clone)]
pub struct ViewportEvents {
    registry: Arc<Mutex<Registry>>,
}

/// Keeps a listener registered; dropping it unregisters the listener.
#[must_use = "dropping a ViewportSubscription immediately unregisters its listener"]
pub struct ViewportSubscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl ViewportEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> ViewportSubscription
    where
        F: Fn(ViewportEvent, &Environment) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        ViewportSubscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Re-classify `gate` on every viewport event for as long as the returned
    /// subscription lives.
    pub fn attach_gate(&self, gate: Arc<Mutex<MobileGate>>) -> ViewportSubscription {
        self.subscribe(move |event, env| {
            let mut gate = gate.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let show = gate.on_viewport_change(env);
            tracing::debug!(?event, show_mobile_landing = show, "viewport changed");
        })
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }

    /// Deliver `event` to every listener registered at the time of the call,
    /// in registration order. Returns the number of listeners notified.
    ///
    /// Listeners run outside the registry lock, so they may subscribe or drop
    /// subscriptions themselves.
    pub fn emit(&self, event: ViewportEvent, env: &Environment) -> usize {
        let listeners: Vec<Listener> = lock(&self.registry)
            .listeners
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in &listeners {
            listener(event, env);
        }
        listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeviceClassifier;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn drop_unsubscribes() {
        let events = ViewportEvents::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let sub = events.subscribe(move |_, _| {
            h.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(events.emit(ViewportEvent::Resize, &Environment::default()), 1);
        drop(sub);
        assert_eq!(events.listener_count(), 0);
        assert_eq!(events.emit(ViewportEvent::Resize, &Environment::default()), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscription_outliving_registry() {
        let events = ViewportEvents::new();
        let sub = events.subscribe(|_, _| {});
        drop(events);
        drop(sub);
    }

    #[test]
    fn attached_gate_follows_orientation() {
        let classifier = Arc::new(DeviceClassifier::new().unwrap());
        let landscape = Environment {
            viewport_width: Some(1024),
            ..Default::default()
        };
        let gate = Arc::new(Mutex::new(MobileGate::new(classifier, &landscape)));
        let events = ViewportEvents::new();
        let _sub = events.attach_gate(Arc::clone(&gate));

        let portrait = Environment {
            viewport_width: Some(600),
            touch_start: true,
            max_touch_points: 2,
            ..Default::default()
        };
        events.emit(ViewportEvent::OrientationChange, &portrait);
        assert!(gate.lock().unwrap().show_mobile_landing());
    }

    #[test]
    fn listener_may_unsubscribe_during_emit() {
        let events = ViewportEvents::new();
        let slot: Arc<Mutex<Option<ViewportSubscription>>> = Arc::new(Mutex::new(None));
        let s = Arc::clone(&slot);
        let sub = events.subscribe(move |_, _| {
            s.lock().unwrap().take();
        });
        *slot.lock().unwrap() = Some(sub);

        assert_eq!(events.emit(ViewportEvent::Resize, &Environment::default()), 1);
        assert_eq!(events.listener_count(), 0);
    }
}
