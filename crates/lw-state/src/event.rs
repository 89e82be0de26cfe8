//! Session events and subscriptions
//!
//! Presentation layers (renderer, sound, celebration overlays) subscribe to a
//! session instead of sharing global state.

use std::fmt;

use lw_wheel::{Pool, RotationPlan};

/// Something a presentation layer may react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelEvent<'a> {
    /// Pool replaced (reduction or restart); re-render segments
    PoolChanged(&'a Pool),
    /// A value was drawn; `plan` is `None` when it is revealed without spinning
    SpinStarted {
        value: i64,
        plan: Option<RotationPlan>,
    },
    /// The last value was confirmed
    Exhausted,
    /// Default pool regenerated and storage cleared
    Restarted,
}

/// Handle returned by [`Observers::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&WheelEvent<'_>) + Send + Sync>;

/// Listener registry
#[derive(Default)]
pub struct Observers {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&WheelEvent<'_>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener in subscription order
    pub fn notify(&self, event: &WheelEvent<'_>) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_subscribe_notify_unsubscribe() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::new();

        let a = {
            let seen = Arc::clone(&seen);
            observers.subscribe(move |e| seen.lock().push(format!("a:{e:?}")))
        };
        let b = {
            let seen = Arc::clone(&seen);
            observers.subscribe(move |e| seen.lock().push(format!("b:{e:?}")))
        };
        assert_ne!(a, b);
        assert_eq!(observers.len(), 2);

        observers.notify(&WheelEvent::Restarted);
        assert_eq!(*seen.lock(), vec!["a:Restarted", "b:Restarted"]);

        assert!(observers.unsubscribe(a));
        assert!(!observers.unsubscribe(a));

        observers.notify(&WheelEvent::Exhausted);
        assert_eq!(seen.lock().last().map(String::as_str), Some("b:Exhausted"));
        assert_eq!(seen.lock().len(), 3);
    }
}
