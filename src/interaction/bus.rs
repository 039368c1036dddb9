use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Identifier of the feature whose section is currently in focus, if any.
pub type ActiveFeature = Option<String>;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// Page-scoped publish/subscribe channel.
///
/// A handle is cheap to clone and every clone talks to the same registry.
/// Dispatch is synchronous and follows registration order. Listeners may
/// see the same value more than once and should treat it as a no-op.
pub struct EventBus<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription<T> {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn publish(&self, value: T) {
        // Snapshot so listeners can (un)subscribe while being notified.
        let listeners: Vec<Listener<T>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(&value);
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T> PartialEq for EventBus<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

/// Keeps a listener registered for as long as it lives.
pub struct Subscription<T> {
    id: u64,
    registry: Weak<RefCell<Registry<T>>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_in_registration_order() {
        let bus: EventBus<ActiveFeature> = EventBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = log.clone();
        let _a = bus.subscribe(move |v| l.borrow_mut().push(format!("a:{:?}", v)));
        let l = log.clone();
        let _b = bus.subscribe(move |v| l.borrow_mut().push(format!("b:{:?}", v)));

        bus.publish(Some("rubrics".to_string()));
        bus.publish(None);

        assert_eq!(
            *log.borrow(),
            vec![
                "a:Some(\"rubrics\")",
                "b:Some(\"rubrics\")",
                "a:None",
                "b:None",
            ]
        );
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bus: EventBus<u8> = EventBus::new();
        let hits = Rc::new(RefCell::new(0));

        let h = hits.clone();
        let sub = bus.subscribe(move |_| *h.borrow_mut() += 1);
        bus.publish(1);
        drop(sub);
        bus.publish(2);

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn clones_share_one_registry() {
        let bus: EventBus<u8> = EventBus::new();
        let other = bus.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = seen.clone();
        let _sub = other.subscribe(move |v| s.borrow_mut().push(*v));
        bus.publish(3);

        assert_eq!(*seen.borrow(), vec![3]);
        assert!(bus == other);
        assert!(bus != EventBus::new());
    }

    #[test]
    fn subscribing_during_dispatch_takes_effect_next_time() {
        let bus: EventBus<u8> = EventBus::new();
        let late_hits = Rc::new(RefCell::new(0));
        let holder: Rc<RefCell<Vec<Subscription<u8>>>> = Rc::new(RefCell::new(Vec::new()));

        let bus_inner = bus.clone();
        let holder_inner = holder.clone();
        let late = late_hits.clone();
        let _first = bus.subscribe(move |_| {
            if holder_inner.borrow().is_empty() {
                let late = late.clone();
                let sub = bus_inner.subscribe(move |_| *late.borrow_mut() += 1);
                holder_inner.borrow_mut().push(sub);
            }
        });

        bus.publish(1);
        assert_eq!(*late_hits.borrow(), 0);
        bus.publish(2);
        assert_eq!(*late_hits.borrow(), 1);
    }

    #[test]
    fn unsubscribing_during_dispatch_is_safe() {
        let bus: EventBus<u8> = EventBus::new();
        let slot: Rc<RefCell<Option<Subscription<u8>>>> = Rc::new(RefCell::new(None));

        let s = slot.clone();
        let sub = bus.subscribe(move |_| {
            s.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        bus.publish(1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_bus_is_harmless() {
        let bus: EventBus<u8> = EventBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        drop(sub);
    }
}
