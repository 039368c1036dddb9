use super::scheduler::Scheduler;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct Pending<T, H> {
    value: Option<T>,
    timer: Option<H>,
    closed: bool,
}

/// Collapses a burst of values into the last one, delivered once the stream
/// has been quiet for `delay_ms`.
///
/// Every `push` restarts the quiet period. `close` (or dropping the
/// debouncer) cancels whatever is in flight, and nothing is delivered after
/// that point.
pub struct Debouncer<T: 'static, S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Rc<RefCell<Pending<T, S::Handle>>>,
    sink: Rc<dyn Fn(T)>,
}

impl<T: 'static, S: Scheduler> Debouncer<T, S>
where
    S::Handle: 'static,
{
    pub fn new(scheduler: S, delay_ms: u32, sink: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: Rc::new(RefCell::new(Pending {
                value: None,
                timer: None,
                closed: false,
            })),
            sink: Rc::new(sink),
        }
    }

    pub fn push(&self, value: T) {
        if self.pending.borrow().closed {
            return;
        }

        let weak: Weak<RefCell<Pending<T, S::Handle>>> = Rc::downgrade(&self.pending);
        let sink = self.sink.clone();
        let task = Box::new(move || {
            let Some(pending) = weak.upgrade() else {
                return;
            };
            // The fired handle stays in place; it is replaced on the next push.
            let value = {
                let mut pending = pending.borrow_mut();
                if pending.closed {
                    return;
                }
                pending.value.take()
            };
            if let Some(value) = value {
                sink(value);
            }
        });

        let timer = self.scheduler.schedule(self.delay_ms, task);
        let previous = {
            let mut pending = self.pending.borrow_mut();
            pending.value = Some(value);
            pending.timer.replace(timer)
        };
        // Cancels the superseded timer outside the borrow.
        drop(previous);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().value.is_some()
    }

    /// Drops the pending value and its timer. The debouncer stays usable.
    pub fn cancel(&self) {
        let timer = {
            let mut pending = self.pending.borrow_mut();
            pending.value = None;
            pending.timer.take()
        };
        drop(timer);
    }

    /// Cancels and refuses any further pushes.
    pub fn close(&self) {
        self.pending.borrow_mut().closed = true;
        self.cancel();
    }
}

impl<T: 'static, S: Scheduler> Drop for Debouncer<T, S> {
    fn drop(&mut self) {
        let timer = {
            let mut pending = self.pending.borrow_mut();
            pending.closed = true;
            pending.value = None;
            pending.timer.take()
        };
        drop(timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::scheduler::manual::ManualScheduler;

    fn recording(scheduler: &ManualScheduler, delay: u32) -> (Debouncer<u32, ManualScheduler>, Rc<RefCell<Vec<u32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let debouncer = Debouncer::new(scheduler.clone(), delay, move |v| sink.borrow_mut().push(v));
        (debouncer, seen)
    }

    #[test]
    fn delivers_after_quiet_period() {
        let scheduler = ManualScheduler::new();
        let (debouncer, seen) = recording(&scheduler, 50);

        debouncer.push(7);
        scheduler.advance(49);
        assert!(seen.borrow().is_empty());
        assert!(debouncer.is_pending());

        scheduler.advance(1);
        assert_eq!(*seen.borrow(), vec![7]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn burst_collapses_to_last_value() {
        let scheduler = ManualScheduler::new();
        let (debouncer, seen) = recording(&scheduler, 50);

        for v in 1..=5 {
            debouncer.push(v);
            scheduler.advance(10);
        }
        scheduler.advance(100);

        assert_eq!(*seen.borrow(), vec![5]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn each_push_restarts_the_window() {
        let scheduler = ManualScheduler::new();
        let (debouncer, seen) = recording(&scheduler, 50);

        debouncer.push(1);
        scheduler.advance(40);
        debouncer.push(2);
        scheduler.advance(40);
        assert!(seen.borrow().is_empty());
        scheduler.advance(10);
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn separate_bursts_deliver_separately() {
        let scheduler = ManualScheduler::new();
        let (debouncer, seen) = recording(&scheduler, 50);

        debouncer.push(1);
        scheduler.advance(60);
        debouncer.push(2);
        debouncer.push(3);
        scheduler.advance(60);

        assert_eq!(*seen.borrow(), vec![1, 3]);
    }

    #[test]
    fn close_suppresses_in_flight_value() {
        let scheduler = ManualScheduler::new();
        let (debouncer, seen) = recording(&scheduler, 50);

        debouncer.push(1);
        debouncer.close();
        debouncer.push(2);
        scheduler.advance(500);

        assert!(seen.borrow().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn drop_cancels_timer() {
        let scheduler = ManualScheduler::new();
        let (debouncer, seen) = recording(&scheduler, 50);

        debouncer.push(1);
        drop(debouncer);
        scheduler.advance(500);

        assert!(seen.borrow().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancel_keeps_debouncer_usable() {
        let scheduler = ManualScheduler::new();
        let (debouncer, seen) = recording(&scheduler, 50);

        debouncer.push(1);
        debouncer.cancel();
        scheduler.advance(100);
        debouncer.push(2);
        scheduler.advance(100);

        assert_eq!(*seen.borrow(), vec![2]);
    }
}
