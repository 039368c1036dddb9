use super::bus::{ActiveFeature, EventBus};
use super::debounce::Debouncer;
use super::scheduler::Scheduler;
use super::visibility::{ActivationPolicy, VisibilityState};
use log::debug;

/// Quiet period before a new active region is published.
pub const ACTIVE_DEBOUNCE_MS: u32 = 50;

/// Tracks which of N scroll regions is in focus and publishes it, debounced.
///
/// Enter/leave events update the visible set immediately; the settled active
/// index reaches `publish` only after `delay_ms` without further changes.
pub struct ScrollTracker<S: Scheduler> {
    state: VisibilityState,
    debouncer: Debouncer<Option<usize>, S>,
    torn_down: bool,
}

impl<S: Scheduler> ScrollTracker<S>
where
    S::Handle: 'static,
{
    pub fn new(
        regions: usize,
        policy: ActivationPolicy,
        scheduler: S,
        delay_ms: u32,
        publish: impl Fn(Option<usize>) + 'static,
    ) -> Self {
        Self {
            state: VisibilityState::new(regions, policy),
            debouncer: Debouncer::new(scheduler, delay_ms, publish),
            torn_down: false,
        }
    }

    /// Tracker with one region per label.
    ///
    /// Each settled index goes to `on_active`, then its label is broadcast on
    /// `bus` when there is one.
    pub fn publishing_to(
        bus: Option<EventBus<ActiveFeature>>,
        labels: Vec<String>,
        policy: ActivationPolicy,
        scheduler: S,
        delay_ms: u32,
        on_active: impl Fn(Option<usize>) + 'static,
    ) -> Self {
        let regions = labels.len();
        Self::new(regions, policy, scheduler, delay_ms, move |index| {
            on_active(index);
            if let Some(bus) = &bus {
                bus.publish(index.and_then(|i| labels.get(i).cloned()));
            }
        })
    }

    #[cfg(test)]
    pub fn region_entered(&mut self, index: usize) {
        self.set_visible(index, true);
    }

    #[cfg(test)]
    pub fn region_left(&mut self, index: usize) {
        self.set_visible(index, false);
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if self.torn_down {
            return;
        }
        if index >= self.state.len() {
            debug!("ignoring visibility event for unknown region {}", index);
            return;
        }
        if !self.state.set(index, visible) {
            return;
        }
        let active = self.state.active_index();
        debug!("region {} visible={} -> active {:?}", index, visible, active);
        self.debouncer.push(active);
    }

    /// Active region as of the latest event, before debouncing.
    #[cfg(test)]
    pub fn current(&self) -> Option<usize> {
        self.state.active_index()
    }

    #[cfg(test)]
    pub fn has_pending_update(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Cancels any pending publication; later events are ignored.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.debouncer.close();
        self.state.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::scheduler::manual::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tracker(regions: usize) -> (ScrollTracker<ManualScheduler>, ManualScheduler, Rc<RefCell<Vec<Option<usize>>>>) {
        let scheduler = ManualScheduler::new();
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = published.clone();
        let tracker = ScrollTracker::new(
            regions,
            ActivationPolicy::FirstVisible,
            scheduler.clone(),
            ACTIVE_DEBOUNCE_MS,
            move |active| sink.borrow_mut().push(active),
        );
        (tracker, scheduler, published)
    }

    #[test]
    fn publishes_lowest_visible_region_after_settling() {
        let (mut tracker, scheduler, published) = tracker(3);

        tracker.region_entered(2);
        scheduler.advance(100);
        tracker.region_entered(1);
        scheduler.advance(100);
        tracker.region_left(1);
        scheduler.advance(100);
        tracker.region_left(2);
        scheduler.advance(100);

        assert_eq!(*published.borrow(), vec![Some(2), Some(1), Some(2), None]);
    }

    #[test]
    fn burst_within_window_publishes_once_with_final_state() {
        let (mut tracker, scheduler, published) = tracker(4);

        tracker.region_entered(3);
        scheduler.advance(10);
        tracker.region_entered(1);
        scheduler.advance(10);
        tracker.region_left(1);
        scheduler.advance(10);
        tracker.region_entered(2);
        assert_eq!(tracker.current(), Some(2));
        assert!(published.borrow().is_empty());

        scheduler.advance(u64::from(ACTIVE_DEBOUNCE_MS));
        assert_eq!(*published.borrow(), vec![Some(2)]);
    }

    #[test]
    fn teardown_before_timer_fires_publishes_nothing() {
        let (mut tracker, scheduler, published) = tracker(2);

        tracker.region_entered(0);
        assert!(tracker.has_pending_update());
        tracker.teardown();
        scheduler.advance(1_000);
        tracker.region_entered(1);
        scheduler.advance(1_000);

        assert!(published.borrow().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_tracker_cancels_pending_update() {
        let (mut tracker, scheduler, published) = tracker(2);

        tracker.region_entered(0);
        drop(tracker);
        scheduler.advance(1_000);

        assert!(published.borrow().is_empty());
    }

    #[test]
    fn duplicate_and_unknown_events_do_not_republish() {
        let (mut tracker, scheduler, published) = tracker(2);

        tracker.region_entered(0);
        scheduler.advance(100);
        tracker.region_entered(0);
        tracker.region_left(1);
        tracker.region_entered(9);
        scheduler.advance(100);

        assert_eq!(*published.borrow(), vec![Some(0)]);
    }

    #[test]
    fn broadcasts_labels_on_the_bus() {
        let scheduler = ManualScheduler::new();
        let bus: EventBus<ActiveFeature> = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let _sub = bus.subscribe(move |v| s.borrow_mut().push(v.clone()));
        let local = Rc::new(RefCell::new(Vec::new()));
        let l = local.clone();

        let labels = vec!["instant-feedback".to_string(), "rubric-builder".to_string()];
        let mut tracker = ScrollTracker::publishing_to(
            Some(bus.clone()),
            labels,
            ActivationPolicy::FirstVisible,
            scheduler.clone(),
            ACTIVE_DEBOUNCE_MS,
            move |index| l.borrow_mut().push(index),
        );

        tracker.region_entered(1);
        scheduler.advance(100);
        tracker.region_entered(0);
        scheduler.advance(100);
        tracker.region_left(0);
        tracker.region_left(1);
        scheduler.advance(100);

        assert_eq!(*local.borrow(), vec![Some(1), Some(0), None]);
        assert_eq!(
            *seen.borrow(),
            vec![
                Some("rubric-builder".to_string()),
                Some("instant-feedback".to_string()),
                None,
            ]
        );

        tracker.teardown();
        drop(tracker);
        scheduler.advance(100);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn works_without_a_bus() {
        let scheduler = ManualScheduler::new();
        let local = Rc::new(RefCell::new(Vec::new()));
        let l = local.clone();
        let mut tracker = ScrollTracker::publishing_to(
            None,
            vec!["only".to_string()],
            ActivationPolicy::FirstVisible,
            scheduler.clone(),
            ACTIVE_DEBOUNCE_MS,
            move |index| l.borrow_mut().push(index),
        );

        tracker.region_entered(0);
        tracker.region_entered(3);
        scheduler.advance(100);

        assert_eq!(*local.borrow(), vec![Some(0)]);
    }

    #[test]
    fn last_entered_policy_is_honoured() {
        let scheduler = ManualScheduler::new();
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = published.clone();
        let mut tracker = ScrollTracker::new(
            3,
            ActivationPolicy::LastEntered,
            scheduler.clone(),
            ACTIVE_DEBOUNCE_MS,
            move |active| sink.borrow_mut().push(active),
        );

        tracker.region_entered(0);
        tracker.region_entered(1);
        scheduler.advance(100);

        assert_eq!(*published.borrow(), vec![Some(1)]);
    }
}
