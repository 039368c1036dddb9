use crate::config;
use super::bus::{ActiveFeature, EventBus};
use super::observer::RegionObserver;
use super::scheduler::GlooScheduler;
use super::tracker::{ScrollTracker, ACTIVE_DEBOUNCE_MS};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

/// Observes `regions` and returns the debounced index of the active one.
///
/// When an `EventBus<ActiveFeature>` is in context, the matching label is
/// broadcast on it as well. Observers and the pending timer are released
/// when the component unmounts or the regions change.
#[hook]
pub fn use_scroll_tracker(regions: Vec<NodeRef>, labels: Vec<String>) -> Option<usize> {
    let bus = use_context::<EventBus<ActiveFeature>>();
    let active = use_state(|| None::<usize>);

    {
        let setter = active.setter();
        use_effect_with_deps(
            move |(regions, labels, bus): &(Vec<NodeRef>, Vec<String>, Option<EventBus<ActiveFeature>>)| {
                let tracker = Rc::new(RefCell::new(ScrollTracker::publishing_to(
                    bus.clone(),
                    labels.clone(),
                    config::activation_policy(),
                    GlooScheduler,
                    ACTIVE_DEBOUNCE_MS,
                    move |index| setter.set(index),
                )));

                let observers: Vec<RegionObserver> = regions
                    .iter()
                    .enumerate()
                    .filter_map(|(index, node)| {
                        let element = node.cast::<Element>()?;
                        let tracker = Rc::downgrade(&tracker);
                        let observed = RegionObserver::observe(&element, move |visible| {
                            if let Some(tracker) = tracker.upgrade() {
                                tracker.borrow_mut().set_visible(index, visible);
                            }
                        });
                        match observed {
                            Ok(observer) => Some(observer),
                            Err(e) => {
                                debug!("region {} not tracked: {}", index, e);
                                None
                            }
                        }
                    })
                    .collect();

                move || {
                    drop(observers);
                    tracker.borrow_mut().teardown();
                }
            },
            (regions, labels, bus),
        );
    }

    *active
}

/// Latest value seen on the page's active-feature bus.
#[hook]
pub fn use_active_feature() -> ActiveFeature {
    let bus = use_context::<EventBus<ActiveFeature>>();
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |bus: &Option<EventBus<ActiveFeature>>| {
                let subscription = bus.as_ref().map(|bus| {
                    bus.subscribe(move |feature: &ActiveFeature| active.set(feature.clone()))
                });
                move || drop(subscription)
            },
            bus,
        );
    }

    (*active).clone()
}
