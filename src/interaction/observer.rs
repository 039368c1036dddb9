use crate::error::SiteError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of a region that has to be on screen for it to count as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;
/// Shrinks the viewport to its middle band so regions activate near the centre.
pub const ROOT_MARGIN: &str = "-20% 0px -20% 0px";

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches one element and reports enter/leave transitions.
///
/// Disconnects on drop, after which the callback is never invoked again.
pub struct RegionObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl RegionObserver {
    pub fn observe(element: &Element, mut on_change: impl FnMut(bool) + 'static) -> Result<Self, SiteError> {
        let callback: EntryCallback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting() && entry.intersection_ratio() >= VISIBILITY_THRESHOLD);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| SiteError::Dom(format!("IntersectionObserver unavailable: {:?}", e)))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RegionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
