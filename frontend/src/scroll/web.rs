use std::collections::HashMap;

use log::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{ElementId, ScrollHost, WeakScrollSignal};

struct ThresholdObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    elements: usize,
}

/// Browser host: one window `scroll` listener plus one
/// `IntersectionObserver` per distinct threshold.
#[derive(Default)]
pub struct WindowHost {
    signal: Option<WeakScrollSignal>,
    scroll_listener: Option<Closure<dyn Fn()>>,
    observers: HashMap<u32, ThresholdObserver>,
    observed: HashMap<ElementId, (u32, Element)>,
}

fn threshold_key(threshold: f64) -> u32 {
    (threshold.clamp(0.0, 1.0) * 1000.0).round() as u32
}

fn find_element(element: &ElementId) -> Option<Element> {
    window()?.document()?.get_element_by_id(element.as_str())
}

impl WindowHost {
    fn observer_for(&mut self, threshold: f64) -> Result<&mut ThresholdObserver, JsValue> {
        let key = threshold_key(threshold);
        if !self.observers.contains_key(&key) {
            let signal = self.signal.clone();
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _observer: IntersectionObserver| {
                    let Some(signal) = signal.as_ref().and_then(WeakScrollSignal::upgrade) else {
                        return;
                    };
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let id = entry.target().id();
                        signal.dispatch_intersection(&ElementId::from(id.as_str()), entry.is_intersecting());
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

            self.observers.insert(
                key,
                ThresholdObserver {
                    observer,
                    _callback: callback,
                    elements: 0,
                },
            );
        }
        self.observers
            .get_mut(&key)
            .ok_or_else(|| JsValue::from_str("observer missing"))
    }
}

impl ScrollHost for WindowHost {
    fn attach(&mut self, signal: WeakScrollSignal) {
        self.signal = Some(signal.clone());

        let Some(window) = window() else {
            error!("no window, scroll effects disabled");
            return;
        };

        let listener = Closure::<dyn Fn()>::new(move || {
            let Some(signal) = signal.upgrade() else {
                return;
            };
            if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                signal.dispatch_scroll(offset);
            }
        });

        match window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()) {
            Ok(()) => self.scroll_listener = Some(listener),
            Err(e) => error!("failed to add scroll listener: {:?}", e),
        }
    }

    fn detach(&mut self) {
        if let (Some(window), Some(listener)) = (window(), self.scroll_listener.take()) {
            if let Err(e) =
                window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                error!("failed to remove scroll listener: {:?}", e);
            }
        }
        for (_, entry) in self.observers.drain() {
            entry.observer.disconnect();
        }
        self.observed.clear();
        self.signal = None;
    }

    fn observe(&mut self, element: &ElementId, threshold: f64) {
        let Some(target) = find_element(element) else {
            warn!("element #{} not in the document, not observing", element);
            return;
        };

        match self.observer_for(threshold) {
            Ok(entry) => {
                entry.observer.observe(&target);
                entry.elements += 1;
            }
            Err(e) => {
                error!("failed to create intersection observer: {:?}", e);
                return;
            }
        }
        self.observed
            .insert(element.clone(), (threshold_key(threshold), target));
    }

    fn unobserve(&mut self, element: &ElementId) {
        let Some((key, target)) = self.observed.remove(element) else {
            return;
        };
        let empty = match self.observers.get_mut(&key) {
            Some(entry) => {
                entry.observer.unobserve(&target);
                entry.elements = entry.elements.saturating_sub(1);
                entry.elements == 0
            }
            None => false,
        };
        if empty {
            if let Some(entry) = self.observers.remove(&key) {
                entry.observer.disconnect();
            }
        }
    }

    fn current_offset(&self) -> Option<f64> {
        window()?.scroll_y().ok()
    }
}
