//! Shared source of scroll offset and element visibility.
//!
//! Every scroll-reactive component subscribes through one [`ScrollSignal`]
//! instead of installing its own window listener. The browser side lives
//! behind [`ScrollHost`] so the registry itself runs anywhere.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

pub mod web;

pub use web::WindowHost;

/// DOM id of an element watched for viewport intersection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(Rc<str>);

impl ElementId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        ElementId(Rc::from(id))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latest scroll sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset_y: f64,
}

impl ScrollState {
    /// Overscroll bounce can report negative offsets; those read as the top.
    pub fn new(offset_y: f64) -> Self {
        Self {
            offset_y: offset_y.max(0.0),
        }
    }
}

/// The environment that produces scroll and intersection events.
///
/// `attach` is called when the first subscriber arrives and `detach` when
/// the last one leaves. Each element is observed once, at the threshold of
/// whichever subscriber asked for it first.
pub trait ScrollHost {
    fn attach(&mut self, signal: WeakScrollSignal);
    fn detach(&mut self);
    fn observe(&mut self, element: &ElementId, threshold: f64);
    fn unobserve(&mut self, element: &ElementId);

    /// Offset at attach time, if the host can read it.
    fn current_offset(&self) -> Option<f64> {
        None
    }
}

type ScrollCallback = Rc<dyn Fn(f64)>;
type IntersectionCallback = Rc<dyn Fn(bool)>;

struct Watcher {
    element: ElementId,
    callback: IntersectionCallback,
}

#[derive(Default)]
struct Registry {
    state: ScrollState,
    next_key: u64,
    scroll_subs: BTreeMap<u64, ScrollCallback>,
    watchers: BTreeMap<u64, Watcher>,
    observed: HashMap<ElementId, usize>,
    attached: bool,
}

impl Registry {
    fn next_key(&mut self) -> u64 {
        self.next_key += 1;
        self.next_key
    }

    fn subscriber_count(&self) -> usize {
        self.scroll_subs.len() + self.watchers.len()
    }
}

// The host sits in its own cell so it can dispatch back into the registry
// while one of its methods is running.
struct Inner {
    registry: RefCell<Registry>,
    host: RefCell<Box<dyn ScrollHost>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Key {
    Scroll(u64),
    Intersection(u64),
}

/// Reference-counted registry of scroll and intersection subscribers.
#[derive(Clone)]
pub struct ScrollSignal {
    inner: Rc<Inner>,
}

/// Non-owning handle given to hosts so their listeners don't keep the
/// registry alive.
#[derive(Clone)]
pub struct WeakScrollSignal(Weak<Inner>);

impl WeakScrollSignal {
    pub fn upgrade(&self) -> Option<ScrollSignal> {
        self.0.upgrade().map(|inner| ScrollSignal { inner })
    }
}

impl PartialEq for ScrollSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.inner.registry.borrow();
        f.debug_struct("ScrollSignal")
            .field("offset_y", &registry.state.offset_y)
            .field("subscribers", &registry.subscriber_count())
            .field("attached", &registry.attached)
            .finish()
    }
}

impl ScrollSignal {
    pub fn new(host: impl ScrollHost + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                registry: RefCell::new(Registry::default()),
                host: RefCell::new(Box::new(host)),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakScrollSignal {
        WeakScrollSignal(Rc::downgrade(&self.inner))
    }

    pub fn offset_y(&self) -> f64 {
        self.inner.registry.borrow().state.offset_y
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.registry.borrow().subscriber_count()
    }

    pub fn is_attached(&self) -> bool {
        self.inner.registry.borrow().attached
    }

    /// Calls `callback` with the offset on every scroll event.
    pub fn on_scroll(&self, callback: impl Fn(f64) + 'static) -> Subscription {
        let key = {
            let mut registry = self.inner.registry.borrow_mut();
            let key = registry.next_key();
            registry.scroll_subs.insert(key, Rc::new(callback));
            key
        };
        self.retain();
        Subscription::new(self, Key::Scroll(key))
    }

    /// Calls `callback` whenever `element` crosses `threshold` visibility.
    pub fn observe_intersection(
        &self,
        element: ElementId,
        threshold: f64,
        callback: impl Fn(bool) + 'static,
    ) -> Subscription {
        let (key, first_watcher) = {
            let mut registry = self.inner.registry.borrow_mut();
            let key = registry.next_key();
            registry.watchers.insert(
                key,
                Watcher {
                    element: element.clone(),
                    callback: Rc::new(callback),
                },
            );
            let count = registry.observed.entry(element.clone()).or_insert(0);
            *count += 1;
            (key, *count == 1)
        };
        self.retain();
        if first_watcher {
            self.inner.host.borrow_mut().observe(&element, threshold);
        }
        Subscription::new(self, Key::Intersection(key))
    }

    pub fn dispatch_scroll(&self, offset_y: f64) {
        let (offset_y, callbacks) = {
            let mut registry = self.inner.registry.borrow_mut();
            registry.state = ScrollState::new(offset_y);
            let callbacks: Vec<(u64, ScrollCallback)> = registry
                .scroll_subs
                .iter()
                .map(|(key, callback)| (*key, callback.clone()))
                .collect();
            (registry.state.offset_y, callbacks)
        };

        for (key, callback) in callbacks {
            // An earlier callback may have unsubscribed this one.
            if self.inner.registry.borrow().scroll_subs.contains_key(&key) {
                callback(offset_y);
            }
        }
    }

    pub fn dispatch_intersection(&self, element: &ElementId, is_intersecting: bool) {
        let callbacks: Vec<(u64, IntersectionCallback)> = self
            .inner
            .registry
            .borrow()
            .watchers
            .iter()
            .filter(|(_, watcher)| &watcher.element == element)
            .map(|(key, watcher)| (*key, watcher.callback.clone()))
            .collect();

        for (key, callback) in callbacks {
            if self.inner.registry.borrow().watchers.contains_key(&key) {
                callback(is_intersecting);
            }
        }
    }

    fn retain(&self) {
        let attach = {
            let mut registry = self.inner.registry.borrow_mut();
            let attach = !registry.attached && registry.subscriber_count() > 0;
            registry.attached |= attach;
            attach
        };
        if !attach {
            return;
        }

        debug!("installing scroll listeners");
        self.inner.host.borrow_mut().attach(self.downgrade());
        let offset = self.inner.host.borrow().current_offset();
        if let Some(offset) = offset {
            self.inner.registry.borrow_mut().state = ScrollState::new(offset);
        }
    }

    fn release(&self) {
        let detach = {
            let mut registry = self.inner.registry.borrow_mut();
            let detach = registry.attached && registry.subscriber_count() == 0;
            registry.attached &= !detach;
            detach
        };
        if detach {
            debug!("last scroll subscriber left, removing listeners");
            self.inner.host.borrow_mut().detach();
        }
    }

    fn remove(&self, key: Key) {
        let unobserve = {
            let mut registry = self.inner.registry.borrow_mut();
            match key {
                Key::Scroll(key) => {
                    registry.scroll_subs.remove(&key);
                    None
                }
                Key::Intersection(key) => match registry.watchers.remove(&key) {
                    Some(watcher) => {
                        let remaining = match registry.observed.get_mut(&watcher.element) {
                            Some(count) => {
                                *count -= 1;
                                *count
                            }
                            None => 0,
                        };
                        if remaining == 0 {
                            registry.observed.remove(&watcher.element);
                            Some(watcher.element)
                        } else {
                            None
                        }
                    }
                    None => None,
                },
            }
        };

        if let Some(element) = unobserve {
            self.inner.host.borrow_mut().unobserve(&element);
        }
        self.release();
    }
}

/// Live registration with a [`ScrollSignal`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes it immediately"]
pub struct Subscription {
    signal: WeakScrollSignal,
    key: Key,
    active: Cell<bool>,
}

impl Subscription {
    fn new(signal: &ScrollSignal, key: Key) -> Self {
        Self {
            signal: signal.downgrade(),
            key,
            active: Cell::new(true),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Stops further callbacks. Safe to call more than once.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(signal) = self.signal.upgrade() {
            signal.remove(self.key);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("active", &self.active.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum HostCall {
        Attach,
        Detach,
        Observe(String, f64),
        Unobserve(String),
    }

    #[derive(Default, Clone)]
    struct RecordingHost {
        calls: Rc<RefCell<Vec<HostCall>>>,
        offset: Option<f64>,
    }

    impl ScrollHost for RecordingHost {
        fn attach(&mut self, _signal: WeakScrollSignal) {
            self.calls.borrow_mut().push(HostCall::Attach);
        }

        fn detach(&mut self) {
            self.calls.borrow_mut().push(HostCall::Detach);
        }

        fn observe(&mut self, element: &ElementId, threshold: f64) {
            self.calls
                .borrow_mut()
                .push(HostCall::Observe(element.to_string(), threshold));
        }

        fn unobserve(&mut self, element: &ElementId) {
            self.calls
                .borrow_mut()
                .push(HostCall::Unobserve(element.to_string()));
        }

        fn current_offset(&self) -> Option<f64> {
            self.offset
        }
    }

    fn signal() -> (ScrollSignal, Rc<RefCell<Vec<HostCall>>>) {
        let host = RecordingHost::default();
        let calls = host.calls.clone();
        (ScrollSignal::new(host), calls)
    }

    #[test]
    fn attaches_on_first_subscriber_and_detaches_after_last() {
        let (signal, calls) = signal();
        assert!(!signal.is_attached());

        let first = signal.on_scroll(|_| {});
        let second = signal.observe_intersection("stats".into(), 0.1, |_| {});
        assert!(signal.is_attached());
        assert_eq!(signal.subscriber_count(), 2);

        drop(first);
        assert!(signal.is_attached());
        drop(second);
        assert!(!signal.is_attached());

        assert_eq!(
            *calls.borrow(),
            vec![
                HostCall::Attach,
                HostCall::Observe("stats".to_string(), 0.1),
                HostCall::Unobserve("stats".to_string()),
                HostCall::Detach,
            ]
        );
    }

    #[test]
    fn scroll_callbacks_receive_clamped_offset() {
        let (signal, _) = signal();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = signal.on_scroll({
            let seen = seen.clone();
            move |y| seen.borrow_mut().push(y)
        });

        signal.dispatch_scroll(120.0);
        signal.dispatch_scroll(-30.0);

        assert_eq!(*seen.borrow(), vec![120.0, 0.0]);
        assert_eq!(signal.offset_y(), 0.0);
    }

    #[test]
    fn no_callbacks_after_unsubscribe() {
        let (signal, _) = signal();
        let scroll_calls = Rc::new(Cell::new(0));
        let intersection_calls = Rc::new(Cell::new(0));

        let scroll = signal.on_scroll({
            let scroll_calls = scroll_calls.clone();
            move |_| scroll_calls.set(scroll_calls.get() + 1)
        });
        let watch = signal.observe_intersection("hero".into(), 0.1, {
            let intersection_calls = intersection_calls.clone();
            move |_| intersection_calls.set(intersection_calls.get() + 1)
        });

        signal.dispatch_scroll(10.0);
        signal.dispatch_intersection(&"hero".into(), true);

        scroll.unsubscribe();
        scroll.unsubscribe();
        drop(watch);

        signal.dispatch_scroll(20.0);
        signal.dispatch_intersection(&"hero".into(), false);

        assert_eq!(scroll_calls.get(), 1);
        assert_eq!(intersection_calls.get(), 1);
        assert!(!scroll.is_active());
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn intersection_only_reaches_matching_element() {
        let (signal, _) = signal();
        let hits = Rc::new(RefCell::new(Vec::new()));
        let _a = signal.observe_intersection("a".into(), 0.1, {
            let hits = hits.clone();
            move |visible| hits.borrow_mut().push(("a", visible))
        });
        let _b = signal.observe_intersection("b".into(), 0.1, {
            let hits = hits.clone();
            move |visible| hits.borrow_mut().push(("b", visible))
        });

        signal.dispatch_intersection(&"b".into(), true);
        signal.dispatch_intersection(&"a".into(), false);
        signal.dispatch_intersection(&"missing".into(), true);

        assert_eq!(*hits.borrow(), vec![("b", true), ("a", false)]);
    }

    #[test]
    fn shared_element_is_observed_once() {
        let (signal, calls) = signal();
        let first = signal.observe_intersection("grid".into(), 0.1, |_| {});
        let second = signal.observe_intersection("grid".into(), 0.5, |_| {});

        drop(first);
        assert!(!calls
            .borrow()
            .contains(&HostCall::Unobserve("grid".to_string())));
        drop(second);

        let observes = calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, HostCall::Observe(..)))
            .count();
        assert_eq!(observes, 1);
        assert!(calls
            .borrow()
            .contains(&HostCall::Unobserve("grid".to_string())));
    }

    #[test]
    fn callback_can_unsubscribe_a_later_one_mid_dispatch() {
        let (signal, _) = signal();
        let later_calls = Rc::new(Cell::new(0));
        let later: Rc<RefCell<Option<Subscription>>> = Rc::default();

        let _first = signal.on_scroll({
            let later = later.clone();
            move |_| {
                later.borrow_mut().take();
            }
        });
        *later.borrow_mut() = Some(signal.on_scroll({
            let later_calls = later_calls.clone();
            move |_| later_calls.set(later_calls.get() + 1)
        }));

        signal.dispatch_scroll(5.0);
        assert_eq!(later_calls.get(), 0);
    }

    #[test]
    fn reads_initial_offset_from_host() {
        let host = RecordingHost {
            offset: Some(320.0),
            ..Default::default()
        };
        let signal = ScrollSignal::new(host);
        let _sub = signal.on_scroll(|_| {});
        assert_eq!(signal.offset_y(), 320.0);
    }

    #[test]
    fn subscription_outliving_signal_is_harmless() {
        let (signal, _) = signal();
        let sub = signal.on_scroll(|_| {});
        drop(signal);
        sub.unsubscribe();
        assert!(!sub.is_active());
    }
}
