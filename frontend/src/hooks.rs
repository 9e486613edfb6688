use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::reveal::{Reveal, RevealSequencer, StaggerGroup};
use crate::scroll::{ElementId, ScrollSignal};

/// Shared reveal state, provided through context next to the
/// [`ScrollSignal`].
#[derive(Clone, Default)]
pub struct SequencerHandle(Rc<RefCell<RevealSequencer>>);

impl PartialEq for SequencerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Current scroll offset; re-renders the caller on every scroll event.
#[hook]
pub fn use_scroll_offset() -> f64 {
    let signal = use_context::<ScrollSignal>();
    let offset = use_state(|| signal.as_ref().map(ScrollSignal::offset_y).unwrap_or_default());

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |signal| {
                let subscription = signal.as_ref().map(|signal| {
                    offset.set(signal.offset_y());
                    signal.on_scroll(move |y| offset.set(y))
                });
                move || drop(subscription)
            },
            signal,
        );
    }

    *offset
}

/// Whether the element with DOM id `id` has been revealed. Flips to `true`
/// once and stays there.
#[hook]
pub fn use_reveal(id: &'static str) -> bool {
    let signal = use_context::<ScrollSignal>();
    let sequencer = use_context::<SequencerHandle>();
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(signal, sequencer)| {
                let element = ElementId::from(id);
                let subscription = match (signal, sequencer) {
                    (Some(signal), Some(SequencerHandle(sequencer))) => {
                        sequencer.borrow_mut().register(element.clone());
                        let sequencer = sequencer.clone();
                        let watched = element.clone();
                        Some(signal.observe_intersection(element.clone(), REVEAL_THRESHOLD, move |visible| {
                            if sequencer.borrow_mut().on_intersection(&watched, visible).is_some() {
                                revealed.set(true);
                            }
                        }))
                    }
                    _ => {
                        warn!("no scroll context for #{}, showing it immediately", id);
                        revealed.set(true);
                        None
                    }
                };

                let sequencer = sequencer.clone();
                move || {
                    drop(subscription);
                    if let Some(SequencerHandle(sequencer)) = sequencer {
                        sequencer.borrow_mut().unregister(&element);
                    }
                }
            },
            (signal, sequencer),
        );
    }

    *revealed
}

/// Per-child reveal flags for a stagger group watched through the
/// container `id`. Children flip in sequence order, `increment` seconds
/// apart; unmounting cancels any that have not fired yet.
#[hook]
pub fn use_stagger_reveal(id: &'static str, len: usize, base_delay: f64, increment: f64) -> Vec<bool> {
    let signal = use_context::<ScrollSignal>();
    let sequencer = use_context::<SequencerHandle>();
    let shown = use_state(|| 0usize);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(signal, sequencer)| {
                let element = ElementId::from(id);
                let timers: Rc<RefCell<Vec<Timeout>>> = Rc::default();
                let subscription = match (signal, sequencer) {
                    (Some(signal), Some(SequencerHandle(sequencer))) => {
                        let group = StaggerGroup::new(len, base_delay, increment);
                        sequencer.borrow_mut().register_group(element.clone(), group);
                        let sequencer = sequencer.clone();
                        let watched = element.clone();
                        let timers = timers.clone();
                        Some(signal.observe_intersection(element.clone(), REVEAL_THRESHOLD, move |visible| {
                            let Some(Reveal::Group(schedule)) =
                                sequencer.borrow_mut().on_intersection(&watched, visible)
                            else {
                                return;
                            };
                            let mut pending = timers.borrow_mut();
                            for child in schedule {
                                let shown = shown.clone();
                                pending.push(Timeout::new(child.delay_millis(), move || {
                                    shown.set(child.index + 1);
                                }));
                            }
                        }))
                    }
                    _ => {
                        warn!("no scroll context for #{}, showing it immediately", id);
                        shown.set(len);
                        None
                    }
                };

                let sequencer = sequencer.clone();
                move || {
                    drop(subscription);
                    timers.borrow_mut().clear();
                    if let Some(SequencerHandle(sequencer)) = sequencer {
                        sequencer.borrow_mut().unregister(&element);
                    }
                }
            },
            (signal, sequencer),
        );
    }

    (0..len).map(|index| index < *shown).collect()
}
