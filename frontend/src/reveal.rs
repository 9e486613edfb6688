//! One-shot reveal animations.
//!
//! Every watched element or stagger group starts `Pending` and moves to
//! `Revealed` the first time it is reported visible. Nothing moves it back,
//! so content never replays its entrance when scrolled past again.

use std::collections::HashMap;

use log::debug;

use crate::scroll::ElementId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionRecord {
    pub element_id: ElementId,
    pub is_intersecting: bool,
    /// Latch; never goes back to false.
    pub has_fired_once: bool,
}

impl IntersectionRecord {
    fn new(element_id: ElementId) -> Self {
        Self {
            element_id,
            is_intersecting: false,
            has_fired_once: false,
        }
    }

    pub fn state(&self) -> RevealState {
        if self.has_fired_once {
            RevealState::Revealed
        } else {
            RevealState::Pending
        }
    }
}

/// Children revealed together, each offset by `increment` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerGroup {
    base_delay: f64,
    increment: f64,
    len: usize,
}

impl StaggerGroup {
    /// Negative delays are raised to zero so the sequence never runs
    /// backwards.
    pub fn new(len: usize, base_delay: f64, increment: f64) -> Self {
        Self {
            base_delay: base_delay.max(0.0),
            increment: increment.max(0.0),
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn delay(&self, index: usize) -> f64 {
        self.base_delay + index as f64 * self.increment
    }

    pub fn schedule(&self) -> Vec<ScheduledChild> {
        (0..self.len)
            .map(|index| ScheduledChild {
                index,
                delay: self.delay(index),
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledChild {
    pub index: usize,
    /// Seconds after the group's trigger.
    pub delay: f64,
}

impl ScheduledChild {
    pub fn delay_millis(&self) -> u32 {
        (self.delay * 1000.0).round() as u32
    }
}

/// What to animate after a trigger fires.
#[derive(Clone, Debug, PartialEq)]
pub enum Reveal {
    Element,
    /// Children in sequence order.
    Group(Vec<ScheduledChild>),
}

struct Entry {
    record: IntersectionRecord,
    group: Option<StaggerGroup>,
}

#[derive(Default)]
pub struct RevealSequencer {
    entries: HashMap<ElementId, Entry>,
}

impl RevealSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, element: ElementId) {
        self.insert(element, None);
    }

    pub fn register_group(&mut self, element: ElementId, group: StaggerGroup) {
        self.insert(element, Some(group));
    }

    fn insert(&mut self, element: ElementId, group: Option<StaggerGroup>) {
        // Re-registering keeps an existing latch.
        self.entries
            .entry(element.clone())
            .and_modify(|entry| entry.group = group)
            .or_insert_with(|| Entry {
                record: IntersectionRecord::new(element),
                group,
            });
    }

    /// Drops the record; a pending reveal will never fire.
    pub fn unregister(&mut self, element: &ElementId) {
        self.entries.remove(element);
    }

    /// Feeds one visibility report. Returns the reveal to perform the first
    /// time `element` becomes visible, `None` otherwise.
    pub fn on_intersection(&mut self, element: &ElementId, is_intersecting: bool) -> Option<Reveal> {
        let entry = self.entries.get_mut(element)?;
        entry.record.is_intersecting = is_intersecting;
        if !is_intersecting || entry.record.has_fired_once {
            return None;
        }

        entry.record.has_fired_once = true;
        debug!("revealing #{}", element);
        Some(match entry.group {
            Some(group) => Reveal::Group(group.schedule()),
            None => Reveal::Element,
        })
    }

    pub fn record(&self, element: &ElementId) -> Option<&IntersectionRecord> {
        self.entries.get(element).map(|entry| &entry.record)
    }

    pub fn state(&self, element: &ElementId) -> Option<RevealState> {
        self.record(element).map(IntersectionRecord::state)
    }

    pub fn is_revealed(&self, element: &ElementId) -> bool {
        self.state(element) == Some(RevealState::Revealed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> ElementId {
        ElementId::from(name)
    }

    #[test]
    fn reveals_once_and_stays_revealed() {
        let mut sequencer = RevealSequencer::new();
        sequencer.register(id("mission"));
        assert_eq!(sequencer.state(&id("mission")), Some(RevealState::Pending));

        assert_eq!(sequencer.on_intersection(&id("mission"), false), None);
        assert_eq!(sequencer.on_intersection(&id("mission"), true), Some(Reveal::Element));

        let mut fired = 0;
        for visible in [false, true, false, true] {
            if sequencer.on_intersection(&id("mission"), visible).is_some() {
                fired += 1;
            }
            assert!(sequencer.is_revealed(&id("mission")));
        }
        assert_eq!(fired, 0);
    }

    #[test]
    fn record_tracks_visibility_after_latch() {
        let mut sequencer = RevealSequencer::new();
        sequencer.register(id("panel"));
        sequencer.on_intersection(&id("panel"), true);
        sequencer.on_intersection(&id("panel"), false);

        let record = sequencer.record(&id("panel")).cloned();
        assert_eq!(
            record,
            Some(IntersectionRecord {
                element_id: id("panel"),
                is_intersecting: false,
                has_fired_once: true,
            })
        );
    }

    #[test]
    fn group_schedule_is_in_sequence_order() {
        let mut sequencer = RevealSequencer::new();
        sequencer.register_group(id("programs"), StaggerGroup::new(3, 0.0, 0.2));

        let Some(Reveal::Group(schedule)) = sequencer.on_intersection(&id("programs"), true) else {
            panic!("group did not reveal");
        };
        let indices: Vec<usize> = schedule.iter().map(|child| child.index).collect();
        let millis: Vec<u32> = schedule.iter().map(ScheduledChild::delay_millis).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(millis, vec![0, 200, 400]);

        assert_eq!(sequencer.on_intersection(&id("programs"), true), None);
    }

    #[test]
    fn stagger_delays_follow_base_plus_index() {
        let group = StaggerGroup::new(5, 0.3, 0.1);
        for index in 0..5 {
            let expected = 0.3 + index as f64 * 0.1;
            assert!((group.delay(index) - expected).abs() < 1e-9);
        }
        let schedule = group.schedule();
        assert!(schedule.windows(2).all(|pair| pair[0].delay <= pair[1].delay));
    }

    #[test]
    fn negative_increment_cannot_reverse_order() {
        let group = StaggerGroup::new(4, -1.0, -0.5);
        let delays: Vec<f64> = group.schedule().iter().map(|child| child.delay).collect();
        assert_eq!(delays, vec![0.0; 4]);
    }

    #[test]
    fn unregistered_element_never_fires() {
        let mut sequencer = RevealSequencer::new();
        sequencer.register(id("stats"));
        sequencer.unregister(&id("stats"));

        assert!(sequencer.is_empty());
        assert_eq!(sequencer.on_intersection(&id("stats"), true), None);
        assert_eq!(sequencer.state(&id("stats")), None);
    }

    #[test]
    fn reregistering_keeps_latch() {
        let mut sequencer = RevealSequencer::new();
        sequencer.register(id("hero"));
        sequencer.on_intersection(&id("hero"), true);
        sequencer.register(id("hero"));
        assert!(sequencer.is_revealed(&id("hero")));
        assert_eq!(sequencer.len(), 1);
    }
}
