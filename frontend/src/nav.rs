use std::rc::Rc;

use yew::Reducible;

use crate::config::SCROLL_THRESHOLD;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavBarState {
    pub is_scrolled: bool,
    pub mobile_menu_open: bool,
}

/// Nav bar appearance and mobile menu.
///
/// `is_scrolled` follows the latest offset in both directions; it is not a
/// latch like reveals are.
#[derive(Clone, Debug, PartialEq)]
pub struct NavBarController {
    state: NavBarState,
    threshold: f64,
}

impl Default for NavBarController {
    fn default() -> Self {
        Self::with_threshold(SCROLL_THRESHOLD)
    }
}

impl NavBarController {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            state: NavBarState::default(),
            threshold,
        }
    }

    pub fn state(&self) -> NavBarState {
        self.state
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.is_scrolled
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.state.mobile_menu_open
    }

    /// Returns whether `is_scrolled` changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > self.threshold;
        let changed = scrolled != self.state.is_scrolled;
        self.state.is_scrolled = scrolled;
        changed
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.state.mobile_menu_open = false;
    }

    pub fn on_link_activated(&mut self) {
        self.close_mobile_menu();
    }
}

pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
    LinkActivated,
}

impl Reducible for NavBarController {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Scrolled(offset_y) => {
                next.on_scroll(offset_y);
            }
            NavAction::ToggleMenu => next.toggle_mobile_menu(),
            NavAction::CloseMenu => next.close_mobile_menu(),
            NavAction::LinkActivated => next.on_link_activated(),
        }

        // Same Rc back means no re-render.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_tracks_threshold_both_ways() {
        let mut nav = NavBarController::default();
        nav.on_scroll(10.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(SCROLL_THRESHOLD + 1.0);
        assert!(nav.is_scrolled());
        nav.on_scroll(SCROLL_THRESHOLD - 1.0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let mut nav = NavBarController::default();
        nav.on_scroll(200.0);
        nav.on_scroll(SCROLL_THRESHOLD);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn on_scroll_reports_changes_only() {
        let mut nav = NavBarController::with_threshold(100.0);
        assert!(!nav.on_scroll(20.0));
        assert!(nav.on_scroll(150.0));
        assert!(!nav.on_scroll(300.0));
        assert!(nav.on_scroll(0.0));
    }

    #[test]
    fn menu_toggles_and_link_closes_it() {
        let mut nav = NavBarController::default();
        nav.toggle_mobile_menu();
        assert!(nav.mobile_menu_open());
        nav.toggle_mobile_menu();
        assert!(!nav.mobile_menu_open());

        nav.toggle_mobile_menu();
        nav.on_link_activated();
        assert!(!nav.mobile_menu_open());

        nav.close_mobile_menu();
        assert!(!nav.mobile_menu_open());
    }

    #[test]
    fn menu_and_scroll_are_independent() {
        let mut nav = NavBarController::default();
        nav.toggle_mobile_menu();
        nav.on_scroll(400.0);
        nav.on_scroll(0.0);
        assert_eq!(
            nav.state(),
            NavBarState {
                is_scrolled: false,
                mobile_menu_open: true,
            }
        );
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let nav = Rc::new(NavBarController::default());
        let same = nav.clone().reduce(NavAction::Scrolled(5.0));
        assert!(Rc::ptr_eq(&nav, &same));

        let scrolled = nav.clone().reduce(NavAction::Scrolled(80.0));
        assert!(scrolled.is_scrolled());
        assert!(!Rc::ptr_eq(&nav, &scrolled));

        let closed = scrolled.clone().reduce(NavAction::CloseMenu);
        assert!(Rc::ptr_eq(&scrolled, &closed));
    }
}
