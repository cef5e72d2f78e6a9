//! Tab strip operations.
//!
//! `TabController` owns the [`TabNavigator`] and pushes every state change
//! through a [`TabView`]. The view is write-only: nothing is read back from
//! it to decide the next state.

use contracts::shared::events::TabViewEvent;

use super::hash::{parse_tab_hash, tab_fragment};
use super::navigator::{NavKey, TabError, TabNavigator};

/// ARIA projection of one trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerState {
    pub aria_selected: &'static str,
    pub tabindex: &'static str,
}

impl TriggerState {
    pub fn for_trigger(index: usize, selected: usize) -> Self {
        if index == selected {
            Self {
                aria_selected: "true",
                tabindex: "0",
            }
        } else {
            Self {
                aria_selected: "false",
                tabindex: "-1",
            }
        }
    }

    pub fn is_selected(&self) -> bool {
        self.aria_selected == "true"
    }
}

/// Output side of the tab strip.
pub trait TabView {
    /// Project the selection onto triggers and panels.
    fn render(&mut self, ids: &[String], selected: usize);
    /// Replace (never push) the URL fragment.
    fn replace_hash(&mut self, fragment: &str);
    fn focus_trigger(&mut self, index: usize);
    fn notify(&mut self, event: &TabViewEvent);
}

pub struct TabController<V: TabView> {
    navigator: TabNavigator,
    view: V,
}

impl<V: TabView> TabController<V> {
    pub fn new(navigator: TabNavigator, view: V) -> Self {
        Self { navigator, view }
    }

    pub fn navigator(&self) -> &TabNavigator {
        &self.navigator
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Initial activation from the page hash, falling back to the first tab.
    /// Never rewrites history.
    pub fn init(&mut self, hash: &str) {
        let initial = parse_tab_hash(hash)
            .filter(|id| self.navigator.index_of(id).is_some())
            .unwrap_or_else(|| self.navigator.first_id())
            .to_string();
        log::debug!("tabs: initial tab '{}' (hash '{}')", initial, hash);
        // `initial` is always a member of the strip here
        let _ = self.activate(&initial, false, false);
    }

    pub fn activate(
        &mut self,
        id: &str,
        push_history: bool,
        focus_trigger: bool,
    ) -> Result<(), TabError> {
        let index = self.navigator.select(id)?;

        self.view.render(self.navigator.ids(), index);
        if push_history {
            self.view.replace_hash(&tab_fragment(id));
        }
        if focus_trigger {
            self.navigator.set_focus(index);
            self.view.focus_trigger(index);
        }
        self.view.notify(&TabViewEvent {
            service: id.to_string(),
        });
        Ok(())
    }

    /// Pointer activation of the trigger at `index`.
    pub fn click(&mut self, index: usize) -> Result<(), TabError> {
        let id = self
            .navigator
            .ids()
            .get(index)
            .cloned()
            .ok_or_else(|| TabError::UnknownTab(format!("#{index}")))?;
        // the browser focuses the clicked trigger itself
        self.navigator.set_focus(index);
        self.activate(&id, true, false)
    }

    /// Keyboard input inside the trigger row. Returns `true` when the key was
    /// consumed and its default action should be prevented.
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(key) = NavKey::from_key(key) else {
            return false;
        };

        match self.navigator.focus_target(key) {
            Some(target) => {
                self.navigator.set_focus(target);
                self.view.focus_trigger(target);
            }
            None => {
                let id = self.navigator.ids()[self.navigator.focused()].clone();
                let _ = self.activate(&id, true, true);
            }
        }
        true
    }

    /// `hashchange` handler. Unrecognised or absent ids keep the current tab.
    pub fn hash_changed(&mut self, hash: &str) -> bool {
        let Some(id) = parse_tab_hash(hash) else {
            return false;
        };
        match self.activate(id, false, false) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("tabs: ignoring hash '{}': {}", hash, e);
                false
            }
        }
    }

    /// Focus arrived on a trigger from outside the controller (e.g. Tab key).
    pub fn focus_entered(&mut self, index: usize) {
        self.navigator.set_focus(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the projected state the way the page would show it.
    #[derive(Default)]
    struct RecordingView {
        triggers: Vec<TriggerState>,
        visible_panels: Vec<String>,
        hash: String,
        history_writes: usize,
        focused: Option<usize>,
        events: Vec<TabViewEvent>,
    }

    impl TabView for RecordingView {
        fn render(&mut self, ids: &[String], selected: usize) {
            self.triggers = (0..ids.len())
                .map(|i| TriggerState::for_trigger(i, selected))
                .collect();
            self.visible_panels = vec![ids[selected].clone()];
        }

        fn replace_hash(&mut self, fragment: &str) {
            self.hash = format!("#{fragment}");
            self.history_writes += 1;
        }

        fn focus_trigger(&mut self, index: usize) {
            self.focused = Some(index);
        }

        fn notify(&mut self, event: &TabViewEvent) {
            self.events.push(event.clone());
        }
    }

    fn controller(n: usize) -> TabController<RecordingView> {
        let ids = (0..n).map(|i| format!("t{i}")).collect();
        TabController::new(TabNavigator::new(ids).unwrap(), RecordingView::default())
    }

    fn selected_triggers(view: &RecordingView) -> Vec<usize> {
        view.triggers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_activate_shows_exactly_one_panel() {
        let mut c = controller(5);
        for i in 0..5 {
            let id = format!("t{i}");
            c.activate(&id, false, false).unwrap();
            assert_eq!(c.view().visible_panels, vec![id]);
            assert_eq!(selected_triggers(c.view()), vec![i]);
        }
    }

    #[test]
    fn test_roving_tabindex_invariant() {
        let mut c = controller(4);
        c.init("");
        c.activate("t2", true, true).unwrap();
        let zero: Vec<_> = c.view().triggers.iter().filter(|t| t.tabindex == "0").collect();
        assert_eq!(zero.len(), 1);
        assert_eq!(c.view().triggers[2], TriggerState::for_trigger(2, 2));
        for i in [0, 1, 3] {
            assert_eq!(c.view().triggers[i].aria_selected, "false");
            assert_eq!(c.view().triggers[i].tabindex, "-1");
        }
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut c = controller(4);
        c.activate("t1", true, false).unwrap();
        let (triggers, panels, hash) = (
            c.view().triggers.clone(),
            c.view().visible_panels.clone(),
            c.view().hash.clone(),
        );
        c.activate("t1", true, false).unwrap();
        assert_eq!(c.view().triggers, triggers);
        assert_eq!(c.view().visible_panels, panels);
        assert_eq!(c.view().hash, hash);
    }

    #[test]
    fn test_hash_round_trip_does_not_rewrite_history() {
        let mut c = controller(4);
        c.init("");
        c.activate("t2", true, false).unwrap();
        assert_eq!(c.view().hash, "#services?t=t2");
        assert_eq!(c.view().history_writes, 1);

        let hash = c.view().hash.clone();
        assert!(c.hash_changed(&hash));
        assert_eq!(c.navigator().selected_id(), "t2");
        assert_eq!(c.view().history_writes, 1);
    }

    #[test]
    fn test_arrow_keys_move_focus_not_selection() {
        let mut c = controller(4);
        c.init("");
        for _ in 0..3 {
            assert!(c.key_down("ArrowRight"));
        }
        assert_eq!(c.navigator().focused(), 3);
        assert_eq!(c.view().focused, Some(3));
        assert_eq!(c.navigator().selected_id(), "t0");
        assert_eq!(c.view().visible_panels, vec!["t0".to_string()]);

        assert!(c.key_down("ArrowRight"));
        assert_eq!(c.navigator().focused(), 0);
    }

    #[test]
    fn test_home_end_and_left_wrap() {
        let mut c = controller(4);
        c.init("");
        c.key_down("ArrowLeft");
        assert_eq!(c.navigator().focused(), 3);
        c.key_down("Home");
        assert_eq!(c.navigator().focused(), 0);
        c.key_down("End");
        assert_eq!(c.navigator().focused(), 3);
        c.key_down("ArrowUp");
        assert_eq!(c.navigator().focused(), 2);
    }

    #[test]
    fn test_enter_activates_focused_trigger() {
        let mut c = controller(4);
        c.init("");
        c.key_down("ArrowDown");
        c.key_down("ArrowDown");
        assert!(c.key_down("Enter"));
        assert_eq!(c.navigator().selected_id(), "t2");
        assert_eq!(c.view().hash, "#services?t=t2");
        assert_eq!(c.view().focused, Some(2));

        c.key_down("ArrowLeft");
        assert!(c.key_down(" "));
        assert_eq!(c.navigator().selected_id(), "t1");
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut c = controller(3);
        c.init("");
        assert!(!c.key_down("Tab"));
        assert!(!c.key_down("x"));
        assert_eq!(c.view().focused, None);
    }

    #[test]
    fn test_init_from_hash() {
        let mut c = controller(5);
        c.init("#services?t=t2");
        assert_eq!(c.view().visible_panels, vec!["t2".to_string()]);
        assert_eq!(selected_triggers(c.view()), vec![2]);
        assert_eq!(c.view().history_writes, 0);
    }

    #[test]
    fn test_init_without_hash_selects_first() {
        let mut c = controller(5);
        c.init("");
        assert_eq!(c.navigator().selected_id(), "t0");
        assert_eq!(c.view().history_writes, 0);
        assert_eq!(c.view().focused, None);
    }

    #[test]
    fn test_init_with_absent_tab_falls_back_to_first() {
        let mut c = controller(4);
        c.init("#services?t=t4");
        assert_eq!(c.navigator().selected_id(), "t0");
    }

    #[test]
    fn test_longer_id_in_hash_is_not_truncated() {
        let mut c = controller(5);
        c.init("#services?t=t12");
        assert_eq!(c.navigator().selected_id(), "t0");
        assert!(!c.hash_changed("#services?t=t12"));
        assert_eq!(c.navigator().selected_id(), "t0");
    }

    #[test]
    fn test_hash_change_switches_without_history_or_focus() {
        let mut c = controller(4);
        c.init("");
        assert!(c.hash_changed("#services?t=t1"));
        assert_eq!(c.view().visible_panels, vec!["t1".to_string()]);
        assert_eq!(c.view().history_writes, 0);
        assert_eq!(c.view().focused, None);
    }

    #[test]
    fn test_unrecognised_hash_change_is_noop() {
        let mut c = controller(4);
        c.activate("t3", false, false).unwrap();
        let events = c.view().events.len();
        assert!(!c.hash_changed("#contact"));
        assert!(!c.hash_changed("#services?t=t4"));
        assert_eq!(c.navigator().selected_id(), "t3");
        assert_eq!(c.view().events.len(), events);
    }

    #[test]
    fn test_unknown_activation_changes_nothing() {
        let mut c = controller(3);
        c.init("");
        assert_eq!(
            c.activate("t7", true, true),
            Err(TabError::UnknownTab("t7".to_string()))
        );
        assert_eq!(c.view().visible_panels, vec!["t0".to_string()]);
        assert_eq!(c.view().history_writes, 0);
    }

    #[test]
    fn test_every_activation_is_notified() {
        let mut c = controller(3);
        c.init("");
        c.click(2).unwrap();
        assert_eq!(
            c.view().events,
            vec![
                TabViewEvent { service: "t0".to_string() },
                TabViewEvent { service: "t2".to_string() },
            ]
        );
        assert_eq!(c.view().hash, "#services?t=t2");
    }

    #[test]
    fn test_focus_entered_resets_keyboard_origin() {
        let mut c = controller(4);
        c.init("");
        c.key_down("End");
        c.focus_entered(1);
        c.key_down("ArrowRight");
        assert_eq!(c.navigator().focused(), 2);
    }
}
