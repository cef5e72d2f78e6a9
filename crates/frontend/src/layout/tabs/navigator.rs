use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("no tab with id '{0}'")]
    UnknownTab(String),
    #[error("tab strip has no tabs")]
    Empty,
}

/// Keys understood inside the trigger row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
    Activate,
}

impl NavKey {
    /// Map `KeyboardEvent.key` to a navigation key; anything else is left to the browser.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(NavKey::Next),
            "ArrowLeft" | "ArrowUp" => Some(NavKey::Previous),
            "Home" => Some(NavKey::First),
            "End" => Some(NavKey::Last),
            "Enter" | " " => Some(NavKey::Activate),
            _ => None,
        }
    }
}

/// Canonical state of the tab strip.
///
/// The id list is fixed at construction (document order). `selected` is the
/// tab whose panel is visible; `focused` is the trigger holding keyboard focus
/// inside the row, which only differs from `selected` while the user is
/// arrowing through triggers without activating one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabNavigator {
    ids: Vec<String>,
    selected: usize,
    focused: usize,
}

impl TabNavigator {
    pub fn new(ids: Vec<String>) -> Result<Self, TabError> {
        if ids.is_empty() {
            return Err(TabError::Empty);
        }
        Ok(Self {
            ids,
            selected: 0,
            focused: 0,
        })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn first_id(&self) -> &str {
        &self.ids[0]
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_id(&self) -> &str {
        &self.ids[self.selected]
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|t| t == id)
    }

    /// Select the tab with the given id. Unknown ids leave the state untouched.
    pub fn select(&mut self, id: &str) -> Result<usize, TabError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| TabError::UnknownTab(id.to_string()))?;
        self.selected = index;
        Ok(index)
    }

    /// Record that keyboard focus is on the trigger at `index`. Out of range is ignored.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.ids.len() {
            self.focused = index;
        }
    }

    /// Index that `key` moves focus to, starting from the focused trigger.
    /// `None` for [`NavKey::Activate`], which does not move focus.
    pub fn focus_target(&self, key: NavKey) -> Option<usize> {
        let len = self.ids.len();
        match key {
            NavKey::Next => Some((self.focused + 1) % len),
            NavKey::Previous => Some((self.focused + len - 1) % len),
            NavKey::First => Some(0),
            NavKey::Last => Some(len - 1),
            NavKey::Activate => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(n: usize) -> TabNavigator {
        TabNavigator::new((0..n).map(|i| format!("t{i}")).collect()).unwrap()
    }

    #[test]
    fn test_empty_strip_is_rejected() {
        assert_eq!(TabNavigator::new(vec![]), Err(TabError::Empty));
    }

    #[test]
    fn test_select_unknown_keeps_state() {
        let mut nav = navigator(3);
        nav.select("t2").unwrap();
        assert_eq!(
            nav.select("t9"),
            Err(TabError::UnknownTab("t9".to_string()))
        );
        assert_eq!(nav.selected_id(), "t2");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut nav = navigator(4);
        assert_eq!(nav.focus_target(NavKey::Previous), Some(3));
        nav.set_focus(3);
        assert_eq!(nav.focus_target(NavKey::Next), Some(0));
        assert_eq!(nav.focus_target(NavKey::First), Some(0));
        assert_eq!(nav.focus_target(NavKey::Last), Some(3));
        assert_eq!(nav.focus_target(NavKey::Activate), None);
    }

    #[test]
    fn test_single_tab_wraps_onto_itself() {
        let nav = navigator(1);
        assert_eq!(nav.focus_target(NavKey::Next), Some(0));
        assert_eq!(nav.focus_target(NavKey::Previous), Some(0));
    }

    #[test]
    fn test_set_focus_out_of_range_is_ignored() {
        let mut nav = navigator(2);
        nav.set_focus(5);
        assert_eq!(nav.focused(), 0);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key(" "), Some(NavKey::Activate));
        assert_eq!(NavKey::from_key("Tab"), None);
        assert_eq!(NavKey::from_key("a"), None);
    }
}
