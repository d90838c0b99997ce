//! Interaction Dispatch - Gesture-to-primitive decision tables
//!
//! Each dispatcher maps one host gesture (pointer press, context menu,
//! keyboard navigation, space) plus the modifier state to exactly one
//! primitive mutation. Shift takes priority over ctrl/cmd wherever both
//! are supported; a shift gesture with no anchor falls through to the
//! gesture's plain behavior instead of failing.
//!
//! | Gesture      | shift + anchor        | ctrl/cmd     | plain        |
//! |--------------|-----------------------|--------------|--------------|
//! | pointer down | range(anchor, key)    | toggle(key)  | select(key)  |
//! | context menu | n/a                   | n/a          | select, keep anchor |
//! | arrow        | range(anchor, key)    | no-op        | select(key)  |
//! | page         | range(anchor, key)    | no-op        | select(key)  |
//! | home/end     | range(anchor, key)    | no-op        | select(key)  |
//! | space        | range(anchor, key)    | toggle(key)  | add(key)     |

use std::hash::Hash;

use crate::manager::SelectionManager;
use crate::types::Modifiers;

impl<K: Clone + Eq + Hash> SelectionManager<K> {
    /// Handle a primary-button press on `key`.
    ///
    /// Shift extends a range from the anchor (ctrl is ignored while
    /// shift is held); ctrl/cmd toggles the key; a plain press selects
    /// it alone. Shift with no anchor behaves like a plain press.
    pub fn select_on_pointer_down(&mut self, key: K, modifiers: Modifiers) {
        if modifiers.shift() {
            match self.anchor_key().cloned() {
                Some(anchor) => self.select_range(anchor, key),
                None => self.select_key(key),
            }
        } else if modifiers.toggle_modifier() {
            self.toggle_key(key);
        } else {
            self.select_key(key);
        }
    }

    /// Handle a context-menu (secondary button) press on `key`.
    ///
    /// Ignores modifiers entirely: the selection always collapses to
    /// `key` so the menu targets what is under the pointer. The anchor
    /// is only established if none exists yet.
    pub fn select_on_pointer_context_menu(&mut self, key: K) {
        let had_anchor = self.anchor_key().is_some();
        self.select_key_preserving_anchor(key.clone());
        if !had_anchor {
            self.set_anchor_key(Some(key));
        }
    }

    /// Handle an arrow-key movement landing on `key`.
    pub fn select_on_keyboard_arrow(&mut self, key: K, modifiers: Modifiers) {
        self.navigate(key, modifiers);
    }

    /// Handle a page-up/page-down movement landing on `key`.
    pub fn select_on_keyboard_page(&mut self, key: K, modifiers: Modifiers) {
        self.navigate(key, modifiers);
    }

    /// Handle a home/end movement landing on `key`.
    pub fn select_on_keyboard_home_end(&mut self, key: K, modifiers: Modifiers) {
        self.navigate(key, modifiers);
    }

    /// Handle the space key on `key`.
    ///
    /// Space is additive: a plain press adds the key to the selection
    /// (and moves the anchor), ctrl/cmd toggles it, shift extends a
    /// range from the anchor. Shift with no anchor adds.
    pub fn select_on_keyboard_space(&mut self, key: K, modifiers: Modifiers) {
        if modifiers.shift() {
            match self.anchor_key().cloned() {
                Some(anchor) => self.select_range(anchor, key),
                None => self.add_key(key),
            }
        } else if modifiers.toggle_modifier() {
            self.toggle_key(key);
        } else {
            self.add_key(key);
        }
    }

    /// Shared table for arrow/page/home-end: shift extends from the
    /// anchor, ctrl'd movement moves focus without selecting (the
    /// selection stays, only the last-interacted key advances), plain
    /// movement selects the landed-on key.
    fn navigate(&mut self, key: K, modifiers: Modifiers) {
        if modifiers.shift() {
            match self.anchor_key().cloned() {
                Some(anchor) => self.select_range(anchor, key),
                None => self.select_key(key),
            }
        } else if modifiers.toggle_modifier() {
            self.set_last_interacted_key(Some(key));
        } else {
            self.select_key(key);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::manager::SelectionManager;
    use crate::types::{Modifiers, RangeMode};

    fn manager() -> SelectionManager<&'static str> {
        SelectionManager::new(|| vec!["a", "b", "c", "d", "e"])
    }

    // -------------------------------------------------------------------------
    // Pointer down
    // -------------------------------------------------------------------------

    #[test]
    fn test_pointer_down_plain_selects() {
        let mut selection = manager();
        selection.set_selected_keys(["a", "b"]);
        selection.select_on_pointer_down("d", Modifiers::NONE);
        assert_eq!(selection.selected_keys(), vec!["d"]);
        assert_eq!(selection.anchor_key(), Some(&"d"));
    }

    #[test]
    fn test_pointer_down_ctrl_toggles() {
        let mut selection = manager();
        selection.select_on_pointer_down("b", Modifiers::NONE);
        selection.select_on_pointer_down("d", Modifiers::CTRL);
        assert_eq!(selection.selected_keys(), vec!["b", "d"]);

        selection.select_on_pointer_down("b", Modifiers::CTRL);
        assert_eq!(selection.selected_keys(), vec!["d"]);
    }

    #[test]
    fn test_pointer_down_meta_toggles() {
        let mut selection = manager();
        selection.select_on_pointer_down("b", Modifiers::NONE);
        selection.select_on_pointer_down("d", Modifiers::META);
        assert_eq!(selection.selected_keys(), vec!["b", "d"]);
    }

    #[test]
    fn test_pointer_down_shift_selects_range() {
        let mut selection = manager();
        selection.select_key("b");
        selection.select_on_pointer_down("d", Modifiers::SHIFT);
        assert_eq!(selection.selected_keys(), vec!["b", "c", "d"]);
        assert_eq!(selection.anchor_key(), Some(&"b"));
        assert_eq!(selection.last_interacted_key(), Some(&"d"));
    }

    #[test]
    fn test_pointer_down_backward_shift_range() {
        let mut selection = manager();
        selection.select_key("d");
        selection.select_on_pointer_down("b", Modifiers::SHIFT);
        assert_eq!(selection.selected_keys(), vec!["b", "c", "d"]);
        assert_eq!(selection.anchor_key(), Some(&"d"));
        assert_eq!(selection.last_interacted_key(), Some(&"b"));
    }

    #[test]
    fn test_pointer_down_shift_without_anchor_selects() {
        let mut selection = manager();
        selection.select_on_pointer_down("d", Modifiers::SHIFT);
        assert_eq!(selection.selected_keys(), vec!["d"]);
        assert_eq!(selection.anchor_key(), Some(&"d"));
    }

    #[test]
    fn test_pointer_down_shift_wins_over_ctrl() {
        let mut selection = manager();
        selection.select_key("b");
        selection.select_on_pointer_down("d", Modifiers::SHIFT | Modifiers::CTRL);
        assert_eq!(selection.selected_keys(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_pointer_down_range_in_add_mode() {
        let mut selection =
            SelectionManager::with_range_mode(|| vec!["a", "b", "c", "d", "e"], RangeMode::Add);
        selection.select_on_pointer_down("e", Modifiers::NONE);
        selection.select_on_pointer_down("b", Modifiers::SHIFT);
        assert_eq!(selection.selected_keys(), vec!["e", "b", "c", "d"]);
    }

    // -------------------------------------------------------------------------
    // Context menu
    // -------------------------------------------------------------------------

    #[test]
    fn test_context_menu_sets_anchor_when_absent() {
        let mut selection = manager();
        selection.select_on_pointer_context_menu("x");
        assert_eq!(selection.selected_keys(), vec!["x"]);
        assert_eq!(selection.anchor_key(), Some(&"x"));
        assert_eq!(selection.last_interacted_key(), Some(&"x"));
    }

    #[test]
    fn test_context_menu_keeps_existing_anchor() {
        let mut selection = manager();
        selection.select_on_pointer_context_menu("x");
        selection.select_on_pointer_context_menu("y");
        assert_eq!(selection.selected_keys(), vec!["y"]);
        assert_eq!(selection.anchor_key(), Some(&"x"));
        assert_eq!(selection.last_interacted_key(), Some(&"y"));
    }

    #[test]
    fn test_context_menu_collapses_multi_selection() {
        let mut selection = manager();
        selection.set_selected_keys(["a", "b", "c"]);
        selection.select_on_pointer_context_menu("d");
        assert_eq!(selection.selected_keys(), vec!["d"]);
    }

    // -------------------------------------------------------------------------
    // Keyboard navigation (arrow / page / home-end)
    // -------------------------------------------------------------------------

    #[test]
    fn test_arrow_plain_selects() {
        let mut selection = manager();
        selection.select_key("b");
        selection.select_on_keyboard_arrow("c", Modifiers::NONE);
        assert_eq!(selection.selected_keys(), vec!["c"]);
        assert_eq!(selection.anchor_key(), Some(&"c"));
    }

    #[test]
    fn test_arrow_ctrl_keeps_selection_but_moves_last_interacted() {
        let mut selection = manager();
        selection.select_key("b");
        selection.select_on_keyboard_arrow("d", Modifiers::CTRL);
        assert_eq!(selection.selected_keys(), vec!["b"]);
        assert_eq!(selection.anchor_key(), Some(&"b"));
        assert_eq!(selection.last_interacted_key(), Some(&"d"));
    }

    #[test]
    fn test_arrow_shift_extends_range() {
        let mut selection = manager();
        selection.select_key("c");
        selection.select_on_keyboard_arrow("e", Modifiers::SHIFT);
        assert_eq!(selection.selected_keys(), vec!["c", "d", "e"]);
        assert_eq!(selection.anchor_key(), Some(&"c"));
    }

    #[test]
    fn test_arrow_shift_without_anchor_selects() {
        let mut selection = manager();
        selection.select_on_keyboard_arrow("c", Modifiers::SHIFT);
        assert_eq!(selection.selected_keys(), vec!["c"]);
        assert_eq!(selection.anchor_key(), Some(&"c"));
    }

    #[test]
    fn test_page_matches_arrow_table() {
        let mut selection = manager();
        selection.select_key("a");
        selection.select_on_keyboard_page("d", Modifiers::SHIFT);
        assert_eq!(selection.selected_keys(), vec!["a", "b", "c", "d"]);

        selection.select_on_keyboard_page("e", Modifiers::CTRL);
        assert_eq!(selection.selected_keys(), vec!["a", "b", "c", "d"]);
        assert_eq!(selection.last_interacted_key(), Some(&"e"));

        selection.select_on_keyboard_page("b", Modifiers::NONE);
        assert_eq!(selection.selected_keys(), vec!["b"]);
    }

    #[test]
    fn test_home_end_matches_arrow_table() {
        let mut selection = manager();
        selection.select_key("c");
        selection.select_on_keyboard_home_end("a", Modifiers::SHIFT);
        assert_eq!(selection.selected_keys(), vec!["a", "b", "c"]);

        selection.select_on_keyboard_home_end("e", Modifiers::CTRL);
        assert_eq!(selection.selected_keys(), vec!["a", "b", "c"]);
        assert_eq!(selection.last_interacted_key(), Some(&"e"));

        selection.select_on_keyboard_home_end("e", Modifiers::NONE);
        assert_eq!(selection.selected_keys(), vec!["e"]);
    }

    // -------------------------------------------------------------------------
    // Space
    // -------------------------------------------------------------------------

    #[test]
    fn test_space_plain_adds_and_moves_anchor() {
        let mut selection = manager();
        selection.select_on_keyboard_space("a", Modifiers::NONE);
        assert_eq!(selection.selected_keys(), vec!["a"]);
        assert_eq!(selection.anchor_key(), Some(&"a"));

        selection.select_on_keyboard_space("c", Modifiers::NONE);
        assert_eq!(selection.selected_keys(), vec!["a", "c"]);
        assert_eq!(selection.anchor_key(), Some(&"c"));
    }

    #[test]
    fn test_space_ctrl_toggles() {
        let mut selection = manager();
        selection.set_selected_keys(["a", "c"]);
        selection.select_on_keyboard_space("c", Modifiers::CTRL);
        assert_eq!(selection.selected_keys(), vec!["a"]);
    }

    #[test]
    fn test_space_shift_extends_range() {
        let mut selection = manager();
        selection.select_key("b");
        selection.select_on_keyboard_space("d", Modifiers::SHIFT);
        assert_eq!(selection.selected_keys(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_space_shift_without_anchor_adds() {
        let mut selection = manager();
        selection.set_selected_keys(["a"]);
        selection.select_on_keyboard_space("c", Modifiers::SHIFT);
        assert_eq!(selection.selected_keys(), vec!["a", "c"]);
        assert_eq!(selection.anchor_key(), Some(&"c"));
    }
}
