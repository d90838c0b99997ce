//! Selection Manager - Tracked state and primitive mutations
//!
//! The central state holder: which keys are selected, the anchor a
//! range gesture grows from, and the key the user last touched. Does
//! NOT listen for events (the host owns event capture) and does NOT own
//! the item list (the host supplies a key source).
//!
//! # API
//!
//! - `new(keys)` / `with_range_mode(keys, mode)` - Construction
//! - `select_key` / `toggle_key` / `add_key` / `select_range` - Primitives
//! - `key_range(from, to)` - Resolve an inclusive slice of the key list
//! - `clear_all` / `select_all` - Whole-selection operations
//! - `selected_keys`, `anchor_key`, `last_interacted_key`, ... - Accessors
//! - `set_selected_keys`, `set_anchor_key`, ... - Direct state writes
//!
//! The gesture-level dispatchers (pointer down, context menu, arrow,
//! page, home/end, space) are thin decision tables over these
//! primitives and live in their own module.
//!
//! # Example
//!
//! ```ignore
//! use multiselect::SelectionManager;
//!
//! let mut selection = SelectionManager::new(|| vec!["a", "b", "c"]);
//! selection.select_range("a", "c");
//! assert_eq!(selection.selected_keys(), vec!["a", "b", "c"]);
//! ```

use std::hash::Hash;
use std::rc::Rc;

use crate::key_set::KeySet;
use crate::types::{KeySource, RangeMode};

/// Selection state for an ordered, keyed collection.
///
/// Every mutation replaces the selected set wholesale (copy-on-write):
/// a snapshot handle taken via [`SelectionManager::snapshot`] stays
/// stable across later mutations. Mutations are synchronous and atomic
/// from the caller's point of view.
pub struct SelectionManager<K: Clone + Eq + Hash> {
    keys: KeySource<K>,
    range_mode: RangeMode,
    selected: Rc<KeySet<K>>,
    anchor: Option<K>,
    last_interacted: Option<K>,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl<K: Clone + Eq + Hash> SelectionManager<K> {
    /// Create a manager over the given key source. New range selections
    /// replace the current selection.
    pub fn new(keys: impl Fn() -> Vec<K> + 'static) -> Self {
        Self::with_range_mode(keys, RangeMode::Replace)
    }

    /// Create a manager with an explicit range-combination mode.
    pub fn with_range_mode(keys: impl Fn() -> Vec<K> + 'static, range_mode: RangeMode) -> Self {
        Self {
            keys: Box::new(keys),
            range_mode,
            selected: Rc::new(KeySet::new()),
            anchor: None,
            last_interacted: None,
        }
    }
}

// =============================================================================
// PRIMITIVE MUTATIONS
// =============================================================================

impl<K: Clone + Eq + Hash> SelectionManager<K> {
    /// Replace the selection with the singleton `{key}`.
    ///
    /// The key becomes both the anchor and the last-interacted key. Any
    /// key is accepted, including ones absent from the key source.
    pub fn select_key(&mut self, key: K) {
        self.anchor = Some(key.clone());
        self.select_key_preserving_anchor(key);
    }

    /// Replace the selection with the singleton `{key}` without moving
    /// the anchor.
    pub fn select_key_preserving_anchor(&mut self, key: K) {
        let mut next = KeySet::new();
        next.insert(key.clone());
        self.commit(next);
        self.last_interacted = Some(key);
    }

    /// Remove the key if selected, select it otherwise.
    ///
    /// Updates the last-interacted key. The anchor is untouched.
    pub fn toggle_key(&mut self, key: K) {
        let mut next = (*self.selected).clone();
        if !next.remove(&key) {
            next.insert(key.clone());
        }
        self.commit(next);
        self.last_interacted = Some(key);
    }

    /// Add the key to the selection (idempotent on membership).
    ///
    /// Unlike [`SelectionManager::toggle_key`], the key always becomes
    /// the new anchor and last-interacted key.
    pub fn add_key(&mut self, key: K) {
        let mut next = (*self.selected).clone();
        next.insert(key.clone());
        self.commit(next);
        self.anchor = Some(key.clone());
        self.last_interacted = Some(key);
    }

    /// Select the inclusive range of keys between `from` and `to`.
    ///
    /// The range is resolved against the live key list (see
    /// [`SelectionManager::key_range`]) and combined with the current
    /// selection according to the range mode: `Replace` discards it,
    /// `Add` unions into it. `from` becomes the anchor and `to` the
    /// last-interacted key whether or not the range resolved. An empty
    /// resolution yields an empty selection in `Replace` mode and an
    /// unchanged one in `Add` mode.
    pub fn select_range(&mut self, from: K, to: K) {
        let range = self.key_range(&from, &to);
        let mut next = match self.range_mode {
            RangeMode::Replace => KeySet::new(),
            RangeMode::Add => (*self.selected).clone(),
        };
        for key in range {
            next.insert(key);
        }
        self.commit(next);
        self.anchor = Some(from);
        self.last_interacted = Some(to);
    }

    /// Resolve the ordered, inclusive sequence of keys between `from`
    /// and `to`.
    ///
    /// Fetches the live key list and slices between the two endpoints'
    /// first occurrences. The result follows list order regardless of
    /// argument order, so backward gestures resolve the same range as
    /// forward ones. If either endpoint is not in the list the range is
    /// empty: not found means no range, not an error.
    pub fn key_range(&self, from: &K, to: &K) -> Vec<K> {
        let keys = (self.keys)();
        let from_index = keys.iter().position(|k| k == from);
        let to_index = keys.iter().position(|k| k == to);

        match (from_index, to_index) {
            (Some(a), Some(b)) => {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                keys[lo..=hi].to_vec()
            }
            _ => Vec::new(),
        }
    }

    /// Reset to the initial state: nothing selected, no anchor, no
    /// last-interacted key.
    pub fn clear_all(&mut self) {
        self.commit(KeySet::new());
        self.anchor = None;
        self.last_interacted = None;
    }

    /// Select every key the source currently returns, in list order.
    /// Anchor and last-interacted key are untouched.
    pub fn select_all(&mut self) {
        let next: KeySet<K> = (self.keys)().into_iter().collect();
        self.commit(next);
    }

    /// Swap in a freshly-built set. Prior snapshot handles keep the set
    /// they were taken from.
    fn commit(&mut self, next: KeySet<K>) {
        self.selected = Rc::new(next);
    }
}

// =============================================================================
// ACCESSORS
// =============================================================================

impl<K: Clone + Eq + Hash> SelectionManager<K> {
    /// Check if any key is selected.
    #[inline]
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Check if more than one key is selected.
    #[inline]
    pub fn is_range_selection(&self) -> bool {
        self.selected.len() > 1
    }

    /// Membership test for a single key.
    #[inline]
    pub fn is_key_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Number of selected keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if the selection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected keys as a vector, in insertion order.
    ///
    /// After a pure range selection this coincides with key-list order;
    /// after toggles and adds it is the order the keys were selected
    /// in, which need not match the key list.
    pub fn selected_keys(&self) -> Vec<K> {
        self.selected.to_vec()
    }

    /// Cheap shared handle to the current selected set. The handle is a
    /// stable snapshot: later mutations swap in a new set and never
    /// touch the one behind previously-taken handles.
    pub fn snapshot(&self) -> Rc<KeySet<K>> {
        Rc::clone(&self.selected)
    }

    /// First selected key in insertion order, if any.
    pub fn first_selected_key(&self) -> Option<&K> {
        self.selected.first()
    }

    /// The anchor key: the fixed endpoint range selections grow from.
    pub fn anchor_key(&self) -> Option<&K> {
        self.anchor.as_ref()
    }

    /// The key most recently touched by any interaction, selected or
    /// not. Hosts use this to drive keyboard focus.
    pub fn last_interacted_key(&self) -> Option<&K> {
        self.last_interacted.as_ref()
    }

    /// The range-combination mode fixed at construction.
    pub fn range_mode(&self) -> RangeMode {
        self.range_mode
    }
}

// =============================================================================
// STATE SETTERS
// =============================================================================

impl<K: Clone + Eq + Hash> SelectionManager<K> {
    /// Replace the selected set with the given keys (deduplicated, in
    /// iteration order). Anchor and last-interacted key are untouched.
    pub fn set_selected_keys(&mut self, keys: impl IntoIterator<Item = K>) {
        self.commit(keys.into_iter().collect());
    }

    /// Overwrite the anchor key.
    pub fn set_anchor_key(&mut self, anchor: Option<K>) {
        self.anchor = anchor;
    }

    /// Overwrite the last-interacted key.
    pub fn set_last_interacted_key(&mut self, key: Option<K>) {
        self.last_interacted = key;
    }
}

// =============================================================================
// TESTS
// =============================================================================
