//! # multiselect
//!
//! Selection state tracking for ordered, keyed collections.
//!
//! Translates pointer and keyboard gestures, plus modifier-key state,
//! into deterministic updates to three pieces of state: the set of
//! selected keys, the anchor a range selection grows from, and the key
//! the user last interacted with. It renders nothing, owns no item
//! list, and listens to no events: the host feeds it already-resolved
//! keys and modifier flags and reads the resulting state back.
//!
//! ## Architecture
//!
//! ```text
//! host events → interaction dispatchers → primitive mutations → state
//!                                              ↑
//!                               key source (host-supplied closure)
//! ```
//!
//! Mutations replace the selected set wholesale (copy-on-write), so a
//! snapshot handle taken at any method-call boundary stays stable
//! across later interactions.
//!
//! ## Modules
//!
//! - [`types`] - Shared vocabulary (Modifiers, RangeMode, KeySource)
//! - [`key_set`] - Insertion-ordered key set behind the selection
//! - [`manager`] - SelectionManager: primitives, accessors, setters
//! - [`input`] - Optional crossterm event bridge
//!
//! ## Example
//!
//! ```
//! use multiselect::{Modifiers, SelectionManager};
//!
//! let rows = vec!["a", "b", "c", "d", "e"];
//! let mut selection = SelectionManager::new(move || rows.clone());
//!
//! // Click "b", then shift-click "d": the range b..=d is selected.
//! selection.select_on_pointer_down("b", Modifiers::NONE);
//! selection.select_on_pointer_down("d", Modifiers::SHIFT);
//!
//! assert_eq!(selection.selected_keys(), vec!["b", "c", "d"]);
//! assert_eq!(selection.anchor_key(), Some(&"b"));
//! assert_eq!(selection.last_interacted_key(), Some(&"d"));
//! ```

pub mod input;
pub mod key_set;
pub mod manager;
pub mod types;

mod interaction;

// Re-export commonly used items
pub use key_set::KeySet;
pub use manager::SelectionManager;
pub use types::{KeySource, Modifiers, RangeMode};

pub use input::{
    classify_key, convert_modifiers, select_on_key_event, select_on_mouse_event, KeyClass,
};
