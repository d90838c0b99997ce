//! Input Module - crossterm event bridge
//!
//! Converts crossterm's event vocabulary into the selection manager's.
//! Conversion only: the host still owns event capture, polling, and the
//! mapping from screen coordinates or cursor position to a target key.
//!
//! # API
//!
//! - `convert_modifiers` - Convert crossterm KeyModifiers to Modifiers
//! - `classify_key` - Classify a KeyCode into a navigation class
//! - `select_on_key_event` - Route a key event at a resolved target key
//! - `select_on_mouse_event` - Route a mouse event at a resolved target key
//!
//! # Example
//!
//! ```ignore
//! use multiselect::{select_on_key_event, select_on_mouse_event};
//!
//! // Host event loop, after hit-testing the event to a row key:
//! match event {
//!     Event::Key(key_event) => {
//!         select_on_key_event(&mut selection, row_key, &key_event);
//!     }
//!     Event::Mouse(mouse_event) => {
//!         select_on_mouse_event(&mut selection, row_key, &mouse_event);
//!     }
//!     _ => {}
//! }
//! ```

use std::hash::Hash;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::manager::SelectionManager;
use crate::types::Modifiers;

// =============================================================================
// KEY CLASSIFICATION
// =============================================================================

/// Keyboard navigation class recognized by the selection dispatchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Arrow,
    Page,
    HomeEnd,
    Space,
}

/// Classify a crossterm KeyCode into a navigation class.
/// Returns None for keys the selection dispatchers don't handle.
pub fn classify_key(code: KeyCode) -> Option<KeyClass> {
    match code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(KeyClass::Arrow),
        KeyCode::PageUp | KeyCode::PageDown => Some(KeyClass::Page),
        KeyCode::Home | KeyCode::End => Some(KeyClass::HomeEnd),
        KeyCode::Char(' ') => Some(KeyClass::Space),
        _ => None,
    }
}

// =============================================================================
// MODIFIER CONVERSION
// =============================================================================

/// Convert crossterm KeyModifiers to our Modifiers.
/// SUPER and META both fold into META (cmd on macOS).
pub fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    let mut result = Modifiers::NONE;
    if mods.contains(KeyModifiers::SHIFT) {
        result |= Modifiers::SHIFT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        result |= Modifiers::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        result |= Modifiers::ALT;
    }
    if mods.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
        result |= Modifiers::META;
    }
    result
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route a crossterm key event to the matching selection dispatcher.
///
/// `key` is the target key the host resolved for the event (e.g. the
/// row the cursor lands on after the movement). Only press events are
/// routed; repeats, releases, and unrecognized keys return false and
/// leave the selection untouched.
pub fn select_on_key_event<K>(
    selection: &mut SelectionManager<K>,
    key: K,
    event: &KeyEvent,
) -> bool
where
    K: Clone + Eq + Hash,
{
    if event.kind != KeyEventKind::Press {
        return false;
    }

    let class = match classify_key(event.code) {
        Some(class) => class,
        None => return false,
    };

    let modifiers = convert_modifiers(event.modifiers);
    match class {
        KeyClass::Arrow => selection.select_on_keyboard_arrow(key, modifiers),
        KeyClass::Page => selection.select_on_keyboard_page(key, modifiers),
        KeyClass::HomeEnd => selection.select_on_keyboard_home_end(key, modifiers),
        KeyClass::Space => selection.select_on_keyboard_space(key, modifiers),
    }
    true
}

/// Route a crossterm mouse event to the matching selection dispatcher.
///
/// `key` is the target key the host hit-tested for the event's
/// coordinates. Left button down routes to pointer-down, right button
/// down to context-menu; every other kind returns false untouched.
pub fn select_on_mouse_event<K>(
    selection: &mut SelectionManager<K>,
    key: K,
    event: &MouseEvent,
) -> bool
where
    K: Clone + Eq + Hash,
{
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            selection.select_on_pointer_down(key, convert_modifiers(event.modifiers));
            true
        }
        MouseEventKind::Down(MouseButton::Right) => {
            selection.select_on_pointer_context_menu(key);
            true
        }
        _ => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================
