//! Core types for multiselect.
//!
//! The shared vocabulary the manager and the interaction dispatchers
//! speak: modifier-key flags, the range-combination policy, and the
//! host-supplied key source.

// =============================================================================
// Modifiers (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Modifier-key state attached to a pointer or keyboard interaction.
    ///
    /// Combine with bitwise OR: `Modifiers::SHIFT | Modifiers::CTRL`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const NONE = 0;
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Check if shift is held.
    #[inline]
    pub fn shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Check if the toggle modifier is held: ctrl, or cmd on macOS.
    #[inline]
    pub fn toggle_modifier(&self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

// =============================================================================
// Range mode
// =============================================================================

/// Policy for how a new range selection combines with the existing
/// selection. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    /// A new range replaces the current selection.
    Replace,
    /// A new range is unioned into the current selection.
    Add,
}

impl Default for RangeMode {
    fn default() -> Self {
        Self::Replace
    }
}

// =============================================================================
// Key source
// =============================================================================

/// Host-supplied accessor returning the current ordered list of
/// selectable keys.
///
/// Called every time a range must be resolved, never cached, so it must
/// reflect the live state of the underlying list.
pub type KeySource<K> = Box<dyn Fn() -> Vec<K>>;

// =============================================================================
// TESTS
// =============================================================================
