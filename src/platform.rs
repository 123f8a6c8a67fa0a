//! Platform key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut.
///
/// Cmd is only reported by crossterm with keyboard enhancement flags pushed,
/// which this app does not do, so Ctrl is used on every platform.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
