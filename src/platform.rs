//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the sign shortcut
/// - macOS: SUPER (Cmd key), with Ctrl accepted as well
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SIGN_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SIGN_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Sign shortcut display for the status bar
/// Ctrl+S works on all platforms
pub const SIGN_SHORTCUT: &str = "Ctrl+S";

/// Clear-field shortcut display
pub const CLEAR_SHORTCUT: &str = "Ctrl+U";
