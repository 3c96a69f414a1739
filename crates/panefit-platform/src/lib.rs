//! Resize coordination for preferences windows.
//!
//! Hooks the three moments a preferences window's fit can go stale (first
//! display, pane swap, live resize) and keeps the window wide enough for its
//! toolbar. Ships a headless in-memory backend and a macOS backend via `objc2`.

mod coordinator;
pub mod headless;
pub mod shared;

#[cfg(target_os = "macos")]
pub mod macos;

pub use coordinator::{Coordinator, CoordinatorState};

use panefit_core::{Size, ToolbarItemId};

// ──────────────────────────────────────────────
// Sizing Events
// ──────────────────────────────────────────────

/// Host event that may leave the preferences window's fit stale.
#[derive(Debug, Clone, PartialEq)]
pub enum SizingEvent {
    /// The preferences panel is about to be shown.
    PreferencesShown,
    /// The user picked a different pane from the toolbar.
    ToolbarItemClicked(ToolbarItemId),
    /// The window is about to resize to `proposed` (live drag or layout pass).
    WindowWillResize { proposed: Size },
}
