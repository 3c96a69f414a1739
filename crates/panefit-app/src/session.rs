// Scripted preferences session against a headless window.
// Drives the coordinator through the same hooks a real host would fire.

use panefit_core::{PreferencesSizing, Rect, Size, ToolbarItem, ToolbarItemId};
use panefit_platform::headless::{HeadlessPane, HeadlessPreferences};
use panefit_platform::{Coordinator, SizingEvent};

/// Panes shown in the demo toolbar: (identifier, item width).
const PANES: &[(&str, f32)] = &[
    ("general", 56.0),
    ("accounts", 64.0),
    ("junk_mail", 68.0),
    ("fonts_colors", 92.0),
    ("viewing", 56.0),
    ("composing", 74.0),
    ("signatures", 72.0),
    ("rules", 48.0),
    ("reply_header", 96.0),
];

const ITEM_HEIGHT: f32 = 48.0;
/// The header pane shows two-line labels under its toolbar items.
const TALL_ITEM_HEIGHT: f32 = 62.0;

fn toolbar_items(height: f32) -> Vec<ToolbarItem> {
    PANES
        .iter()
        .map(|&(id, width)| ToolbarItem::new(id, width, height))
        .collect()
}

/// A preferences window sized for far fewer panes than it has.
pub fn preferences_window() -> HeadlessPreferences {
    let mut prefs = HeadlessPreferences::new(Rect::new(120.0, 90.0, 480.0, 360.0));
    for &(id, _) in PANES {
        let height = if id == "reply_header" {
            TALL_ITEM_HEIGHT
        } else {
            ITEM_HEIGHT
        };
        prefs = prefs.with_pane(HeadlessPane::new(id, toolbar_items(height)));
    }
    prefs
}

/// Show the window, visit every pane, then shrink it as a user would.
/// Returns the window frame at the end of the session.
pub fn run(coordinator: &Coordinator, prefs: &mut HeadlessPreferences) -> Option<Rect> {
    coordinator.handle_event(Some(&mut *prefs), &SizingEvent::PreferencesShown);
    log_frame("shown", prefs);

    for &(id, _) in PANES {
        let event = SizingEvent::ToolbarItemClicked(ToolbarItemId::from(id));
        coordinator.handle_event(Some(&mut *prefs), &event);
        log_frame(id, prefs);
    }

    let proposed = Size::new(320.0, 300.0);
    let event = SizingEvent::WindowWillResize { proposed };
    let size = coordinator
        .handle_event(Some(&mut *prefs), &event)
        .unwrap_or(proposed);
    prefs.apply_user_resize(size);
    log_frame("user resize", prefs);

    prefs.frame()
}

fn log_frame(step: &str, prefs: &HeadlessPreferences) {
    match prefs.window_frame() {
        Some(frame) => log::info!(
            "{:>14}: origin ({}, {}) size {}x{}",
            step,
            frame.x,
            frame.y,
            frame.width,
            frame.height
        ),
        None => log::info!("{:>14}: window closed", step),
    }
}
