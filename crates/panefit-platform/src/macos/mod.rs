//! macOS backend using objc2.
//!
//! The host installs its preferences window once, then forwards its
//! show/click hooks to [`preferences_shown`] and [`toolbar_item_clicked`].
//! Live resizes arrive through [`PreferencesWindowDelegate`].

mod delegate;
mod preferences;

use std::cell::RefCell;

use objc2::msg_send;
use objc2_app_kit::NSWindow;
use objc2_foundation::MainThreadMarker;

use panefit_core::ToolbarItemId;

pub use delegate::PreferencesWindowDelegate;
pub use preferences::{MacosPreferences, PaneSwitcher};

thread_local! {
    static PREFERENCES: RefCell<Option<MacosPreferences>> = RefCell::new(None);
}

/// Make `prefs` the window the entry points below operate on.
pub fn install_preferences(prefs: MacosPreferences) {
    PREFERENCES.with(|cell| {
        cell.replace(Some(prefs));
    });
}

/// Forget the installed window. Returns whether one was installed.
pub fn teardown_preferences() -> bool {
    PREFERENCES.with(|cell| cell.borrow_mut().take()).is_some()
}

/// Access the installed preferences window. Returns `None` when nothing is
/// installed or the window is already borrowed further up the stack (AppKit
/// can call back into the delegate while a frame is being applied).
pub fn with_preferences<R>(f: impl FnOnce(&mut MacosPreferences) -> R) -> Option<R> {
    PREFERENCES.with(|cell| {
        let mut borrow = cell.try_borrow_mut().ok()?;
        borrow.as_mut().map(f)
    })
}

/// Install a [`PreferencesWindowDelegate`] on `window` so live resizes are
/// clamped to the toolbar fit. Replaces the window's current delegate.
pub fn attach_resize_delegate(window: &NSWindow, mtm: MainThreadMarker) {
    let delegate = PreferencesWindowDelegate::new(mtm);
    unsafe {
        let _: () = msg_send![window, setDelegate: &*delegate];
    }
    // NSWindow holds its delegate weakly; keep it alive for the app's lifetime.
    std::mem::forget(delegate);
}

/// Host hook: the preferences panel is about to show.
pub fn preferences_shown() {
    let handled = with_preferences(|prefs| {
        crate::shared::with_shared(|c| c.on_preferences_shown(Some(prefs)))
    })
    .flatten();
    if handled.is_none() {
        log::debug!("preferences shown before a window or coordinator was installed");
    }
}

/// Host hook: the toolbar item `identifier` was clicked.
pub fn toolbar_item_clicked(identifier: &str) {
    let item = ToolbarItemId::new(identifier);
    let handled = with_preferences(|prefs| {
        crate::shared::with_shared(|c| c.on_toolbar_item_clicked(Some(prefs), Some(&item)))
    })
    .flatten();
    if handled.is_none() {
        log::debug!("toolbar item {} clicked before a window or coordinator was installed", item);
    }
}
