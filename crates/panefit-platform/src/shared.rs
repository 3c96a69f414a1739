//! Process-wide coordinator slot.
//!
//! The host installs one coordinator when its preferences integration loads
//! and tears it down when it unloads. Nothing is created lazily. The slot is
//! thread-local: every entry point runs on the UI thread.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Coordinator;

thread_local! {
    static SHARED: RefCell<Option<Rc<Coordinator>>> = RefCell::new(None);
}

/// Install `coordinator` as the shared instance and hand back a reference to it.
/// Replaces (and drops) any previously installed coordinator.
pub fn install(coordinator: Coordinator) -> Rc<Coordinator> {
    let coordinator = Rc::new(coordinator);
    let previous = SHARED.with(|cell| cell.replace(Some(Rc::clone(&coordinator))));
    if previous.is_some() {
        log::warn!("replacing an already installed resize coordinator");
    }
    coordinator
}

/// The installed coordinator, if any.
pub fn shared() -> Option<Rc<Coordinator>> {
    SHARED.with(|cell| cell.borrow().clone())
}

/// Run `f` against the installed coordinator.
pub fn with_shared<R>(f: impl FnOnce(&Coordinator) -> R) -> Option<R> {
    // Clone out of the slot so `f` may itself install or tear down.
    let coordinator = shared()?;
    Some(f(&coordinator))
}

/// Drop the shared instance. Returns whether one was installed.
pub fn teardown() -> bool {
    SHARED.with(|cell| cell.borrow_mut().take()).is_some()
}

pub fn is_installed() -> bool {
    SHARED.with(|cell| cell.borrow().is_some())
}
