//! Resize event coordinator.
//!
//! Every entry point is synchronous and finishes inside the host callback
//! that invoked it. Missing host references turn the call into a no-op.

use std::cell::Cell;

use panefit_core::{Anchor, PreferencesSizing, Rect, Size, TargetSize, ToolbarItemId};
use panefit_layout::{anchored_frame, ToolbarFit};

use crate::SizingEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    /// A fit is being computed or applied.
    Resizing,
}

/// Keeps a preferences window sized to its toolbar across show, pane swap
/// and live resize.
pub struct Coordinator {
    fit: ToolbarFit,
    anchor: Anchor,
    state: Cell<CoordinatorState>,
}

impl Coordinator {
    pub fn new(fit: ToolbarFit, anchor: Anchor) -> Self {
        Self {
            fit,
            anchor,
            state: Cell::new(CoordinatorState::Idle),
        }
    }

    pub fn fit(&self) -> &ToolbarFit {
        &self.fit
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn state(&self) -> CoordinatorState {
        self.state.get()
    }

    // ── Entry points ──

    /// The preferences panel is about to become visible. Applies the fit
    /// first so the window never jumps after it is on screen.
    pub fn on_preferences_shown(&self, owner: Option<&mut dyn PreferencesSizing>) {
        let Some(owner) = owner else {
            log::debug!("preferences shown without an owner; ignoring");
            return;
        };
        if owner.window_frame().is_none() {
            log::debug!("preferences shown without a window; ignoring");
            return;
        }

        self.resize_to_show_all_items(&mut *owner);
        owner.present_window();
    }

    /// The user picked a pane from the toolbar. The host switches panes, then
    /// the fit is re-applied since the new pane may bring a different toolbar.
    pub fn on_toolbar_item_clicked(
        &self,
        owner: Option<&mut dyn PreferencesSizing>,
        item: Option<&ToolbarItemId>,
    ) {
        let (Some(owner), Some(item)) = (owner, item) else {
            log::debug!("toolbar click without an owner or item; ignoring");
            return;
        };

        // Pane switch runs outside the resize guard so a host resize for the
        // new pane still goes through will-resize.
        owner.activate_pane(item);
        self.resize_to_show_all_items(owner);
    }

    /// The host is about to resize the window to `proposed`. Returns the size
    /// the window should take instead: the proposal itself when it already
    /// fits the toolbar, the fit size otherwise.
    pub fn on_window_will_resize(
        &self,
        owner: Option<&dyn PreferencesSizing>,
        proposed: Size,
    ) -> TargetSize {
        let Some(owner) = owner else {
            return proposed;
        };
        if owner.window_frame().is_none() {
            return proposed;
        }
        let Some(_guard) = self.enter() else {
            log::trace!("will-resize during a fit; passing proposal through");
            return proposed;
        };
        let Some(toolbar) = owner.toolbar() else {
            return proposed;
        };

        if self.fit.satisfies(proposed, &toolbar) {
            proposed
        } else {
            let fit = self.fit.compute_fit_size(proposed, &toolbar);
            log::debug!(
                "overriding proposed size {}x{} with {}x{}",
                proposed.width,
                proposed.height,
                fit.width,
                fit.height
            );
            fit
        }
    }

    /// Dispatch a host event to its entry point. Only will-resize produces a size.
    pub fn handle_event(
        &self,
        owner: Option<&mut dyn PreferencesSizing>,
        event: &SizingEvent,
    ) -> Option<TargetSize> {
        match event {
            SizingEvent::PreferencesShown => {
                self.on_preferences_shown(owner);
                None
            }
            SizingEvent::ToolbarItemClicked(item) => {
                self.on_toolbar_item_clicked(owner, Some(item));
                None
            }
            SizingEvent::WindowWillResize { proposed } => {
                Some(self.on_window_will_resize(owner.map(|o| &*o), *proposed))
            }
        }
    }

    // ── Sizing helpers ──

    /// Window size needed to show every toolbar item, without applying it.
    pub fn fit_size(&self, owner: &dyn PreferencesSizing) -> Option<TargetSize> {
        let frame = owner.window_frame()?;
        let toolbar = owner.toolbar()?;
        Some(self.fit.compute_fit_size(frame.size(), &toolbar))
    }

    /// Compute the fit and apply it, keeping the window's top edge in place.
    /// Returns the window's frame afterwards, or `None` when nothing could be
    /// measured or a fit is already in progress.
    pub fn resize_to_show_all_items(&self, owner: &mut dyn PreferencesSizing) -> Option<Rect> {
        let Some(_guard) = self.enter() else {
            log::trace!("fit requested during a fit; skipping");
            return None;
        };
        let Some(current) = owner.window_frame() else {
            log::debug!("no preferences window to resize");
            return None;
        };
        let Some(toolbar) = owner.toolbar() else {
            log::debug!("preferences window has no toolbar; leaving size alone");
            return None;
        };

        let size = self.fit.compute_fit_size(current.size(), &toolbar);
        let frame = anchored_frame(current, size, self.anchor, owner.y_axis());
        if frame == current {
            return Some(current);
        }

        log::debug!(
            "resizing preferences window {}x{} -> {}x{}",
            current.width,
            current.height,
            frame.width,
            frame.height
        );
        owner.set_window_frame(frame);
        Some(frame)
    }

    fn enter(&self) -> Option<ResizeGuard<'_>> {
        if self.state.get() == CoordinatorState::Resizing {
            return None;
        }
        self.state.set(CoordinatorState::Resizing);
        Some(ResizeGuard { state: &self.state })
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(ToolbarFit::default(), Anchor::default())
    }
}

/// Returns the coordinator to `Idle` when the fit finishes, early returns included.
struct ResizeGuard<'a> {
    state: &'a Cell<CoordinatorState>,
}

impl Drop for ResizeGuard<'_> {
    fn drop(&mut self) {
        self.state.set(CoordinatorState::Idle);
    }
}
