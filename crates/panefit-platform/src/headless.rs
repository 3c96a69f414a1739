//! In-memory preferences window.
//!
//! Behaves like a host preferences owner without any windowing system: it
//! keeps a frame, a set of panes each with its own toolbar, and a log of what
//! the coordinator asked it to do.

use panefit_core::{
    PreferencesSizing, Rect, Size, Toolbar, ToolbarItem, ToolbarItemId, YAxis,
};

/// Something the coordinator asked the headless window to do.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessAction {
    Frame(Rect),
    Activated(ToolbarItemId),
    Presented,
}

/// A preference pane and the toolbar shown while it is active.
#[derive(Debug, Clone)]
pub struct HeadlessPane {
    pub id: ToolbarItemId,
    pub toolbar_items: Vec<ToolbarItem>,
}

impl HeadlessPane {
    pub fn new(id: impl Into<ToolbarItemId>, toolbar_items: Vec<ToolbarItem>) -> Self {
        Self {
            id: id.into(),
            toolbar_items,
        }
    }

    fn tallest_item(&self) -> f32 {
        self.toolbar_items
            .iter()
            .map(|item| item.footprint().height)
            .fold(0.0, f32::max)
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessPreferences {
    frame: Option<Rect>,
    y_axis: YAxis,
    panes: Vec<HeadlessPane>,
    active: Option<usize>,
    laid_out_height: f32,
    applied_frames: Vec<Rect>,
    activations: Vec<ToolbarItemId>,
    presented: bool,
    actions: Vec<HeadlessAction>,
}

impl HeadlessPreferences {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame: Some(frame),
            y_axis: YAxis::Down,
            panes: Vec::new(),
            active: None,
            laid_out_height: 0.0,
            applied_frames: Vec::new(),
            activations: Vec::new(),
            presented: false,
            actions: Vec::new(),
        }
    }

    /// Register a pane. The first pane becomes active and the window starts
    /// out laid out for its toolbar.
    pub fn with_pane(mut self, pane: HeadlessPane) -> Self {
        if self.active.is_none() {
            self.laid_out_height = pane.tallest_item();
            self.active = Some(self.panes.len());
        }
        self.panes.push(pane);
        self
    }

    pub fn with_y_axis(mut self, y_axis: YAxis) -> Self {
        self.y_axis = y_axis;
        self
    }

    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    pub fn active_pane(&self) -> Option<&ToolbarItemId> {
        self.active.map(|idx| &self.panes[idx].id)
    }

    pub fn laid_out_height(&self) -> f32 {
        self.laid_out_height
    }

    /// Frames applied through `set_window_frame`, oldest first.
    pub fn applied_frames(&self) -> &[Rect] {
        &self.applied_frames
    }

    pub fn activations(&self) -> &[ToolbarItemId] {
        &self.activations
    }

    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// Every frame, activation and presentation, in the order they happened.
    pub fn actions(&self) -> &[HeadlessAction] {
        &self.actions
    }

    /// Resize as if the user finished dragging the window edge. The top-left
    /// corner stays put in either axis convention.
    pub fn apply_user_resize(&mut self, size: Size) {
        let Some(frame) = self.frame.as_mut() else {
            return;
        };
        if self.y_axis == YAxis::Up {
            frame.y += frame.height - size.height;
        }
        frame.width = size.width;
        frame.height = size.height;
    }

    pub fn close_window(&mut self) {
        self.frame = None;
        self.presented = false;
    }
}

impl PreferencesSizing for HeadlessPreferences {
    fn window_frame(&self) -> Option<Rect> {
        self.frame
    }

    fn toolbar(&self) -> Option<Toolbar> {
        let pane = &self.panes[self.active?];
        Some(Toolbar::new(pane.toolbar_items.clone(), self.laid_out_height))
    }

    fn set_window_frame(&mut self, frame: Rect) {
        if self.frame.is_none() {
            log::debug!("headless window is closed; dropping frame");
            return;
        }
        self.frame = Some(frame);
        self.applied_frames.push(frame);
        self.actions.push(HeadlessAction::Frame(frame));
        if let Some(idx) = self.active {
            self.laid_out_height = self.panes[idx].tallest_item();
        }
    }

    fn activate_pane(&mut self, item: &ToolbarItemId) {
        match self.panes.iter().position(|pane| &pane.id == item) {
            Some(idx) => {
                self.active = Some(idx);
                self.activations.push(item.clone());
                self.actions.push(HeadlessAction::Activated(item.clone()));
            }
            None => log::warn!("unknown preference pane: {}", item),
        }
    }

    fn present_window(&mut self) {
        self.presented = true;
        self.actions.push(HeadlessAction::Presented);
    }

    fn y_axis(&self) -> YAxis {
        self.y_axis
    }
}
