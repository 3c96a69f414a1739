use std::fmt;

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

/// A window frame in host coordinates. Which edge `y` measures from depends
/// on the host's [`YAxis`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are at least those of `other`.
    pub fn contains(&self, other: Size) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

/// The size computed for a window so that its toolbar shows every item.
pub type TargetSize = Size;

// ──────────────────────────────────────────────
// Window conventions
// ──────────────────────────────────────────────

/// Direction of the host's vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YAxis {
    /// Origin at the top-left, y grows downward.
    #[default]
    Down,
    /// Origin at the bottom-left, y grows upward (AppKit screen coordinates).
    Up,
}

/// Which point of the window's top edge stays put while its size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
}

// ──────────────────────────────────────────────
// Toolbar
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolbarItemId(String);

impl ToolbarItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToolbarItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToolbarItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ToolbarItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable toolbar control with its natural (rendered) size,
/// label and padding included.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarItem {
    pub id: ToolbarItemId,
    pub width: f32,
    pub height: f32,
}

impl ToolbarItem {
    pub fn new(id: impl Into<ToolbarItemId>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }

    /// Natural size with malformed dimensions (negative, NaN, infinite)
    /// treated as zero.
    pub fn footprint(&self) -> Size {
        Size::new(sanitize(self.width), sanitize(self.height))
    }
}

/// Snapshot of the visible toolbar items, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Toolbar {
    pub items: Vec<ToolbarItem>,
    /// Toolbar height the window's current frame already accounts for.
    pub laid_out_height: f32,
}

impl Toolbar {
    pub fn new(items: Vec<ToolbarItem>, laid_out_height: f32) -> Self {
        Self {
            items,
            laid_out_height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Spacing constants used when measuring a toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitMetrics {
    /// Gap between adjacent toolbar items.
    pub item_spacing: f32,
    /// Extra width kept after the last item.
    pub trailing_padding: f32,
}

impl Default for FitMetrics {
    fn default() -> Self {
        Self {
            item_spacing: 10.0,
            trailing_padding: 0.0,
        }
    }
}

/// Clamp a host-supplied dimension to a finite, non-negative value.
pub fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// ──────────────────────────────────────────────
// Trait: PreferencesSizing
// ──────────────────────────────────────────────

/// The host's preferences owner, as seen by the resize coordinator.
/// A host implements this (or wraps its owner object in something that does)
/// so the coordinator never has to reach into host internals.
pub trait PreferencesSizing {
    /// Current frame of the preferences window, `None` if it does not exist yet.
    fn window_frame(&self) -> Option<Rect>;
    /// Current toolbar snapshot, `None` if the window has no toolbar.
    fn toolbar(&self) -> Option<Toolbar>;
    fn set_window_frame(&mut self, frame: Rect);
    /// Let the host swap in the pane behind `item`.
    fn activate_pane(&mut self, item: &ToolbarItemId);

    /// Order the window front. Called after the initial fit is applied.
    fn present_window(&mut self) {}

    fn y_axis(&self) -> YAxis {
        YAxis::Down
    }
}
