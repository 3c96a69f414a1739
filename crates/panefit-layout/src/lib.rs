// Toolbar-driven window sizing.
// Measures the toolbar's natural extent and grows the window to fit it.

mod tests;

use panefit_core::{sanitize, Anchor, FitMetrics, Rect, Size, TargetSize, Toolbar, YAxis};

// ──────────────────────────────────────────────
// ToolbarFit
// ──────────────────────────────────────────────

/// Computes the window size that shows every toolbar item without clipping.
///
/// Width only ever grows; height follows the change in toolbar height so the
/// rest of the window chrome keeps its size.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolbarFit {
    metrics: FitMetrics,
}

impl ToolbarFit {
    pub fn new(metrics: FitMetrics) -> Self {
        Self {
            metrics: FitMetrics {
                item_spacing: sanitize(metrics.item_spacing),
                trailing_padding: sanitize(metrics.trailing_padding),
            },
        }
    }

    pub fn metrics(&self) -> FitMetrics {
        self.metrics
    }

    /// Width and height the toolbar needs to lay out all of its items.
    /// An empty toolbar needs nothing.
    pub fn required_toolbar_size(&self, toolbar: &Toolbar) -> Size {
        if toolbar.is_empty() {
            return Size::ZERO;
        }

        let mut width = 0.0_f32;
        let mut height = 0.0_f32;
        for item in &toolbar.items {
            let footprint = item.footprint();
            width += footprint.width;
            height = height.max(footprint.height);
        }

        let gaps = (toolbar.items.len() - 1) as f32;
        width += gaps * self.metrics.item_spacing + self.metrics.trailing_padding;
        Size::new(saturate(width), height)
    }

    /// Window size that fits `toolbar`, using `window` as the baseline.
    pub fn compute_fit_size(&self, window: Size, toolbar: &Toolbar) -> TargetSize {
        let current = Size::new(sanitize(window.width), sanitize(window.height));
        if toolbar.is_empty() {
            return current;
        }

        let required = self.required_toolbar_size(toolbar);
        let width = current.width.max(required.width);

        // Chrome outside the toolbar keeps its size; only the toolbar delta applies.
        // The window never gets shorter than its toolbar.
        let delta = required.height - sanitize(toolbar.laid_out_height);
        let height = saturate(current.height + delta).max(required.height);

        let fit = Size::new(width, height);
        log::trace!(
            "fit {}x{} -> {}x{} (toolbar needs {}x{})",
            current.width,
            current.height,
            fit.width,
            fit.height,
            required.width,
            required.height
        );
        fit
    }

    /// True when `size` is already at least as large as its own fit.
    pub fn satisfies(&self, size: Size, toolbar: &Toolbar) -> bool {
        size.contains(self.compute_fit_size(size, toolbar))
    }
}

/// Clamp an overflowed sum to the largest finite value.
fn saturate(value: f32) -> f32 {
    value.min(f32::MAX)
}

// ──────────────────────────────────────────────
// Frame application
// ──────────────────────────────────────────────

/// New frame of `size` whose top edge stays where `current`'s top edge is.
///
/// `Anchor::TopLeft` keeps the left edge; `Anchor::TopCenter` keeps the
/// horizontal center. With `YAxis::Up` the origin is the bottom-left corner,
/// so the origin moves down by however much the window grows.
pub fn anchored_frame(current: Rect, size: Size, anchor: Anchor, y_axis: YAxis) -> Rect {
    let x = match anchor {
        Anchor::TopLeft => current.x,
        Anchor::TopCenter => current.x + (current.width - size.width) / 2.0,
    };
    let y = match y_axis {
        YAxis::Down => current.y,
        YAxis::Up => current.y + current.height - size.height,
    };
    Rect::new(x, y, size.width, size.height)
}
