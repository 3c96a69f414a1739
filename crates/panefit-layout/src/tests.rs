#[cfg(test)]
mod tests {
    use crate::{anchored_frame, ToolbarFit};
    use panefit_core::{Anchor, FitMetrics, Rect, Size, Toolbar, ToolbarItem, YAxis};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    fn rect_approx_eq(a: &Rect, b: &Rect) -> bool {
        approx_eq(a.x, b.x)
            && approx_eq(a.y, b.y)
            && approx_eq(a.width, b.width)
            && approx_eq(a.height, b.height)
    }

    fn spaced(spacing: f32) -> ToolbarFit {
        ToolbarFit::new(FitMetrics {
            item_spacing: spacing,
            trailing_padding: 0.0,
        })
    }

    /// Three items 50/60/70 wide, all 40 tall, already laid out.
    fn three_items() -> Toolbar {
        Toolbar::new(
            vec![
                ToolbarItem::new("general", 50.0, 40.0),
                ToolbarItem::new("accounts", 60.0, 40.0),
                ToolbarItem::new("signatures", 70.0, 40.0),
            ],
            40.0,
        )
    }

    // ──────────────────────────────────────────
    // Required toolbar extent
    // ──────────────────────────────────────────

    #[test]
    fn test_required_size_sums_widths_and_gaps() {
        let required = spaced(10.0).required_toolbar_size(&three_items());
        assert!(approx_eq(required.width, 200.0));
        assert!(approx_eq(required.height, 40.0));
    }

    #[test]
    fn test_required_size_single_item_has_no_gap() {
        let toolbar = Toolbar::new(vec![ToolbarItem::new("only", 80.0, 32.0)], 32.0);
        let required = spaced(10.0).required_toolbar_size(&toolbar);
        assert!(approx_eq(required.width, 80.0));
    }

    #[test]
    fn test_required_size_includes_trailing_padding() {
        let fit = ToolbarFit::new(FitMetrics {
            item_spacing: 10.0,
            trailing_padding: 10.0,
        });
        let required = fit.required_toolbar_size(&three_items());
        assert!(approx_eq(required.width, 210.0));
    }

    #[test]
    fn test_required_size_empty_toolbar_is_zero() {
        let required = spaced(10.0).required_toolbar_size(&Toolbar::default());
        assert_eq!(required, Size::ZERO);
    }

    // ──────────────────────────────────────────
    // Width: grow, never shrink
    // ──────────────────────────────────────────

    #[test]
    fn test_narrow_window_grows_to_toolbar_width() {
        let fit = spaced(10.0).compute_fit_size(Size::new(150.0, 300.0), &three_items());
        assert!(approx_eq(fit.width, 200.0));
        assert!(approx_eq(fit.height, 300.0));
    }

    #[test]
    fn test_wide_window_keeps_its_width() {
        let fit = spaced(10.0).compute_fit_size(Size::new(250.0, 300.0), &three_items());
        assert!(approx_eq(fit.width, 250.0));
        assert!(approx_eq(fit.height, 300.0));
    }

    #[test]
    fn test_empty_toolbar_leaves_window_size() {
        let window = Size::new(123.0, 456.0);
        let toolbar = Toolbar::new(Vec::new(), 40.0);
        assert_eq!(spaced(10.0).compute_fit_size(window, &toolbar), window);
    }

    #[test]
    fn test_repeated_computation_is_identical() {
        let fit = spaced(10.0);
        let window = Size::new(150.0, 300.0);
        let toolbar = three_items();
        let first = fit.compute_fit_size(window, &toolbar);
        let second = fit.compute_fit_size(window, &toolbar);
        assert_eq!(first, second);
    }

    // ──────────────────────────────────────────
    // Height follows the toolbar delta
    // ──────────────────────────────────────────

    #[test]
    fn test_taller_items_add_height_delta() {
        // Window laid out for 40pt items; the new pane brings 60pt items.
        let toolbar = Toolbar::new(
            vec![
                ToolbarItem::new("general", 50.0, 40.0),
                ToolbarItem::new("header", 60.0, 60.0),
            ],
            40.0,
        );
        let fit = spaced(10.0).compute_fit_size(Size::new(400.0, 300.0), &toolbar);
        assert!(approx_eq(fit.height, 320.0));
        assert!(approx_eq(fit.width, 400.0));
    }

    #[test]
    fn test_shorter_items_remove_height_delta() {
        let toolbar = Toolbar::new(vec![ToolbarItem::new("general", 50.0, 32.0)], 60.0);
        let fit = spaced(10.0).compute_fit_size(Size::new(400.0, 300.0), &toolbar);
        assert!(approx_eq(fit.height, 272.0));
    }

    #[test]
    fn test_height_never_below_toolbar() {
        let toolbar = Toolbar::new(vec![ToolbarItem::new("general", 50.0, 60.0)], 0.0);
        let fit = spaced(10.0).compute_fit_size(Size::new(100.0, 0.0), &toolbar);
        assert!(approx_eq(fit.height, 60.0));
    }

    // ──────────────────────────────────────────
    // Malformed input
    // ──────────────────────────────────────────

    #[test]
    fn test_malformed_items_contribute_zero() {
        let toolbar = Toolbar::new(
            vec![
                ToolbarItem::new("ok", 50.0, 40.0),
                ToolbarItem::new("nan", f32::NAN, f32::NAN),
                ToolbarItem::new("negative", -30.0, -5.0),
                ToolbarItem::new("infinite", f32::INFINITY, 40.0),
            ],
            40.0,
        );
        let required = spaced(10.0).required_toolbar_size(&toolbar);
        // 50 plus three gaps; every item still takes a slot.
        assert!(approx_eq(required.width, 80.0));
        assert!(approx_eq(required.height, 40.0));
    }

    #[test]
    fn test_negative_metrics_are_clamped() {
        let fit = ToolbarFit::new(FitMetrics {
            item_spacing: -10.0,
            trailing_padding: f32::NAN,
        });
        assert_eq!(fit.metrics().item_spacing, 0.0);
        assert_eq!(fit.metrics().trailing_padding, 0.0);
        let required = fit.required_toolbar_size(&three_items());
        assert!(approx_eq(required.width, 180.0));
    }

    #[test]
    fn test_huge_items_saturate_instead_of_overflowing() {
        let toolbar = Toolbar::new(
            vec![
                ToolbarItem::new("a", f32::MAX, f32::MAX),
                ToolbarItem::new("b", f32::MAX, 40.0),
            ],
            0.0,
        );
        let fit = spaced(10.0);
        let required = fit.required_toolbar_size(&toolbar);
        assert_eq!(required.width, f32::MAX);

        let size = fit.compute_fit_size(Size::new(200.0, f32::MAX), &toolbar);
        assert_eq!(size.width, f32::MAX);
        assert_eq!(size.height, f32::MAX);
        assert!(fit.satisfies(size, &toolbar));
    }

    #[test]
    fn test_malformed_window_treated_as_zero() {
        let fit = spaced(10.0).compute_fit_size(Size::new(f32::NAN, -20.0), &three_items());
        assert!(approx_eq(fit.width, 200.0));
        assert!(approx_eq(fit.height, 40.0));
    }

    // ──────────────────────────────────────────
    // satisfies
    // ──────────────────────────────────────────

    #[test]
    fn test_satisfies_accepts_large_enough_size() {
        let fit = spaced(10.0);
        assert!(fit.satisfies(Size::new(200.0, 300.0), &three_items()));
        assert!(fit.satisfies(Size::new(500.0, 300.0), &three_items()));
    }

    #[test]
    fn test_satisfies_rejects_clipping_size() {
        let fit = spaced(10.0);
        assert!(!fit.satisfies(Size::new(199.0, 300.0), &three_items()));
    }

    #[test]
    fn test_satisfies_rejects_pending_height_growth() {
        let toolbar = Toolbar::new(vec![ToolbarItem::new("header", 60.0, 60.0)], 40.0);
        assert!(!spaced(10.0).satisfies(Size::new(400.0, 300.0), &toolbar));
    }

    // ──────────────────────────────────────────
    // anchored_frame
    // ──────────────────────────────────────────

    #[test]
    fn test_top_left_y_down_keeps_origin() {
        let current = Rect::new(100.0, 80.0, 150.0, 300.0);
        let frame = anchored_frame(current, Size::new(200.0, 320.0), Anchor::TopLeft, YAxis::Down);
        assert!(rect_approx_eq(&frame, &Rect::new(100.0, 80.0, 200.0, 320.0)));
    }

    #[test]
    fn test_top_left_y_up_keeps_top_edge() {
        // Top edge at y = 700 in bottom-left-origin coordinates.
        let current = Rect::new(100.0, 400.0, 150.0, 300.0);
        let frame = anchored_frame(current, Size::new(200.0, 320.0), Anchor::TopLeft, YAxis::Up);
        assert!(rect_approx_eq(&frame, &Rect::new(100.0, 380.0, 200.0, 320.0)));
        assert!(approx_eq(frame.y + frame.height, current.y + current.height));
    }

    #[test]
    fn test_top_center_keeps_horizontal_center() {
        let current = Rect::new(100.0, 80.0, 150.0, 300.0);
        let frame = anchored_frame(current, Size::new(200.0, 300.0), Anchor::TopCenter, YAxis::Down);
        assert!(approx_eq(frame.x, 75.0));
        assert!(approx_eq(frame.x + frame.width / 2.0, current.x + current.width / 2.0));
    }

    #[test]
    fn test_same_size_is_identity() {
        let current = Rect::new(10.0, 20.0, 300.0, 200.0);
        for anchor in [Anchor::TopLeft, Anchor::TopCenter] {
            for axis in [YAxis::Down, YAxis::Up] {
                let frame = anchored_frame(current, current.size(), anchor, axis);
                assert!(rect_approx_eq(&frame, &current));
            }
        }
    }
}
