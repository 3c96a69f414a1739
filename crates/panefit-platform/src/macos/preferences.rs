//! NSWindow wrapper implementing PreferencesSizing.

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, Bool};
use objc2::{msg_send, msg_send_id, sel};
use objc2_app_kit::NSWindow;
use objc2_foundation::{CGFloat, NSPoint, NSRect, NSSize, NSString};

use panefit_core::{PreferencesSizing, Rect, Toolbar, ToolbarItem, ToolbarItemId, YAxis};

/// Host callback that switches the visible preference pane.
pub type PaneSwitcher = Box<dyn FnMut(&ToolbarItemId)>;

/// A host preferences window backed by NSWindow + NSToolbar.
pub struct MacosPreferences {
    ns_window: Retained<NSWindow>,
    switch_pane: PaneSwitcher,
}

impl MacosPreferences {
    pub fn new(ns_window: Retained<NSWindow>, switch_pane: PaneSwitcher) -> Self {
        Self {
            ns_window,
            switch_pane,
        }
    }

    pub fn ns_window(&self) -> &NSWindow {
        &self.ns_window
    }
}

impl PreferencesSizing for MacosPreferences {
    fn window_frame(&self) -> Option<Rect> {
        let frame: NSRect = unsafe { msg_send![&self.ns_window, frame] };
        Some(rect_from_ns(frame))
    }

    fn toolbar(&self) -> Option<Toolbar> {
        unsafe {
            let toolbar: Option<Retained<AnyObject>> = msg_send_id![&self.ns_window, toolbar];
            let toolbar = toolbar?;
            let visible: Option<Retained<AnyObject>> = msg_send_id![&toolbar, visibleItems];
            let visible = visible?;

            let count: usize = msg_send![&visible, count];
            let mut items = Vec::with_capacity(count);
            for idx in 0..count {
                let item: Retained<AnyObject> = msg_send_id![&visible, objectAtIndex: idx];
                items.push(toolbar_item(&item));
            }

            // AppKit grows the titlebar with the toolbar itself, so the frame
            // always accounts for the items currently laid out.
            let tallest = items
                .iter()
                .map(|item| item.footprint().height)
                .fold(0.0, f32::max);
            Some(Toolbar::new(items, tallest))
        }
    }

    fn set_window_frame(&mut self, frame: Rect) {
        let rect = ns_from_rect(frame);
        unsafe {
            let _: () = msg_send![&self.ns_window, setFrame: rect, display: Bool::YES];
        }
    }

    fn activate_pane(&mut self, item: &ToolbarItemId) {
        (self.switch_pane)(item);
    }

    fn present_window(&mut self) {
        self.ns_window.makeKeyAndOrderFront(None);
    }

    fn y_axis(&self) -> YAxis {
        YAxis::Up
    }
}

/// Measure one NSToolbarItem. Items hosting a custom view report that view's
/// frame; plain image items fall back to `minSize`, then to the item viewer
/// AppKit lays out for them.
unsafe fn toolbar_item(item: &AnyObject) -> ToolbarItem {
    let ident: Retained<NSString> = msg_send_id![item, itemIdentifier];

    let view: Option<Retained<AnyObject>> = msg_send_id![item, view];
    let mut size = match view {
        Some(view) => {
            let frame: NSRect = msg_send![&view, frame];
            frame.size
        }
        None => msg_send![item, minSize],
    };

    if size.width <= 0.0 {
        let responds: Bool = msg_send![item, respondsToSelector: sel!(_itemViewer)];
        if responds.as_bool() {
            let viewer: Option<Retained<AnyObject>> = msg_send_id![item, _itemViewer];
            if let Some(viewer) = viewer {
                let frame: NSRect = msg_send![&viewer, frame];
                size = frame.size;
            }
        }
    }

    ToolbarItem::new(ident.to_string(), size.width as f32, size.height as f32)
}

fn rect_from_ns(rect: NSRect) -> Rect {
    Rect::new(
        rect.origin.x as f32,
        rect.origin.y as f32,
        rect.size.width as f32,
        rect.size.height as f32,
    )
}

fn ns_from_rect(rect: Rect) -> NSRect {
    NSRect::new(
        NSPoint::new(rect.x as CGFloat, rect.y as CGFloat),
        NSSize::new(rect.width as CGFloat, rect.height as CGFloat),
    )
}
