//! Window delegate that routes live resizes through the shared coordinator.

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, NSObject};
use objc2::{declare_class, msg_send_id, mutability, ClassType, DeclaredClass};
use objc2_foundation::{CGFloat, MainThreadMarker, NSSize};

use panefit_core::Size;

declare_class!(
    pub struct PreferencesWindowDelegate;

    unsafe impl ClassType for PreferencesWindowDelegate {
        type Super = NSObject;
        type Mutability = mutability::MainThreadOnly;
        const NAME: &'static str = "PanefitPreferencesWindowDelegate";
    }

    impl DeclaredClass for PreferencesWindowDelegate {
        type Ivars = ();
    }

    unsafe impl PreferencesWindowDelegate {
        #[method(windowWillResize:toSize:)]
        fn window_will_resize_to_size(&self, _sender: &AnyObject, frame_size: NSSize) -> NSSize {
            let proposed = Size::new(frame_size.width as f32, frame_size.height as f32);
            let fitted = super::with_preferences(|prefs| {
                crate::shared::with_shared(|c| c.on_window_will_resize(Some(&*prefs), proposed))
            })
            .flatten()
            .unwrap_or(proposed);
            NSSize::new(fitted.width as CGFloat, fitted.height as CGFloat)
        }
    }
);

impl PreferencesWindowDelegate {
    pub fn new(mtm: MainThreadMarker) -> Retained<Self> {
        let this = mtm.alloc::<Self>().set_ivars(());
        unsafe { msg_send_id![super(this), init] }
    }
}
