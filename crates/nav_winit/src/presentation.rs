use nav_core::PointerPresentation;
use tracing::warn;
use winit::window::{CursorGrabMode, Window};

/// Pointer-lock presentation on a winit window. Grab failures are logged
/// and swallowed; the session runs fine with a free cursor.
pub struct WindowPresentation<'a> {
    window: &'a Window,
}

impl<'a> WindowPresentation<'a> {
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl PointerPresentation for WindowPresentation<'_> {
    fn lock_pointer(&mut self) {
        // Locked is unsupported on some platforms; Confined still keeps the
        // cursor inside the window there.
        let grabbed = self
            .window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(err) = grabbed {
            warn!("cursor grab unavailable: {err}");
        }
        self.window.set_cursor_visible(false);
    }

    fn release_pointer(&mut self) {
        if let Err(err) = self.window.set_cursor_grab(CursorGrabMode::None) {
            warn!("cursor release failed: {err}");
        }
        self.window.set_cursor_visible(true);
    }
}
