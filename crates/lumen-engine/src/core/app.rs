use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Returned from every callback; `Exit` stops the event loop after the callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Window-side behaviour driven by [`Runtime`](crate::window::Runtime).
///
/// The viewer implements this to turn input into camera motion and to draw
/// the scene each redraw.
pub trait App {
    /// Sees every window event first; resize and close are handled by the
    /// runtime afterwards.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// One redraw of one window. `ctx.time.dt` is already clamped.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
