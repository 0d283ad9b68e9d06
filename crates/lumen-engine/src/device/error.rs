/// What the window loop does after `get_current_texture` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Lost or outdated swapchain; the surface was configured again and the
    /// next redraw can acquire a frame.
    Reconfigured,
    /// Timeout or driver hiccup; drop this frame only.
    SkipFrame,
    /// Out of memory; the viewer exits.
    Fatal,
}
