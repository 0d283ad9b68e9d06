use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use lumen_engine::core::{App as EngineApp, AppControl, FrameCtx};
use lumen_engine::render::MeshRenderer;
use lumen_engine::scene::Scene;

use crate::app::App;

/// Interactive preview settings.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Automatic azimuth rotation, radians per second. `0` disables it.
    pub orbit_speed: f32,
    /// Radians per physical pixel of left-button drag.
    pub drag_sensitivity: f32,
    /// Radius change per wheel line.
    pub zoom_step: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            orbit_speed: 0.3,
            drag_sensitivity: 0.01,
            zoom_step: 0.25,
        }
    }
}

/// Pixel-delta scroll is converted to lines with this many pixels per line.
const PIXELS_PER_LINE: f32 = 40.0;

/// Runs the bootstrapped scene in a window.
///
/// The scene is created on the first frame, on the window's own device, so
/// mesh buffers and the renderer share one wgpu device.
pub struct Viewer {
    app: App,
    config: ViewerConfig,
    scene: Option<Scene>,
    renderer: MeshRenderer,

    dragging: bool,
    last_cursor: Option<(f64, f64)>,
    pending_orbit: (f32, f32),
    pending_zoom: f32,
}

impl Viewer {
    pub fn new(app: App, config: ViewerConfig) -> Self {
        Self {
            app,
            config,
            scene: None,
            renderer: MeshRenderer::new(),
            dragging: false,
            last_cursor: None,
            pending_orbit: (0.0, 0.0),
            pending_zoom: 0.0,
        }
    }

    fn on_cursor_moved(&mut self, x: f64, y: f64) {
        if let (true, Some((lx, ly))) = (self.dragging, self.last_cursor) {
            let dx = (x - lx) as f32;
            let dy = (y - ly) as f32;
            self.pending_orbit.0 -= dx * self.config.drag_sensitivity;
            self.pending_orbit.1 -= dy * self.config.drag_sensitivity;
        }
        self.last_cursor = Some((x, y));
    }

    fn on_wheel(&mut self, lines: f32) {
        self.pending_zoom -= lines * self.config.zoom_step;
    }

    /// Applies accumulated input plus the automatic orbit to the active camera.
    fn update_camera(&mut self, dt: f32) {
        let (d_alpha, d_beta) = std::mem::take(&mut self.pending_orbit);
        let d_radius = std::mem::take(&mut self.pending_zoom);

        let Some(camera) = self.scene.as_mut().and_then(Scene::active_camera_mut) else {
            return;
        };
        camera.orbit(d_alpha + self.config.orbit_speed * dt, d_beta);
        camera.zoom(d_radius);
    }
}

impl EngineApp for Viewer {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                return AppControl::Exit;
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                self.dragging = *state == ElementState::Pressed;
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.dragging = false;
                self.last_cursor = None;
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                self.on_wheel(lines);
            }

            _ => {}
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.scene.is_none() {
            let mut engine = ctx.gpu.engine();
            match pollster::block_on(self.app.create_scene(&mut engine)) {
                Ok(scene) => self.scene = Some(scene),
                Err(e) => {
                    log::error!("scene bootstrap failed: {e:#}");
                    return AppControl::Exit;
                }
            }
        }

        self.update_camera(ctx.time.dt);

        let Some(scene) = self.scene.as_ref() else {
            return AppControl::Exit;
        };
        let renderer = &mut self.renderer;

        ctx.render(scene.clear_color, |rctx, target| renderer.render(rctx, target, scene))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_engine::engine::NullEngine;

    fn viewer_with_scene() -> Viewer {
        let mut viewer = Viewer::new(App::new(), ViewerConfig::default());
        let mut engine = NullEngine::new();
        viewer.scene = Some(pollster::block_on(viewer.app.create_scene(&mut engine)).unwrap());
        viewer
    }

    fn camera_alpha_beta(viewer: &Viewer) -> (f32, f32) {
        let cam = viewer.scene.as_ref().unwrap().active_camera().unwrap();
        (cam.alpha(), cam.beta())
    }

    #[test]
    fn auto_orbit_advances_alpha() {
        let mut viewer = viewer_with_scene();
        let (a0, _) = camera_alpha_beta(&viewer);
        viewer.update_camera(1.0);
        let (a1, _) = camera_alpha_beta(&viewer);
        assert!((a1 - a0 - 0.3).abs() < 1e-5);
    }

    #[test]
    fn drag_without_button_does_nothing() {
        let mut viewer = viewer_with_scene();
        viewer.config.orbit_speed = 0.0;
        let before = camera_alpha_beta(&viewer);
        viewer.on_cursor_moved(0.0, 0.0);
        viewer.on_cursor_moved(50.0, 20.0);
        viewer.update_camera(0.016);
        let after = camera_alpha_beta(&viewer);
        assert!((after.0 - before.0).abs() < 1e-6);
        assert!((after.1 - before.1).abs() < 1e-6);
    }

    #[test]
    fn drag_orbits_and_is_consumed() {
        let mut viewer = viewer_with_scene();
        viewer.config.orbit_speed = 0.0;
        let (a0, b0) = camera_alpha_beta(&viewer);

        viewer.dragging = true;
        viewer.on_cursor_moved(0.0, 0.0);
        viewer.on_cursor_moved(10.0, 0.0);
        viewer.update_camera(0.016);
        let (a1, b1) = camera_alpha_beta(&viewer);
        assert!((a1 - (a0 - 0.1)).abs() < 1e-5);
        assert!((b1 - b0).abs() < 1e-6);

        viewer.update_camera(0.016);
        assert!((camera_alpha_beta(&viewer).0 - a1).abs() < 1e-6);
    }

    #[test]
    fn wheel_zooms_in() {
        let mut viewer = viewer_with_scene();
        viewer.on_wheel(2.0);
        viewer.update_camera(0.0);
        let cam = viewer.scene.as_ref().unwrap().active_camera().unwrap();
        assert!((cam.radius() - 2.5).abs() < 1e-5);
    }

    #[test]
    fn update_without_scene_is_noop() {
        let mut viewer = Viewer::new(App::new(), ViewerConfig::default());
        viewer.on_wheel(1.0);
        viewer.update_camera(1.0);
        assert!(viewer.scene.is_none());
        assert_eq!(viewer.pending_zoom, 0.0);
    }
}
