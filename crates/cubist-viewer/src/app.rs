use winit::event::{ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use cubist_engine::camera::CameraState;
use cubist_engine::core::{App, AppControl, FrameCtx};
use cubist_engine::geometry::{Palette, VisualizationMode};
use cubist_engine::render::{BufferSet, CubeRenderer};

use crate::controls::{self, Action};

/// Background matching the original canvas.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

/// GPU-side scene state, created lazily on the first frame (the device is
/// first available there).
struct Scene {
    renderer: CubeRenderer,
    buffers: BufferSet,
}

/// The viewer application.
///
/// Owns the camera, visualization mode, and palette as plain values; input
/// events mutate them between frames and `on_frame` reconciles the GPU
/// buffers *before* dispatching the draw, so a mode change and its index
/// buffer rebuild are one atomic sequence per frame.
pub struct ViewerApp {
    camera: CameraState,

    // The input surface speaks degrees; the camera stores radians. These are
    // the slider values.
    theta_deg: f32,
    phi_deg: f32,

    mode: VisualizationMode,
    palette: &'static Palette,
    palette_dirty: bool,

    scene: Option<Scene>,
}

impl ViewerApp {
    pub fn new() -> Self {
        Self {
            camera: CameraState::initial(),
            theta_deg: 45.0,
            phi_deg: 45.0,
            mode: VisualizationMode::Solid,
            palette: Palette::named("classic").expect("built-in palette"),
            palette_dirty: false,
            scene: None,
        }
    }

    /// Selects a palette by name; unknown names warn and keep the current
    /// palette rather than interrupting rendering.
    fn select_palette(&mut self, name: &str) {
        match Palette::named(name) {
            Some(palette) => {
                if !std::ptr::eq(palette, self.palette) {
                    self.palette = palette;
                    self.palette_dirty = true;
                    log::info!("palette: {name}");
                }
            }
            None => log::warn!("unknown palette {name:?}; keeping the current palette"),
        }
    }

    fn apply(&mut self, action: Action) -> AppControl {
        match action {
            Action::OrbitPolar(step) => {
                self.theta_deg += step;
                self.camera.set_theta_degrees(self.theta_deg);
            }
            Action::OrbitAzimuth(step) => {
                self.phi_deg += step;
                self.camera.set_phi_degrees(self.phi_deg);
            }
            Action::Zoom(step) => {
                let radius = (self.camera.radius() + step)
                    .clamp(*controls::RADIUS_RANGE.start(), *controls::RADIUS_RANGE.end());
                self.camera.set_radius(radius);
            }
            Action::ToggleProjection => {
                let projection = self.camera.projection().toggled();
                self.camera.set_projection(projection);
                log::info!("projection: {projection:?}");
            }
            Action::CycleMode => {
                self.mode = self.mode.next();
                log::info!("visualization mode: {}", self.mode);
            }
            Action::SelectPalette(name) => self.select_palette(name),
            Action::Quit => return AppControl::Exit,
        }
        AppControl::Continue
    }
}

impl Default for ViewerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for ViewerApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return AppControl::Continue;
        };
        if event.state != ElementState::Pressed {
            return AppControl::Continue;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return AppControl::Continue;
        };
        let Some(action) = controls::action_for(code) else {
            return AppControl::Continue;
        };
        if event.repeat && !action.accepts_repeat() {
            return AppControl::Continue;
        }

        self.apply(action)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.time.frame_index % 300 == 0 {
            log::trace!(
                "frame {} dt {:.3}ms elapsed {:.1}s",
                ctx.time.frame_index,
                ctx.time.dt * 1e3,
                ctx.time.elapsed
            );
        }

        if self.scene.is_none() {
            let device = ctx.gpu.device();
            self.scene = Some(Scene {
                renderer: CubeRenderer::new(device, ctx.gpu.surface_format()),
                buffers: BufferSet::new(device, self.palette, self.mode),
            });
            log::debug!("cube scene created");
        }

        // Commit pending palette/mode changes before the draw that depends on
        // them; set_mode is a no-op when nothing changed.
        let Some(scene) = self.scene.as_mut() else {
            return AppControl::Continue;
        };
        if self.palette_dirty {
            scene.buffers.set_palette(ctx.gpu.queue(), self.palette);
            self.palette_dirty = false;
        }
        scene.buffers.set_mode(ctx.gpu.device(), self.mode);

        let camera = self.camera;
        let mode = self.mode;
        let scene = &*scene;
        ctx.render(CLEAR_COLOR, |rctx, target| {
            scene
                .renderer
                .render(rctx, target, &scene.buffers, &camera, mode);
        })
    }
}
