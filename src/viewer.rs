//! The native viewer: window, frame loop and input dispatch.
//!
//! ```ignore
//! use neuroglow::prelude::*;
//!
//! Viewer::new()
//!     .with_title("Neural Activation")
//!     .with_intensity(0.8)
//!     .with_camera_preset(CameraPreset::Temporal)
//!     .run()?;
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::anatomy::Anatomy;
use crate::animator::ParticleAnimator;
use crate::camera::{Camera, CameraPreset};
use crate::clock::FrameClock;
use crate::error::ViewerError;
use crate::gpu::{sprites, EguiIntegration, GpuState, SpriteInstance};
use crate::input::{key_action, KeyAction, OrbitControls};
use crate::session::{Session, DEFAULT_INTENSITY};
use crate::shell::{ShellAction, ShellFrame, ShellState};
use crate::visuals::VisualConfig;

/// Builder for the viewer window.
pub struct Viewer {
    title: String,
    size: (u32, u32),
    intensity: f32,
    seed: u64,
    camera: CameraPreset,
    visuals: VisualConfig,
    anatomy: Anatomy,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            title: "Neuroglow - Neural Activation Visualizer".to_string(),
            size: (1280, 720),
            intensity: DEFAULT_INTENSITY,
            seed: 0x6e67,
            camera: CameraPreset::Overview,
            visuals: VisualConfig::new(),
            anatomy: Anatomy::standard(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Initial inner size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Initial activation intensity, clamped into `[0, 1]`.
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Seed for particle placement, jitter and typing delays.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_camera_preset(mut self, preset: CameraPreset) -> Self {
        self.camera = preset;
        self
    }

    pub fn with_labels(mut self, on: bool) -> Self {
        self.visuals.labels(on);
        self
    }

    pub fn with_pathways(mut self, on: bool) -> Self {
        self.visuals.pathways(on);
        self
    }

    /// Replace the built-in brain model.
    pub fn with_anatomy(mut self, anatomy: Anatomy) -> Self {
        self.anatomy = anatomy;
        self
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    title: String,
    size: (u32, u32),
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    egui: Option<EguiIntegration>,
    session: Session,
    animator: ParticleAnimator,
    camera: Camera,
    controls: OrbitControls,
    clock: FrameClock,
    shell: ShellState,
    sprites: Vec<SpriteInstance>,
    /// Setup failure, reported from `Viewer::run` once the loop exits.
    error: Option<ViewerError>,
}

impl App {
    fn new(viewer: Viewer) -> Self {
        let animator = ParticleAnimator::new(&viewer.anatomy, viewer.seed);
        let mut session = Session::new(viewer.anatomy, viewer.seed);
        session.set_intensity(viewer.intensity);
        let sprites = Vec::with_capacity(animator.sprite_capacity());

        Self {
            title: viewer.title,
            size: viewer.size,
            window: None,
            gpu: None,
            egui: None,
            session,
            animator,
            camera: Camera::from_preset(viewer.camera),
            controls: OrbitControls::new(),
            clock: FrameClock::new(),
            shell: ShellState::new(viewer.visuals),
            sprites,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(self.size.0, self.size.1));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = pollster::block_on(GpuState::new(window.clone(), self.animator.sprite_capacity()))?;
        let egui = EguiIntegration::new(gpu.device(), gpu.format(), &window);

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
        self.egui = Some(egui);
        Ok(())
    }

    fn apply(&mut self, action: ShellAction) {
        match action {
            ShellAction::Submit(text) => {
                self.session.submit(&text);
            }
            ShellAction::Preset(preset) => self.session.select_preset(preset),
            ShellAction::Intensity(value) => self.session.set_intensity(value),
            ShellAction::Camera(preset) => self.camera.apply_preset(preset),
            ShellAction::TogglePause => {
                self.clock.toggle_pause();
            }
        }
    }

    fn on_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::TogglePause => {
                self.clock.toggle_pause();
            }
            KeyAction::ToggleLabels => {
                let on = !self.shell.visuals.show_labels;
                self.shell.visuals.labels(on);
            }
            KeyAction::TogglePathways => {
                let on = !self.shell.visuals.show_pathways;
                self.shell.visuals.pathways(on);
            }
            KeyAction::Camera(preset) => self.camera.apply_preset(preset),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (time, delta) = self.clock.tick();
        self.session.advance(delta);
        self.animator
            .tick(self.session.activation(), self.session.intensity(), time, delta);

        let (Some(window), Some(egui)) = (self.window.clone(), self.egui.as_mut()) else {
            return;
        };

        egui.begin_frame(&window);
        let actions = self.shell.show(
            &egui.ctx,
            &ShellFrame {
                session: &self.session,
                animator: &self.animator,
                camera: &self.camera,
                fps: self.clock.fps(),
                paused: self.clock.is_paused(),
            },
        );
        let ui = egui.end_frame(&window);

        for action in actions {
            self.apply(action);
        }

        sprites::collect(&self.animator, &self.shell.visuals, &mut self.sprites);

        let (Some(gpu), Some(egui)) = (self.gpu.as_mut(), self.egui.as_mut()) else {
            return;
        };
        gpu.upload(&self.sprites);
        match gpu.render(&self.camera, time, self.shell.visuals.background, egui, &ui) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("frame skipped: {e}"),
        }

        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("{e}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let consumed = match (&self.window, self.egui.as_mut()) {
            (Some(window), Some(egui)) => egui.on_window_event(window, &event),
            _ => false,
        };
        let wants_keyboard = self.egui.as_ref().is_some_and(|e| e.wants_keyboard());
        let wants_pointer = self.egui.as_ref().is_some_and(|e| e.wants_pointer());

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } if !wants_keyboard => {
                if let Some(action) = key_action(code) {
                    self.on_key(action);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                // Drags that start on a panel belong to the panel.
                if !pressed || !(consumed || wants_pointer) {
                    self.controls.on_button(pressed);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.controls.on_cursor(position.x, position.y, &mut self.camera);
            }
            WindowEvent::MouseWheel { delta, .. } if !(consumed || wants_pointer) => {
                self.controls.on_scroll(delta, &mut self.camera);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
