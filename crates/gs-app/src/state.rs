use std::sync::Arc;

use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use gs_core::camera::Camera;
use gs_render::gfx::GfxState;
use gs_render::gradient::GradientRenderer;

/// Output resolutions matching the common video sizes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SizePreset {
    P360,
    #[default]
    P480,
    P720,
}

impl SizePreset {
    pub const ALL: [SizePreset; 3] = [Self::P360, Self::P480, Self::P720];

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::P360 => (640, 360),
            Self::P480 => (854, 480),
            Self::P720 => (1280, 720),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::P360 => "360p",
            Self::P480 => "480p",
            Self::P720 => "720p",
        }
    }
}

pub struct AppState {
    pub window: Arc<Window>,

    pub gfx: GfxState,
    pub renderer: GradientRenderer,
    pub camera: Camera,

    pub size_preset: SizePreset,
    pub pending_preset: Option<SizePreset>,

    // Last observed cursor position, the anchor for a starting drag.
    cursor_pos: (f32, f32),
}

impl AppState {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let gfx = GfxState::new(window.clone()).await?;
        let renderer = GradientRenderer::new(&gfx.device, gfx.queue.clone(), gfx.config.format);

        Ok(Self {
            window,
            gfx,
            renderer,
            camera: Camera::new(),
            size_preset: SizePreset::default(),
            pending_preset: None,
            cursor_pos: (0.0, 0.0),
        })
    }

    // --- Window resizing ----------------------------------------------------

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.gfx.resize(new_size);
    }

    // --- Mouse + keyboard input --------------------------------------------

    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                // Key repeats pass through: holding a key keeps stepping.
                let moved = match code {
                    KeyCode::KeyW => Some(self.camera.move_forward()),
                    KeyCode::KeyS => Some(self.camera.move_backward()),
                    KeyCode::KeyD => Some(self.camera.move_right()),
                    KeyCode::KeyA => Some(self.camera.move_left()),
                    _ => None,
                };

                if let Some([x, y]) = moved {
                    log::debug!("camera position: [{x}, {y}]");
                    true
                } else {
                    false
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                match state {
                    ElementState::Pressed => {
                        let (x, y) = self.cursor_pos;
                        self.camera.begin_drag(x, y);
                    }
                    ElementState::Released => self.camera.end_drag(),
                }
                true
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pos = (position.x as f32, position.y as f32);
                self.cursor_pos = pos;

                if let Some([dx, dy]) = self.camera.drag_to(pos.0, pos.1) {
                    log::debug!("drag delta: [{dx}, {dy}]");
                }
                true
            }

            _ => false,
        }
    }

    // --- Event processing from UI ------------------------------------------

    pub fn update(&mut self) {
        if let Some(preset) = self.pending_preset.take() {
            let (width, height) = preset.dimensions();
            // The Resized event that follows reconfigures the surface.
            let _ = self
                .window
                .request_inner_size(winit::dpi::LogicalSize::new(width, height));
        }
    }
}
