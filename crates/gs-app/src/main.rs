mod app;
mod state;
mod ui;

use std::sync::Arc;

use egui_wgpu::wgpu;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use crate::state::SizePreset;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (width, height) = SizePreset::default().dimensions();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(event_loop.create_window(
        Window::default_attributes()
            .with_title("Gradient Studio")
            .with_inner_size(winit::dpi::LogicalSize::new(width, height)),
    )?);

    let mut app = pollster::block_on(app::App::new(window.clone()))?;

    event_loop.run(move |event, control_flow| {
        match event {
            Event::WindowEvent { ref event, .. } => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested
                        | WindowEvent::KeyboardInput {
                            event: KeyEvent {
                                state: ElementState::Pressed,
                                physical_key: PhysicalKey::Code(KeyCode::Escape),
                                ..
                            },
                            ..
                        } => control_flow.exit(),
                        WindowEvent::Resized(physical_size) => {
                            app.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => {
                            app.update();
                            match app.render() {
                                Ok(()) => {}
                                Err(wgpu::SurfaceError::Lost) => app.resize(window.inner_size()),
                                Err(wgpu::SurfaceError::OutOfMemory) => control_flow.exit(),
                                Err(e) => log::warn!("render error: {e:?}"),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
