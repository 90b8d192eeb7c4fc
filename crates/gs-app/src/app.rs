use std::sync::Arc;

use egui_wgpu::wgpu;
use egui_winit::State as EguiState;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::state::AppState;
use crate::ui;

pub(crate) struct App {
    window: Arc<Window>,
    state: AppState,
    egui_state: EguiState,
    egui_renderer: egui_wgpu::Renderer,
}

impl App {
    pub(crate) async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let state = AppState::new(window.clone()).await?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &state.gfx.device,
            state.gfx.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        Ok(Self {
            window,
            state,
            egui_state,
            egui_renderer,
        })
    }

    pub(crate) fn input(&mut self, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(&self.window, event);

        if response.consumed {
            return true;
        }

        self.state.input(event)
    }

    pub(crate) fn update(&mut self) {
        self.state.update();
    }

    pub(crate) fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.state.resize(new_size);
    }

    pub(crate) fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.state.gfx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.state
                .gfx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });

        // --- Gradient pass --------------------------------------------------

        let size = self.state.gfx.size;
        self.state
            .renderer
            .render(&mut encoder, &view, (size.width, size.height));

        // --- UI pass --------------------------------------------------------

        let raw_input = self.egui_state.take_egui_input(&self.window);

        let state = &mut self.state;
        let full_output = self
            .egui_state
            .egui_ctx()
            .run(raw_input, |ctx| ui::draw_ui(ctx, state));

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = self
            .egui_state
            .egui_ctx()
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(
                &self.state.gfx.device,
                &self.state.gfx.queue,
                *id,
                image_delta,
            );
        }

        self.egui_renderer.update_buffers(
            &self.state.gfx.device,
            &self.state.gfx.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer.render(
                &mut render_pass.forget_lifetime(),
                &paint_jobs,
                &screen_descriptor,
            );
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.state.gfx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
