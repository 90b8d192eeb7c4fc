use egui::{Color32, Context, RichText};

use gs_core::camera::Camera;

use crate::state::{AppState, SizePreset};

pub fn draw_ui(ctx: &Context, state: &mut AppState) {
    // Top panel
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("🎨 Gradient Studio");
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "camera: ({:.2}, {:.2})",
                    state.camera.position[0], state.camera.position[1]
                ))
                .color(Color32::LIGHT_BLUE),
            );
        });
    });

    // Side panel
    egui::SidePanel::left("side_panel").default_width(220.0).show(ctx, |ui| {
        ui.heading("Viewport");
        ui.separator();

        egui::ComboBox::from_label("Resolution")
            .selected_text(state.size_preset.label())
            .show_ui(ui, |ui| {
                for preset in SizePreset::ALL {
                    if ui
                        .selectable_value(&mut state.size_preset, preset, preset.label())
                        .clicked()
                    {
                        state.pending_preset = Some(preset);
                    }
                }
            });

        ui.separator();

        ui.heading("🎮 Camera Controls");
        ui.label("• W/S: Move forward / back");
        ui.label("• A/D: Strafe left / right");
        ui.label("• Left drag: Inspect pointer deltas");

        if ui.button("🔄 Reset Camera").clicked() {
            state.camera = Camera::new();
        }
    });
}
