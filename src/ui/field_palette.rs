use crate::drag::DragSession;
use crate::field::Section;
use crate::form_state::FormStateManager;
use crate::ui::main::{COMPLETE_COLOR, ROW_SPACING};
use eframe::egui;

/// The "Reporting Fields" column: every unassigned catalog entry, grouped by section.
pub fn draw(ui: &mut egui::Ui, manager: &FormStateManager, drag: &mut DragSession) {
    ui.heading("Reporting Fields");
    ui.weak(format!("{} left to add", manager.available_count()));
    ui.separator();

    for section in Section::ALL {
        ui.add_space(8.0);
        ui.strong(section.palette_heading());
        ui.add_space(4.0);

        let available = manager.available(section);
        if available.is_empty() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.colored_label(COMPLETE_COLOR, "All added");
            });
            continue;
        }

        for field in available {
            let is_dragged = drag.is_dragging_field(&field.name);
            let frame = egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                if is_dragged {
                    ui.multiply_opacity(0.4);
                }
                ui.horizontal(|ui| {
                    ui.add(egui::Label::new("⠿").selectable(false));
                    ui.add(egui::Label::new(field.label.as_str()).selectable(false));
                });
            });

            let response = ui
                .interact(
                    frame.response.rect,
                    ui.id().with(("palette_field", &field.name)),
                    egui::Sense::drag(),
                )
                .on_hover_cursor(egui::CursorIcon::Grab);

            if response.drag_started() {
                drag.begin(field.clone());
            }
            ui.add_space(ROW_SPACING);
        }
    }
}
