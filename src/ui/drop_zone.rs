use crate::drag::ZoneHighlight;
use crate::field::{Field, Section};
use crate::ui::drag_drop;
use crate::ui::main::{EMPTY_TEXT_COLOR, ROW_SPACING};
use eframe::egui;
use std::collections::HashMap;

/// A container bound to one section that lists its assigned fields.
pub struct DropZone<'a> {
    pub section: Section,
    pub fields: &'a [Field],
    pub highlight: ZoneHighlight,
    /// Scratch text typed into each row, keyed by field name. Not form state.
    pub inputs: &'a mut HashMap<String, String>,
}

impl<'a> DropZone<'a> {
    /// Draw the zone. Returns the name of a field whose remove button was clicked.
    pub fn draw(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let mut to_remove = None;

        let response = egui::Frame::group(ui.style())
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(240.0);

                ui.heading(self.section.title());
                ui.separator();

                if self.fields.is_empty() {
                    ui.colored_label(EMPTY_TEXT_COLOR, "Drag a field here");
                }

                for field in self.fields {
                    ui.horizontal(|ui| {
                        ui.label(field.label.as_str());
                        let buffer = self.inputs.entry(field.name.clone()).or_default();
                        ui.add(
                            egui::TextEdit::singleline(buffer)
                                .hint_text(field.label.as_str())
                                .desired_width(160.0),
                        );

                        if !field.default
                            && ui
                                .small_button("✕")
                                .on_hover_text(format!("Remove {}", field.label))
                                .clicked()
                        {
                            to_remove = Some(field.name.clone());
                        }
                    });
                    ui.add_space(ROW_SPACING);
                }
            })
            .response;

        drag_drop::store_zone_rect(ui.ctx(), self.section, response.rect);
        drag_drop::paint_zone_highlight(ui, response.rect, self.highlight);

        to_remove
    }
}
