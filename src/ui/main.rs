use crate::config::{save_config, Config};
use crate::drag::DragSession;
use crate::field::Section;
use crate::form_state::{FormAction, FormStateManager};
use crate::ui::drag_drop;
use crate::ui::drop_zone::DropZone;
use crate::ui::field_palette;
use eframe::egui;
use egui::{Color32, RichText};
use std::collections::HashMap;

// UI Constants
pub const ROW_SPACING: f32 = 4.0;
pub const ACCEPT_COLOR: Color32 = Color32::from_rgb(60, 180, 90);
pub const REJECT_COLOR: Color32 = Color32::from_rgb(220, 70, 70);
pub const EMPTY_TEXT_COLOR: Color32 = Color32::from_rgb(140, 140, 140);
pub const COMPLETE_COLOR: Color32 = Color32::from_rgb(90, 160, 110);
pub const GHOST_FILL: Color32 = Color32::from_rgb(50, 60, 80);

pub struct FormApp {
    pub manager: FormStateManager,
    drag: DragSession,
    inputs: HashMap<String, String>,
    config: Config,
}

impl FormApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self {
            manager: FormStateManager::new(),
            drag: DragSession::new(),
            inputs: HashMap::new(),
            config,
        }
    }

    pub fn dispatch(&mut self, action: FormAction) {
        let removed = match &action {
            FormAction::RemoveFromSection(_, name) => Some(name.clone()),
            _ => None,
        };
        self.manager.dispatch(action);
        if let Some(name) = removed {
            if !self.manager.state().is_assigned(&name) {
                self.inputs.remove(&name);
            }
        }
    }

    fn draw_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Form Customizer").size(24.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icon = if self.config.dark_mode { "☀" } else { "🌙" };
                if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                    self.config.dark_mode = !self.config.dark_mode;
                    save_config(&self.config);
                }
            });
        });
        ui.separator();
    }

    fn draw_zone(&mut self, ui: &mut egui::Ui, section: Section) -> Option<String> {
        let highlight = self.drag.highlight(section);
        DropZone {
            section,
            fields: self.manager.state().fields(section),
            highlight,
            inputs: &mut self.inputs,
        }
        .draw(ui)
    }
}

/// Copy the current inner window size into `config`.
pub fn sync_window_size(ctx: &egui::Context, config: &mut Config) {
    if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
        config.set_window_size(rect.width(), rect.height());
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keep the live size so a theme toggle saves what the user sees
        sync_window_size(ctx, &mut self.config);

        ctx.set_visuals(if self.config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        // Zone rects come from the previous frame's layout
        if let Some(drop) = drag_drop::track_pointer(ctx, &mut self.drag) {
            self.dispatch(FormAction::DropField(drop.zone, drop.payload));
        }

        let mut removals: Vec<(Section, String)> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_header(ui);

            ui.columns(3, |columns| {
                for (column, section) in columns.iter_mut().zip(Section::ALL) {
                    if let Some(name) = self.draw_zone(column, section) {
                        removals.push((section, name));
                    }
                }
                egui::ScrollArea::vertical()
                    .id_salt("reporting_fields")
                    .show(&mut columns[2], |ui| {
                        field_palette::draw(ui, &self.manager, &mut self.drag);
                    });
            });
        });

        // Apply removals after drawing to avoid mutating lists mid-frame
        for (section, name) in removals {
            self.dispatch(FormAction::RemoveFromSection(section, name));
        }

        drag_drop::draw_drag_ghost(ctx, &self.drag);
    }
}
