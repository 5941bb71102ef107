use crate::drag::{DragSession, DropRequest, ZoneHighlight};
use crate::field::Section;
use crate::ui::main::{ACCEPT_COLOR, GHOST_FILL, REJECT_COLOR};
use eframe::egui;

fn zone_rect_id(section: Section) -> egui::Id {
    egui::Id::new(("drop_zone_rect", section))
}

/// Publish where a zone was laid out this frame so the next frame can hit-test it.
pub fn store_zone_rect(ctx: &egui::Context, section: Section, rect: egui::Rect) {
    ctx.memory_mut(|mem| mem.data.insert_temp(zone_rect_id(section), rect));
}

pub fn zone_rect(ctx: &egui::Context, section: Section) -> Option<egui::Rect> {
    ctx.memory(|mem| mem.data.get_temp::<egui::Rect>(zone_rect_id(section)))
}

/// Which zone, if any, contains the pointer.
pub fn zone_under_pointer(ctx: &egui::Context, pointer: Option<egui::Pos2>) -> Option<Section> {
    let pointer = pointer?;
    Section::ALL.into_iter().find(|&section| {
        zone_rect(ctx, section).map_or(false, |rect| rect.contains(pointer))
    })
}

/// Feed this frame's pointer input into the session.
///
/// Returns a drop when the button went up over a zone that accepts the payload.
pub fn track_pointer(ctx: &egui::Context, drag: &mut DragSession) -> Option<DropRequest> {
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        drag.cancel();
        return None;
    }
    if !drag.is_active() {
        return None;
    }

    let pointer = ctx.input(|i| i.pointer.latest_pos());
    drag.hover(zone_under_pointer(ctx, pointer));

    if ctx.input(|i| i.pointer.any_released()) {
        return drag.release();
    }
    None
}

/// Stroke and translucent fill painted over a zone while a drag hovers it.
pub fn paint_zone_highlight(ui: &egui::Ui, rect: egui::Rect, highlight: ZoneHighlight) {
    let color = match highlight {
        ZoneHighlight::Neutral => return,
        ZoneHighlight::Accepting => ACCEPT_COLOR,
        ZoneHighlight::Rejecting => REJECT_COLOR,
    };
    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, color.gamma_multiply(0.12));
    painter.rect_stroke(rect, 6.0, egui::Stroke::new(2.0, color), egui::StrokeKind::Inside);
}

/// Draw the dragged entry under the pointer and pick a matching cursor.
pub fn draw_drag_ghost(ctx: &egui::Context, drag: &DragSession) {
    let Some(payload) = drag.payload() else {
        return;
    };
    let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) else {
        return;
    };

    let rejecting = Section::ALL
        .into_iter()
        .any(|s| drag.highlight(s) == ZoneHighlight::Rejecting);
    ctx.set_cursor_icon(if rejecting {
        egui::CursorIcon::NotAllowed
    } else {
        egui::CursorIcon::Grabbing
    });

    egui::Area::new(egui::Id::new("drag_ghost"))
        .fixed_pos(pos + egui::vec2(12.0, 8.0))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).fill(GHOST_FILL).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("⠿");
                    ui.label(payload.label.as_str());
                });
            });
        });
}
