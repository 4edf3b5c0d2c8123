use eframe::egui;
use walletdesk_core::InfoModal;

use crate::{modal, ui};

pub fn render(ctx: &egui::Context, id: &str, info: &mut InfoModal) {
    let template = info.template();
    let (state, button) = info.parts_mut();
    modal::show(ctx, id, state, Some(template.title()), |ui| {
        for paragraph in template.body() {
            ui.label(*paragraph);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui::primary(ui, button);
        });
    });
}
