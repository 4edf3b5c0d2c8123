use eframe::egui;
use walletdesk_core::verify_message::DESCRIPTION;
use walletdesk_core::VerifyMessagePage;

use crate::ui;

pub fn render(ui: &mut egui::Ui, page: &mut VerifyMessagePage) {
    let view = page.view_mut();

    ui.horizontal(|ui| {
        ui::secondary(ui, view.back_btn);
        ui.add_space(10.0);
        ui::styled_heading(ui, "Verify message");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui::secondary(ui, view.info_btn);
        });
    });
    ui.label(DESCRIPTION);
    ui.add_space(10.0);

    ui::card(ui, |ui| {
        ui::form_field(ui, view.address, "0x...");
        ui.add_space(8.0);
        ui::form_field(ui, view.signature, "0x... (65 bytes, r || s || v)");
        ui.add_space(8.0);
        ui::form_field(ui, view.message, "The exact message that was signed");
    });

    ui.add_space(10.0);
    if let Some(status) = view.status {
        if status.valid {
            ui::success_message(ui, &status.text);
        } else {
            ui::error_message(ui, &status.text);
        }
        ui.add_space(10.0);
    }

    ui.horizontal(|ui| {
        ui::secondary(ui, view.clear_btn);
        ui.add_space(8.0);
        ui::primary(ui, view.verify_btn);
    });
}
