use eframe::egui;
use walletdesk_core::watch_only::TITLE;
use walletdesk_core::CreateWatchOnlyModal;

use crate::{modal, ui};

pub fn render(ctx: &egui::Context, id: &str, dialog: &mut CreateWatchOnlyModal) {
    let view = dialog.view_mut();
    let wallet_name = view.wallet_name;
    let extended_pub_key = view.extended_pub_key;
    let btn_positive = view.btn_positive;
    let btn_negative = view.btn_negative;
    let (is_loading, is_enabled) = (view.is_loading, view.is_enabled);

    modal::show(ctx, id, view.modal, Some(TITLE), |ui| {
        if let Some(name) = wallet_name {
            ui::form_field(ui, name, "e.g. Cold storage");
        }
        ui::form_field(ui, extended_pub_key, "xpub...");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if is_loading {
                ui::loading_spinner(ui, "Importing...");
                return;
            }
            let label = btn_positive.label().to_owned();
            if ui::primary_button_enabled(ui, &label, is_enabled).clicked() {
                btn_positive.click();
            }
            ui::secondary(ui, btn_negative);
        });
    });
}
