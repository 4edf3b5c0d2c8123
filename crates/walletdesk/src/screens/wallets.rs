use eframe::egui;
use walletdesk_core::WalletsPage;

use crate::ui;

pub fn render(ui: &mut egui::Ui, page: &mut WalletsPage) {
    ui.horizontal(|ui| {
        ui::styled_heading(ui, "Wallets");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui::secondary(ui, page.info_button_mut());
        });
    });
    ui.label("Watch-only wallets track an extended public key without holding any private keys.");
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui::primary(ui, page.import_button_mut());
        ui.add_space(8.0);
        ui::secondary(ui, page.verify_button_mut());
    });

    ui::section_header(ui, "Loaded wallets");
    if page.wallets().is_empty() {
        ui.label(egui::RichText::new("No wallets yet. Import a watch-only wallet to get started.").weak());
        return;
    }

    for wallet in page.wallets() {
        ui::card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&wallet.name).strong().size(15.0));
                ui.label(egui::RichText::new(format!("#{}", wallet.id)).weak());
                if wallet.watch_only {
                    ui.label(egui::RichText::new("watch-only").small().color(ui::ACCENT));
                }
            });
            if let Some(key) = &wallet.extended_key {
                ui::copyable_text(ui, key);
            }
        });
        ui.add_space(6.0);
    }
}
