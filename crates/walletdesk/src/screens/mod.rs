//! egui rendering for the pages and modals driven by the core shell

mod info;
mod verify_message;
mod wallets;
mod watch_only;

use eframe::egui;
use walletdesk_core::{AppModal, AppPage, Modal};

pub fn render_page(ui: &mut egui::Ui, page: &mut AppPage) {
    match page {
        AppPage::Wallets(page) => wallets::render(ui, page),
        AppPage::VerifyMessage(page) => verify_message::render(ui, page),
    }
}

pub fn render_modal(ctx: &egui::Context, modal: &mut AppModal, max_width: f32) {
    let id = modal.modal_id().to_owned();
    match modal {
        AppModal::CreateWatchOnly(modal) => {
            modal.modal_mut().set_max_width(max_width);
            watch_only::render(ctx, &id, modal);
        }
        AppModal::Info(modal) => {
            modal.modal_mut().set_max_width(max_width);
            info::render(ctx, &id, modal);
        }
    }
}
