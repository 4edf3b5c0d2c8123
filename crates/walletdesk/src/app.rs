//! Main application state and update loop

use eframe::egui;
use walletdesk_adapters::{AppConfig, MultiWallet, Network};
use walletdesk_core::{FrameContext, Key, KeyPress, Shell, ToastKind, Toasts};

use crate::screens;
use crate::ui;

/// The main application state
pub struct App {
    shell: Shell,
    wallet: MultiWallet,
    toasts: Toasts,
    config: AppConfig,
}

impl App {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        wallet: MultiWallet,
        startup_error: Option<String>,
    ) -> Self {
        let mut toasts = Toasts::new(config.toast_duration());
        if let Some(err) = startup_error {
            toasts.notify_error(err);
        }
        Self {
            shell: Shell::new(),
            wallet,
            toasts,
            config,
        }
    }

    /// Tab and Shift+Tab move focus between form fields of the active
    /// screen instead of egui's default widget order. Escape cancels the
    /// top modal.
    fn route_keys(&mut self, ctx: &egui::Context) {
        let forward = ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Tab));
        let backward = ctx.input_mut(|i| i.consume_key(egui::Modifiers::SHIFT, egui::Key::Tab));
        let escape = ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape));
        if forward {
            self.shell.handle_key_event(KeyPress::new(Key::Tab));
        }
        if backward {
            self.shell.handle_key_event(KeyPress::shifted(Key::Tab));
        }
        if escape {
            self.shell.handle_key_event(KeyPress::new(Key::Escape));
        }
    }

    fn render_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("walletdesk").size(22.0).color(ui::ACCENT));
                ui.add_space(20.0);
                ui.separator();
                let network = match self.wallet.network() {
                    Network::Mainnet => "mainnet",
                    Network::Testnet => "testnet",
                };
                ui.label(egui::RichText::new(network).monospace());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "v{} ({})",
                            env!("CARGO_PKG_VERSION"),
                            env!("GIT_HASH")
                        ))
                        .weak()
                        .small(),
                    )
                    .on_hover_text(concat!("Built ", env!("BUILD_TIME")));
                });
            });
            ui.add_space(4.0);
        });
    }

    fn render_toasts(&self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                for toast in self.toasts.iter() {
                    let color = match toast.kind {
                        ToastKind::Success => ui::SUCCESS_GREEN,
                        ToastKind::Error => ui::ERROR_RED,
                    };
                    egui::Frame::popup(ui.style())
                        .stroke(egui::Stroke::new(1.0, color))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.label(egui::RichText::new(&toast.text).color(color));
                        });
                    ui.add_space(6.0);
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.config.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.route_keys(ctx);
        self.render_header(ctx);

        let modal_shown = !self.shell.overlays.is_empty();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_shown, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(10.0);
                    screens::render_page(ui, self.shell.navigator.current_mut());
                    ui.add_space(20.0);
                });
            });
        });

        let max_width = self.config.modal_max_width;
        for modal in self.shell.overlays.iter_mut() {
            screens::render_modal(ctx, modal, max_width);
        }

        self.shell.handle(&mut FrameContext {
            wallet: &self.wallet,
            toasts: &mut self.toasts,
        });

        self.toasts.prune(web_time::Instant::now());
        self.render_toasts(ctx);
        if !self.toasts.is_empty() {
            // keep repainting so expired toasts disappear
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
