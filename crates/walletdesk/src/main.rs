//! walletdesk: watch-only wallets and signed message verification

use eframe::egui;
use eyre::WrapErr;
use walletdesk_adapters::{AppConfig, MultiWallet};

mod app;
mod modal;
mod screens;
mod ui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git = env!("GIT_HASH"),
        "Starting walletdesk"
    );

    let config = load_config();
    let (wallet, startup_error) = open_wallet(&config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("walletdesk")
            .with_inner_size([820.0, 640.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "walletdesk",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config, wallet, startup_error)))),
    )
}

fn load_config() -> AppConfig {
    match AppConfig::load().wrap_err("failed to load walletdesk config") {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err:#}; using defaults");
            AppConfig::default()
        }
    }
}

/// Falls back to an in-memory store so the app still starts; the error is
/// surfaced as a toast once the window is up.
fn open_wallet(config: &AppConfig) -> (MultiWallet, Option<String>) {
    match MultiWallet::open(config).wrap_err("failed to open wallet store") {
        Ok(wallet) => (wallet, None),
        Err(err) => {
            tracing::error!("{err:#}");
            (
                MultiWallet::in_memory(config.network),
                Some(format!("{err:#}")),
            )
        }
    }
}
