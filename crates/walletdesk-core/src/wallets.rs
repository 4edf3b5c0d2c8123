//! Home page listing the loaded wallets

use crate::controls::Button;
use crate::host::{FrameContext, ModalKind, Page, PageAction, PageKind};
use crate::info::InfoTemplate;
use crate::ports::WalletInfo;

pub const WALLETS_PAGE_ID: &str = "Wallets";

pub struct WalletsPage {
    wallets: Vec<WalletInfo>,
    import_btn: Button,
    verify_btn: Button,
    info_btn: Button,
    needs_refresh: bool,
}

impl Default for WalletsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletsPage {
    pub fn new() -> Self {
        Self {
            wallets: Vec::new(),
            import_btn: Button::new("Import watch-only wallet"),
            verify_btn: Button::new("Verify message"),
            info_btn: Button::new("Info"),
            needs_refresh: true,
        }
    }

    pub fn wallets(&self) -> &[WalletInfo] {
        &self.wallets
    }

    pub fn import_button_mut(&mut self) -> &mut Button {
        &mut self.import_btn
    }

    pub fn verify_button_mut(&mut self) -> &mut Button {
        &mut self.verify_btn
    }

    pub fn info_button_mut(&mut self) -> &mut Button {
        &mut self.info_btn
    }

    /// Reloads the wallet list on the next `handle` pass.
    pub fn refresh(&mut self) {
        self.needs_refresh = true;
    }
}

impl Page for WalletsPage {
    fn id(&self) -> &'static str {
        WALLETS_PAGE_ID
    }

    fn on_navigated_to(&mut self) {
        self.refresh();
    }

    fn handle(&mut self, cx: &mut FrameContext<'_>) -> PageAction {
        if self.needs_refresh {
            self.wallets = cx.wallet.wallets();
            self.needs_refresh = false;
        }

        if self.import_btn.clicked() {
            return PageAction::ShowModal(ModalKind::CreateWatchOnly { enable_name: true });
        }
        if self.verify_btn.clicked() {
            return PageAction::Push(PageKind::VerifyMessage);
        }
        if self.info_btn.clicked() {
            return PageAction::ShowModal(ModalKind::Info(InfoTemplate::WatchOnlyWallet));
        }
        PageAction::None
    }
}
