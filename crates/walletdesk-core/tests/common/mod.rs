#![allow(dead_code)]

use std::cell::RefCell;

use walletdesk_core::{FrameContext, Toasts, WalletError, WalletId, WalletInfo, WalletService};

pub const GOOD_ADDRESS: &str = "0x000000000000000000000000000000000000BEEF";

/// Scripted wallet service that records every call.
pub struct FakeWallet {
    pub verify_result: Result<bool, WalletError>,
    pub xpub_lookup: Result<Option<WalletId>, WalletError>,
    pub create_result: Result<WalletId, WalletError>,
    pub calls: RefCell<Vec<String>>,
    pub created: RefCell<Vec<WalletInfo>>,
}

impl Default for FakeWallet {
    fn default() -> Self {
        Self {
            verify_result: Ok(true),
            xpub_lookup: Ok(None),
            create_result: Ok(WalletId(1)),
            calls: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
        }
    }
}

impl FakeWallet {
    pub fn called(&self, name: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == name)
    }

    fn record(&self, name: &str) {
        self.calls.borrow_mut().push(name.to_owned());
    }
}

impl WalletService for FakeWallet {
    fn is_address_valid(&self, address: &str) -> bool {
        self.record("is_address_valid");
        address == GOOD_ADDRESS
    }

    fn verify_message(&self, _: &str, _: &str, _: &str) -> Result<bool, WalletError> {
        self.record("verify_message");
        self.verify_result.clone()
    }

    fn wallet_with_xpub(&self, _: &str) -> Result<Option<WalletId>, WalletError> {
        self.record("wallet_with_xpub");
        self.xpub_lookup.clone()
    }

    fn create_watch_only_wallet(&self, name: &str, xpub: &str) -> Result<WalletId, WalletError> {
        self.record("create_watch_only_wallet");
        let id = self.create_result.clone()?;
        self.created.borrow_mut().push(WalletInfo {
            id,
            name: name.to_owned(),
            watch_only: true,
            extended_key: Some(xpub.to_owned()),
        });
        Ok(id)
    }

    fn wallets(&self) -> Vec<WalletInfo> {
        self.created.borrow().clone()
    }
}

pub fn frame<'a>(wallet: &'a FakeWallet, toasts: &'a mut Toasts) -> FrameContext<'a> {
    FrameContext { wallet, toasts }
}
