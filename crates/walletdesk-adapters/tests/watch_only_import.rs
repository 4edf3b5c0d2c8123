mod common;

use common::XPUB_1;
use walletdesk_adapters::{MultiWallet, Network};
use walletdesk_core::{
    CreateWatchOnlyModal, FrameContext, Modal, ModalAction, Toasts, WalletService,
};

fn submit(
    modal: &mut CreateWatchOnlyModal,
    wallet: &MultiWallet,
    toasts: &mut Toasts,
) -> ModalAction {
    modal.positive_button_mut().click();
    modal.handle(&mut FrameContext { wallet, toasts })
}

#[test]
fn unparseable_key_is_reported_on_key_field() {
    let wallet = MultiWallet::in_memory(Network::Mainnet);
    let mut toasts = Toasts::default();
    let mut modal = CreateWatchOnlyModal::new().enable_name(true);
    modal.on_resume();

    modal.wallet_name_mut().input("cold");
    modal.extended_pub_key_mut().input("not-an-xpub");
    let action = submit(&mut modal, &wallet, &mut toasts);

    assert_eq!(action, ModalAction::None);
    let error = modal.extended_pub_key().error().expect("key field error");
    assert!(error.contains("invalid extended key"));
    assert!(modal.wallet_name().error().is_none());
    assert!(toasts.is_empty());
    assert!(!modal.is_loading());
    assert!(wallet.wallets().is_empty());
}

#[test]
fn wrong_network_key_is_reported_on_key_field() {
    let wallet = MultiWallet::in_memory(Network::Testnet);
    let mut toasts = Toasts::default();
    let mut modal = CreateWatchOnlyModal::new();
    modal.on_resume();

    modal.extended_pub_key_mut().input(XPUB_1);
    let action = submit(&mut modal, &wallet, &mut toasts);

    assert_eq!(action, ModalAction::None);
    let error = modal.extended_pub_key().error().expect("key field error");
    assert!(error.contains("expected Testnet"));
    assert!(toasts.is_empty());
}

#[test]
fn valid_key_imports_and_dismisses() {
    let wallet = MultiWallet::in_memory(Network::Mainnet);
    let mut toasts = Toasts::default();
    let mut modal = CreateWatchOnlyModal::new();
    modal.on_resume();

    modal.extended_pub_key_mut().input(XPUB_1);
    let action = submit(&mut modal, &wallet, &mut toasts);

    assert_eq!(action, ModalAction::Dismiss);
    assert_eq!(wallet.wallets().len(), 1);
    assert_eq!(toasts.len(), 1);
}
