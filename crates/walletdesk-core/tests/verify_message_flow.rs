mod common;

use common::{frame, FakeWallet, GOOD_ADDRESS};
use walletdesk_core::validation::{MSG_EMPTY_ADDRESS, MSG_INVALID_ADDRESS};
use walletdesk_core::verify_message::{
    MSG_EMPTY_MESSAGE, MSG_EMPTY_SIGNATURE, MSG_INVALID_SIGNATURE, MSG_VALID_SIGNATURE,
};
use walletdesk_core::{
    InfoTemplate, Key, KeyPress, ModalKind, Page, PageAction, SubmissionResult, Toasts,
    VerifyMessagePage, WalletError,
};

fn filled_page() -> VerifyMessagePage {
    let mut page = VerifyMessagePage::new();
    page.on_navigated_to();
    page.address_mut().input(GOOD_ADDRESS);
    page.signature_mut().input("0xsig");
    page.message_mut().input("hello");
    page
}

#[test]
fn address_validation_messages() {
    let wallet = FakeWallet::default();
    let mut page = VerifyMessagePage::new();

    assert!(!page.validate_address(&wallet));
    assert_eq!(page.address().error(), Some(MSG_EMPTY_ADDRESS));

    page.address_mut().set_text("not-an-address");
    assert!(!page.validate_address(&wallet));
    assert_eq!(page.address().error(), Some(MSG_INVALID_ADDRESS));

    page.address_mut().set_text(GOOD_ADDRESS);
    assert!(page.validate_address(&wallet));
    assert!(page.address_is_valid());
    assert!(page.address().error().is_none());
}

#[test]
fn editing_focused_address_validates_it() {
    let wallet = FakeWallet::default();
    let mut toasts = Toasts::default();
    let mut page = VerifyMessagePage::new();
    page.on_navigated_to();

    page.address_mut().input("0x12");
    page.handle(&mut frame(&wallet, &mut toasts));
    assert_eq!(page.address().error(), Some(MSG_INVALID_ADDRESS));

    page.address_mut().input(GOOD_ADDRESS);
    page.handle(&mut frame(&wallet, &mut toasts));
    assert!(page.address().error().is_none());
    assert!(page.address_is_valid());
}

#[test]
fn invalid_signature_shows_failure_status() {
    let wallet = FakeWallet {
        verify_result: Ok(false),
        ..FakeWallet::default()
    };
    let mut toasts = Toasts::default();
    let mut page = filled_page();

    // first pass observes the edits and enables the button
    page.handle(&mut frame(&wallet, &mut toasts));
    page.verify_button_mut().click();
    page.handle(&mut frame(&wallet, &mut toasts));

    let status = page.status().expect("status line");
    assert!(!status.valid);
    assert_eq!(status.text, MSG_INVALID_SIGNATURE);
    assert!(wallet.called("verify_message"));
    assert_eq!(
        page.last_submission(),
        Some(&SubmissionResult::ServerError(MSG_INVALID_SIGNATURE.to_owned()))
    );
}

#[test]
fn valid_signature_shows_success_status() {
    let wallet = FakeWallet::default();
    let mut toasts = Toasts::default();
    let mut page = filled_page();

    page.handle(&mut frame(&wallet, &mut toasts));
    page.message_mut().press_submit();
    page.handle(&mut frame(&wallet, &mut toasts));

    let status = page.status().expect("status line");
    assert!(status.valid);
    assert_eq!(status.text, MSG_VALID_SIGNATURE);
    assert_eq!(page.last_submission(), Some(&SubmissionResult::Success));
}

#[test]
fn service_error_is_rendered_not_raised() {
    let wallet = FakeWallet {
        verify_result: Err(WalletError::InvalidSignature("expected 65 bytes".to_owned())),
        ..FakeWallet::default()
    };
    let mut toasts = Toasts::default();
    let mut page = filled_page();

    page.handle(&mut frame(&wallet, &mut toasts));
    page.verify_button_mut().click();
    page.handle(&mut frame(&wallet, &mut toasts));

    let status = page.status().expect("status line");
    assert!(!status.valid);
    assert_eq!(
        status.text,
        "Error verifying message: invalid signature: expected 65 bytes"
    );
}

#[test]
fn empty_signature_stops_before_verify() {
    let wallet = FakeWallet::default();
    let mut toasts = Toasts::default();
    let mut page = VerifyMessagePage::new();
    page.on_navigated_to();
    page.address_mut().input(GOOD_ADDRESS);
    page.message_mut().input("hello");

    page.handle(&mut frame(&wallet, &mut toasts));
    page.verify_button_mut().click();
    page.handle(&mut frame(&wallet, &mut toasts));

    assert_eq!(page.signature().error(), Some(MSG_EMPTY_SIGNATURE));
    assert!(page.message().error().is_none());
    assert!(page.status().is_none());
    assert!(!wallet.called("verify_message"));
}

#[test]
fn empty_message_is_checked_last() {
    let wallet = FakeWallet::default();
    let mut toasts = Toasts::default();
    let mut page = VerifyMessagePage::new();
    page.address_mut().input(GOOD_ADDRESS);
    page.signature_mut().input("0xsig");

    page.handle(&mut frame(&wallet, &mut toasts));
    page.verify_button_mut().click();
    page.handle(&mut frame(&wallet, &mut toasts));

    assert_eq!(page.message().error(), Some(MSG_EMPTY_MESSAGE));
    assert!(!wallet.called("verify_message"));
}

#[test]
fn verify_is_disabled_for_blank_form() {
    let wallet = FakeWallet::default();
    let mut toasts = Toasts::default();
    let mut page = VerifyMessagePage::new();

    page.handle(&mut frame(&wallet, &mut toasts));
    assert!(!page.is_verify_enabled());
    page.verify_button_mut().click();
    page.handle(&mut frame(&wallet, &mut toasts));
    assert!(page.address().error().is_none());
    assert!(wallet.calls.borrow().is_empty());
}

#[test]
fn edits_clear_previous_status() {
    let wallet = FakeWallet::default();
    let mut toasts = Toasts::default();
    let mut page = filled_page();

    page.handle(&mut frame(&wallet, &mut toasts));
    page.verify_button_mut().click();
    page.handle(&mut frame(&wallet, &mut toasts));
    assert!(page.status().is_some());

    page.message_mut().input("hello again");
    page.handle(&mut frame(&wallet, &mut toasts));
    assert!(page.status().is_none());
}

#[test]
fn clear_all_resets_the_form() {
    let wallet = FakeWallet::default();
    let mut toasts = Toasts::default();
    let mut page = filled_page();

    page.handle(&mut frame(&wallet, &mut toasts));
    page.verify_button_mut().click();
    page.handle(&mut frame(&wallet, &mut toasts));

    page.clear_button_mut().click();
    page.handle(&mut frame(&wallet, &mut toasts));
    assert_eq!(page.address().text(), "");
    assert_eq!(page.signature().text(), "");
    assert_eq!(page.message().text(), "");
    assert!(page.status().is_none());
    assert!(!page.address_is_valid());
}

#[test]
fn tab_cycles_address_signature_message() {
    let mut page = VerifyMessagePage::new();
    page.on_navigated_to();
    assert!(page.address().is_focused());

    page.handle_key_event(KeyPress::new(Key::Tab));
    assert!(page.signature().is_focused());
    page.handle_key_event(KeyPress::new(Key::Tab));
    assert!(page.message().is_focused());
    page.handle_key_event(KeyPress::new(Key::Tab));
    assert!(page.address().is_focused());
}

#[test]
fn header_buttons_produce_actions() {
    let wallet = FakeWallet::default();
    let mut toasts = Toasts::default();
    let mut page = VerifyMessagePage::new();

    page.info_button_mut().click();
    assert_eq!(
        page.handle(&mut frame(&wallet, &mut toasts)),
        PageAction::ShowModal(ModalKind::Info(InfoTemplate::VerifyMessage))
    );

    page.back_button_mut().click();
    assert_eq!(
        page.handle(&mut frame(&wallet, &mut toasts)),
        PageAction::Back
    );
}
