//! "Verify message" page

use crate::controls::{handle_field_events, switch_focus, Button, FieldKind, FormField, KeyPress};
use crate::flow::{advance, FlowAction, FlowState, SubmissionResult};
use crate::host::{FrameContext, ModalKind, Page, PageAction};
use crate::info::InfoTemplate;
use crate::ports::WalletService;
use crate::validation::{string_not_empty, validate_address};

pub const VERIFY_MESSAGE_PAGE_ID: &str = "VerifyMessage";
pub const DESCRIPTION: &str = "Enter the address, signature, and message to verify:";

pub const MSG_EMPTY_SIGNATURE: &str = "Field cannot be empty. Please provide valid signature.";
pub const MSG_EMPTY_MESSAGE: &str = "Field cannot be empty. Please provide valid signed message.";
pub const MSG_INVALID_SIGNATURE: &str = "Invalid signature or message";
pub const MSG_VALID_SIGNATURE: &str = "Valid signature";

/// Result line shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyStatus {
    pub valid: bool,
    pub text: String,
}

impl VerifyStatus {
    fn failure(text: impl Into<String>) -> Self {
        Self {
            valid: false,
            text: text.into(),
        }
    }

    fn success() -> Self {
        Self {
            valid: true,
            text: MSG_VALID_SIGNATURE.to_owned(),
        }
    }
}

pub struct VerifyMessagePage {
    address: FormField,
    signature: FormField,
    message: FormField,

    clear_btn: Button,
    verify_btn: Button,
    back_btn: Button,
    info_btn: Button,

    status: Option<VerifyStatus>,
    address_is_valid: bool,

    flow: FlowState,
    last_submission: Option<SubmissionResult>,
}

pub struct VerifyMessageView<'a> {
    pub address: &'a mut FormField,
    pub signature: &'a mut FormField,
    pub message: &'a mut FormField,
    pub clear_btn: &'a mut Button,
    pub verify_btn: &'a mut Button,
    pub back_btn: &'a mut Button,
    pub info_btn: &'a mut Button,
    pub status: Option<&'a VerifyStatus>,
}

impl Default for VerifyMessagePage {
    fn default() -> Self {
        Self::new()
    }
}

impl VerifyMessagePage {
    pub fn new() -> Self {
        Self {
            address: FormField::new("Address").submit_on_enter(true),
            signature: FormField::new("Signature")
                .kind(FieldKind::MultiLine)
                .submit_on_enter(true),
            message: FormField::new("Message").submit_on_enter(true),
            clear_btn: Button::new("Clear all"),
            verify_btn: Button::new("Verify message"),
            back_btn: Button::new("Back"),
            info_btn: Button::new("Info"),
            status: None,
            address_is_valid: false,
            flow: FlowState::Idle,
            last_submission: None,
        }
    }

    pub fn address(&self) -> &FormField {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut FormField {
        &mut self.address
    }

    pub fn signature(&self) -> &FormField {
        &self.signature
    }

    pub fn signature_mut(&mut self) -> &mut FormField {
        &mut self.signature
    }

    pub fn message(&self) -> &FormField {
        &self.message
    }

    pub fn message_mut(&mut self) -> &mut FormField {
        &mut self.message
    }

    pub fn verify_button_mut(&mut self) -> &mut Button {
        &mut self.verify_btn
    }

    pub fn clear_button_mut(&mut self) -> &mut Button {
        &mut self.clear_btn
    }

    pub fn back_button_mut(&mut self) -> &mut Button {
        &mut self.back_btn
    }

    pub fn info_button_mut(&mut self) -> &mut Button {
        &mut self.info_btn
    }

    pub fn status(&self) -> Option<&VerifyStatus> {
        self.status.as_ref()
    }

    pub fn address_is_valid(&self) -> bool {
        self.address_is_valid
    }

    pub fn is_verify_enabled(&self) -> bool {
        self.verify_btn.is_enabled()
    }

    pub fn flow_state(&self) -> FlowState {
        self.flow
    }

    pub fn last_submission(&self) -> Option<&SubmissionResult> {
        self.last_submission.as_ref()
    }

    pub fn view_mut(&mut self) -> VerifyMessageView<'_> {
        VerifyMessageView {
            address: &mut self.address,
            signature: &mut self.signature,
            message: &mut self.message,
            clear_btn: &mut self.clear_btn,
            verify_btn: &mut self.verify_btn,
            back_btn: &mut self.back_btn,
            info_btn: &mut self.info_btn,
            status: self.status.as_ref(),
        }
    }

    /// Validates the address field, setting or clearing its error.
    pub fn validate_address(&mut self, wallet: &dyn WalletService) -> bool {
        self.address.clear_error();
        let valid = match validate_address(self.address.text(), wallet) {
            Ok(()) => true,
            Err(message) => {
                self.address.set_error(message);
                false
            }
        };
        self.address_is_valid = valid;
        valid
    }

    fn validate_all_inputs(&mut self, wallet: &dyn WalletService) -> bool {
        if !self.validate_address(wallet) {
            self.last_submission = Some(SubmissionResult::ValidationError {
                field: "address",
                message: self.address.error().unwrap_or_default().to_owned(),
            });
            return false;
        }
        if !string_not_empty(self.signature.text()) {
            self.signature.set_error(MSG_EMPTY_SIGNATURE);
            self.last_submission = Some(SubmissionResult::ValidationError {
                field: "signature",
                message: MSG_EMPTY_SIGNATURE.to_owned(),
            });
            return false;
        }
        if !string_not_empty(self.message.text()) {
            self.message.set_error(MSG_EMPTY_MESSAGE);
            self.last_submission = Some(SubmissionResult::ValidationError {
                field: "message",
                message: MSG_EMPTY_MESSAGE.to_owned(),
            });
            return false;
        }
        true
    }

    fn update_btn(&self) -> bool {
        self.address_is_valid
            || string_not_empty(self.signature.text())
            || string_not_empty(self.message.text())
    }

    pub fn clear_inputs(&mut self) {
        self.status = None;
        self.address.set_text("");
        self.signature.set_text("");
        self.message.set_text("");
        self.address.clear_error();
        self.address_is_valid = false;
    }

    fn clear_messages(&mut self) {
        self.status = None;
    }

    fn verify(&mut self, wallet: &dyn WalletService) {
        advance(&mut self.flow, FlowAction::Submit, VERIFY_MESSAGE_PAGE_ID);
        if !self.validate_all_inputs(wallet) {
            advance(&mut self.flow, FlowAction::ValidationFailed, VERIFY_MESSAGE_PAGE_ID);
            return;
        }
        advance(&mut self.flow, FlowAction::ValidationPassed, VERIFY_MESSAGE_PAGE_ID);

        self.status = None;
        let result = wallet.verify_message(
            self.address.text().trim(),
            self.message.text(),
            self.signature.text().trim(),
        );
        advance(&mut self.flow, FlowAction::Completed, VERIFY_MESSAGE_PAGE_ID);

        let status = match result {
            Err(err) => {
                tracing::warn!(%err, "message verification failed");
                let text = format!("Error verifying message: {err}");
                self.last_submission = Some(SubmissionResult::ServerError(text.clone()));
                VerifyStatus::failure(text)
            }
            Ok(false) => {
                self.last_submission = Some(SubmissionResult::ServerError(
                    MSG_INVALID_SIGNATURE.to_owned(),
                ));
                VerifyStatus::failure(MSG_INVALID_SIGNATURE)
            }
            Ok(true) => {
                self.last_submission = Some(SubmissionResult::Success);
                VerifyStatus::success()
            }
        };
        self.status = Some(status);
    }
}

impl Page for VerifyMessagePage {
    fn id(&self) -> &'static str {
        VERIFY_MESSAGE_PAGE_ID
    }

    fn on_navigated_to(&mut self) {
        self.address.focus();
    }

    fn handle(&mut self, cx: &mut FrameContext<'_>) -> PageAction {
        let enabled = self.update_btn();
        self.verify_btn.set_enabled(enabled);

        let (is_submit, is_changed) = handle_field_events(&mut [
            &mut self.address,
            &mut self.message,
            &mut self.signature,
        ]);
        if is_changed {
            self.signature.clear_error();
            self.message.clear_error();
            if self.address.is_focused() {
                self.validate_address(cx.wallet);
            } else {
                self.address.clear_error();
            }
            self.clear_messages();
        }

        if (self.verify_btn.clicked() || is_submit) && self.verify_btn.is_enabled() {
            self.verify(cx.wallet);
        }

        if self.clear_btn.clicked() {
            self.clear_inputs();
        }

        if self.info_btn.clicked() {
            return PageAction::ShowModal(ModalKind::Info(InfoTemplate::VerifyMessage));
        }

        if self.back_btn.clicked() {
            return PageAction::Back;
        }

        PageAction::None
    }

    fn handle_key_event(&mut self, key: KeyPress) {
        switch_focus(
            key,
            &mut [&mut self.address, &mut self.signature, &mut self.message],
        );
    }
}
