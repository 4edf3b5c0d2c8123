//! "Import watching only wallet" modal

use crate::controls::{
    handle_field_events, switch_focus, Button, FieldKind, FormField, Key, KeyPress,
};
use crate::flow::{advance, FlowAction, FlowState, SubmissionResult};
use crate::host::{next_modal_id, FrameContext, Modal, ModalAction};
use crate::modal::ModalState;
use crate::ports::{WalletError, WalletService};
use crate::validation::{existing_wallet_for_xpub, fields_not_empty};

pub const CREATE_WATCH_ONLY: &str = "create_watch_only_modal";
pub const TITLE: &str = "Import watching only wallet";

pub const MSG_ENTER_NAME: &str = "enter wallet name";
pub const MSG_ENTER_XPUB: &str = "enter a valid extendedPubKey";
pub const MSG_DUPLICATE_XPUB: &str =
    "A wallet with an identical extended public key already exists.";
pub const MSG_IMPORTED: &str = "Watch-only wallet imported";

/// Called with `(wallet_name, extended_pub_key)` once local checks pass.
/// Returning `Ok(true)` dismisses the modal.
pub type WatchOnlyCreated =
    Box<dyn FnMut(&str, &str, &dyn WalletService) -> Result<bool, WalletError>>;

pub struct CreateWatchOnlyModal {
    id: String,
    modal: ModalState,

    wallet_name: FormField,
    extended_pub_key: FormField,

    btn_positive: Button,
    btn_negative: Button,

    server_error: Option<String>,
    wallet_name_enabled: bool,
    is_enabled: bool,

    flow: FlowState,
    last_submission: Option<SubmissionResult>,
    callback: Option<WatchOnlyCreated>,
}

/// Split borrows handed to the renderer.
pub struct WatchOnlyView<'a> {
    pub modal: &'a mut ModalState,
    pub wallet_name: Option<&'a mut FormField>,
    pub extended_pub_key: &'a mut FormField,
    pub btn_positive: &'a mut Button,
    pub btn_negative: &'a mut Button,
    pub is_loading: bool,
    pub is_enabled: bool,
}

impl Default for CreateWatchOnlyModal {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateWatchOnlyModal {
    pub fn new() -> Self {
        Self {
            id: next_modal_id(CREATE_WATCH_ONLY),
            modal: ModalState::float_title(),
            wallet_name: FormField::new("Wallet name").submit_on_enter(true),
            extended_pub_key: FormField::new("Extended public key")
                .kind(FieldKind::Password)
                .submit_on_enter(true),
            btn_positive: Button::new("Import"),
            btn_negative: Button::new("Cancel"),
            server_error: None,
            wallet_name_enabled: false,
            is_enabled: false,
            flow: FlowState::Idle,
            last_submission: None,
            callback: None,
        }
    }

    pub fn enable_name(mut self, enable: bool) -> Self {
        self.wallet_name_enabled = enable;
        self
    }

    pub fn set_cancelable(mut self, cancelable: bool) -> Self {
        self.modal.set_cancelable(cancelable);
        self
    }

    pub fn watch_only_created<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str, &str, &dyn WalletService) -> Result<bool, WalletError> + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.modal.set_loading(loading);
        self.btn_negative.set_enabled(!loading);
    }

    pub fn is_loading(&self) -> bool {
        self.modal.is_loading()
    }

    /// Attributes a creation error to the field it concerns.
    pub fn set_error(&mut self, err: &WalletError) {
        let message = err.to_string();
        if *err == WalletError::Exists && self.wallet_name_enabled {
            self.wallet_name.set_error(format!(
                "Wallet with name: {} already exist",
                self.wallet_name.text()
            ));
        } else {
            self.extended_pub_key.set_error(message.clone());
        }
        self.server_error = Some(message);
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    pub fn is_name_enabled(&self) -> bool {
        self.wallet_name_enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub fn flow_state(&self) -> FlowState {
        self.flow
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalState {
        &mut self.modal
    }

    pub fn wallet_name(&self) -> &FormField {
        &self.wallet_name
    }

    pub fn wallet_name_mut(&mut self) -> &mut FormField {
        &mut self.wallet_name
    }

    pub fn extended_pub_key(&self) -> &FormField {
        &self.extended_pub_key
    }

    pub fn extended_pub_key_mut(&mut self) -> &mut FormField {
        &mut self.extended_pub_key
    }

    pub fn positive_button_mut(&mut self) -> &mut Button {
        &mut self.btn_positive
    }

    pub fn negative_button_mut(&mut self) -> &mut Button {
        &mut self.btn_negative
    }

    pub fn last_submission(&self) -> Option<&SubmissionResult> {
        self.last_submission.as_ref()
    }

    pub fn take_submission(&mut self) -> Option<SubmissionResult> {
        self.last_submission.take()
    }

    pub fn view_mut(&mut self) -> WatchOnlyView<'_> {
        let is_loading = self.modal.is_loading();
        WatchOnlyView {
            modal: &mut self.modal,
            wallet_name: self
                .wallet_name_enabled
                .then_some(&mut self.wallet_name),
            extended_pub_key: &mut self.extended_pub_key,
            btn_positive: &mut self.btn_positive,
            btn_negative: &mut self.btn_negative,
            is_loading,
            is_enabled: self.is_enabled,
        }
    }

    fn reject(&mut self, field: &'static str, message: &str) {
        match field {
            "wallet_name" => self.wallet_name.set_error(message),
            _ => self.extended_pub_key.set_error(message),
        }
        self.last_submission = Some(SubmissionResult::ValidationError {
            field,
            message: message.to_owned(),
        });
        advance(&mut self.flow, FlowAction::ValidationFailed, CREATE_WATCH_ONLY);
    }

    fn submit(&mut self, cx: &mut FrameContext<'_>) -> ModalAction {
        advance(&mut self.flow, FlowAction::Submit, CREATE_WATCH_ONLY);

        if self.wallet_name_enabled && self.wallet_name.is_empty() {
            self.reject("wallet_name", MSG_ENTER_NAME);
            return ModalAction::None;
        }
        if self.extended_pub_key.is_empty() {
            self.reject("extended_pub_key", MSG_ENTER_XPUB);
            return ModalAction::None;
        }

        let xpub = self.extended_pub_key.text().trim().to_owned();
        match existing_wallet_for_xpub(&xpub, cx.wallet) {
            Err(err) => {
                tracing::error!("Error checking xpub: {err}");
                let message = format!("Error checking xpub: {err}");
                cx.toasts.notify_error(message.clone());
                self.last_submission = Some(SubmissionResult::ServerError(message));
                advance(&mut self.flow, FlowAction::ValidationFailed, CREATE_WATCH_ONLY);
                return ModalAction::None;
            }
            Ok(Some(matched)) => {
                tracing::warn!(wallet = %matched, "extended public key already tracked");
                cx.toasts.notify_error(MSG_DUPLICATE_XPUB);
                self.last_submission =
                    Some(SubmissionResult::ServerError(MSG_DUPLICATE_XPUB.to_owned()));
                advance(&mut self.flow, FlowAction::ValidationFailed, CREATE_WATCH_ONLY);
                return ModalAction::None;
            }
            Ok(None) => {}
        }

        advance(&mut self.flow, FlowAction::ValidationPassed, CREATE_WATCH_ONLY);
        self.set_loading(true);

        let name = self.wallet_name.text().trim().to_owned();
        let result = match self.callback.as_mut() {
            Some(callback) => callback(&name, &xpub, cx.wallet),
            None => cx.wallet.create_watch_only_wallet(&name, &xpub).map(|id| {
                tracing::info!(wallet = %id, "watch-only wallet created");
                cx.toasts.notify_success(MSG_IMPORTED);
                true
            }),
        };
        advance(&mut self.flow, FlowAction::Completed, CREATE_WATCH_ONLY);

        match result {
            Ok(dismiss) => {
                self.last_submission = Some(SubmissionResult::Success);
                if dismiss {
                    return ModalAction::Dismiss;
                }
                self.set_loading(false);
            }
            Err(err) => {
                tracing::warn!(%err, "watch-only wallet creation failed");
                self.set_loading(false);
                self.set_error(&err);
                self.last_submission = Some(SubmissionResult::ServerError(err.to_string()));
            }
        }
        ModalAction::None
    }
}

impl Modal for CreateWatchOnlyModal {
    fn modal_id(&self) -> &str {
        &self.id
    }

    fn on_resume(&mut self) {
        if self.wallet_name_enabled {
            self.wallet_name.focus();
        } else {
            self.extended_pub_key.focus();
        }
    }

    fn handle(&mut self, cx: &mut FrameContext<'_>) -> ModalAction {
        self.is_enabled = fields_not_empty(&[&self.wallet_name, &self.extended_pub_key]);

        let (is_submit, is_changed) =
            handle_field_events(&mut [&mut self.wallet_name, &mut self.extended_pub_key]);
        if is_changed {
            self.server_error = None;
            self.wallet_name.clear_error();
            self.extended_pub_key.clear_error();
        }

        let positive = self.btn_positive.clicked();
        if (positive || is_submit) && self.is_enabled && !self.modal.is_loading() {
            let action = self.submit(cx);
            if action != ModalAction::None {
                return action;
            }
        }

        let loading = self.modal.is_loading();
        self.btn_negative.set_enabled(!loading);
        if self.btn_negative.clicked() && !loading {
            return ModalAction::Dismiss;
        }

        let cancelable = self.modal.is_cancelable();
        if self.modal.backdrop_clicked(cancelable) && !loading {
            return ModalAction::Dismiss;
        }

        ModalAction::None
    }

    fn handle_key_event(&mut self, key: KeyPress) {
        if key.key == Key::Escape {
            self.modal.register_backdrop_click();
            return;
        }
        if self.wallet_name_enabled {
            switch_focus(key, &mut [&mut self.wallet_name, &mut self.extended_pub_key]);
        }
    }
}
