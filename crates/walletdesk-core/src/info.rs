//! Informational modal with a single confirm button

use crate::controls::{Button, Key, KeyPress};
use crate::host::{next_modal_id, FrameContext, Modal, ModalAction};
use crate::modal::ModalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTemplate {
    VerifyMessage,
    WatchOnlyWallet,
}

impl InfoTemplate {
    pub fn title(&self) -> &'static str {
        match self {
            InfoTemplate::VerifyMessage => "Verify message",
            InfoTemplate::WatchOnlyWallet => "Watch-only wallets",
        }
    }

    pub fn body(&self) -> &'static [&'static str] {
        match self {
            InfoTemplate::VerifyMessage => &[
                "After you or your counterparty has generated a signature, you can use this form to verify the signature.",
                "Once you have entered the address, the message and the corresponding signature, you will see VALID if the signature appropriately matches the address and message, otherwise INVALID.",
            ],
            InfoTemplate::WatchOnlyWallet => &[
                "A watch-only wallet tracks the addresses of an extended public key.",
                "It can show balances and history but can never spend funds.",
            ],
        }
    }
}

pub struct InfoModal {
    id: String,
    template: InfoTemplate,
    modal: ModalState,
    btn_positive: Button,
}

impl InfoModal {
    pub fn new(template: InfoTemplate) -> Self {
        Self {
            id: next_modal_id("info_modal"),
            template,
            modal: ModalState::float_title(),
            btn_positive: Button::new("Got it"),
        }
    }

    pub fn set_cancelable(mut self, cancelable: bool) -> Self {
        self.modal.set_cancelable(cancelable);
        self
    }

    pub fn template(&self) -> InfoTemplate {
        self.template
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalState {
        &mut self.modal
    }

    pub fn parts_mut(&mut self) -> (&mut ModalState, &mut Button) {
        (&mut self.modal, &mut self.btn_positive)
    }

    pub fn positive_button_mut(&mut self) -> &mut Button {
        &mut self.btn_positive
    }
}

impl Modal for InfoModal {
    fn modal_id(&self) -> &str {
        &self.id
    }

    fn handle(&mut self, _cx: &mut FrameContext<'_>) -> ModalAction {
        if self.btn_positive.clicked() {
            return ModalAction::Dismiss;
        }
        let cancelable = self.modal.is_cancelable();
        if self.modal.backdrop_clicked(cancelable) {
            return ModalAction::Dismiss;
        }
        ModalAction::None
    }

    fn handle_key_event(&mut self, key: KeyPress) {
        if key.key == Key::Escape {
            self.modal.register_backdrop_click();
        }
    }
}
