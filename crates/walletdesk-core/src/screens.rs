//! Concrete pages and modals of the application, and the shell that drives
//! them once per frame.

use crate::controls::KeyPress;
use crate::host::{
    FrameContext, Modal, ModalAction, ModalKind, Navigator, OverlayStack, Page, PageAction,
    PageKind,
};
use crate::info::InfoModal;
use crate::verify_message::VerifyMessagePage;
use crate::wallets::WalletsPage;
use crate::watch_only::CreateWatchOnlyModal;

pub enum AppPage {
    Wallets(WalletsPage),
    VerifyMessage(VerifyMessagePage),
}

impl AppPage {
    pub fn from_kind(kind: PageKind) -> Self {
        match kind {
            PageKind::Wallets => AppPage::Wallets(WalletsPage::new()),
            PageKind::VerifyMessage => AppPage::VerifyMessage(VerifyMessagePage::new()),
        }
    }

    fn as_page(&mut self) -> &mut dyn Page {
        match self {
            AppPage::Wallets(p) => p,
            AppPage::VerifyMessage(p) => p,
        }
    }

    fn refresh(&mut self) {
        if let AppPage::Wallets(p) = self {
            p.refresh();
        }
    }
}

impl Page for AppPage {
    fn id(&self) -> &'static str {
        match self {
            AppPage::Wallets(p) => p.id(),
            AppPage::VerifyMessage(p) => p.id(),
        }
    }

    fn on_navigated_to(&mut self) {
        self.as_page().on_navigated_to()
    }

    fn on_navigated_from(&mut self) {
        self.as_page().on_navigated_from()
    }

    fn handle(&mut self, cx: &mut FrameContext<'_>) -> PageAction {
        self.as_page().handle(cx)
    }

    fn handle_key_event(&mut self, key: KeyPress) {
        self.as_page().handle_key_event(key)
    }
}

pub enum AppModal {
    CreateWatchOnly(CreateWatchOnlyModal),
    Info(InfoModal),
}

impl AppModal {
    pub fn from_kind(kind: ModalKind) -> Self {
        match kind {
            ModalKind::CreateWatchOnly { enable_name } => {
                AppModal::CreateWatchOnly(CreateWatchOnlyModal::new().enable_name(enable_name))
            }
            ModalKind::Info(template) => AppModal::Info(InfoModal::new(template)),
        }
    }

    fn as_modal(&mut self) -> &mut dyn Modal {
        match self {
            AppModal::CreateWatchOnly(m) => m,
            AppModal::Info(m) => m,
        }
    }
}

impl Modal for AppModal {
    fn modal_id(&self) -> &str {
        match self {
            AppModal::CreateWatchOnly(m) => m.modal_id(),
            AppModal::Info(m) => m.modal_id(),
        }
    }

    fn on_resume(&mut self) {
        self.as_modal().on_resume()
    }

    fn on_dismiss(&mut self) {
        self.as_modal().on_dismiss()
    }

    fn handle(&mut self, cx: &mut FrameContext<'_>) -> ModalAction {
        self.as_modal().handle(cx)
    }

    fn handle_key_event(&mut self, key: KeyPress) {
        self.as_modal().handle_key_event(key)
    }
}

/// Page stack plus modal overlays.
pub struct Shell {
    pub navigator: Navigator<AppPage>,
    pub overlays: OverlayStack<AppModal>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            navigator: Navigator::new(AppPage::from_kind(PageKind::Wallets)),
            overlays: OverlayStack::default(),
        }
    }

    /// Runs the interaction pass. The top modal takes input when one is
    /// shown, otherwise the current page does.
    pub fn handle(&mut self, cx: &mut FrameContext<'_>) {
        if let Some(top) = self.overlays.top_mut() {
            let id = top.modal_id().to_owned();
            if top.handle(cx) == ModalAction::Dismiss {
                self.overlays.dismiss(&id);
                self.navigator.current_mut().refresh();
            }
            return;
        }

        match self.navigator.current_mut().handle(cx) {
            PageAction::None => {}
            PageAction::Back => {
                self.navigator.pop_page();
            }
            PageAction::Push(kind) => self.navigator.push(AppPage::from_kind(kind)),
            PageAction::ShowModal(kind) => {
                self.overlays.show(AppModal::from_kind(kind));
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyPress) {
        match self.overlays.top_mut() {
            Some(top) => top.handle_key_event(key),
            None => self.navigator.current_mut().handle_key_event(key),
        }
    }
}
