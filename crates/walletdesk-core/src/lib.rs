pub mod controls;
pub mod flow;
pub mod host;
pub mod modal;
pub mod notify;
pub mod ports;
pub mod screens;
pub mod validation;

pub mod info;
pub mod verify_message;
pub mod wallets;
pub mod watch_only;

pub use controls::{
    handle_field_events, switch_focus, Button, FieldKind, FormField, Key, KeyPress,
};
pub use flow::{
    flow_transition, FlowAction, FlowError, FlowState, FlowTransition, SubmissionResult,
};
pub use host::{
    FrameContext, Modal, ModalAction, ModalKind, Navigator, OverlayStack, Page, PageAction,
    PageKind,
};
pub use modal::{ContentMode, Insets, ModalLayout, ModalState, Size};
pub use notify::{Toast, ToastKind, Toasts};
pub use ports::{WalletError, WalletId, WalletInfo, WalletService};
pub use screens::{AppModal, AppPage, Shell};

pub use info::{InfoModal, InfoTemplate};
pub use verify_message::{VerifyMessagePage, VerifyMessageView, VerifyStatus};
pub use wallets::WalletsPage;
pub use watch_only::{CreateWatchOnlyModal, WatchOnlyView};
