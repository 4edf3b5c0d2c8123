//! Page stack and modal overlays.
//!
//! Pages and modals never manipulate the host directly. Their `handle` pass
//! returns an action which the host applies once the pass is over.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::controls::KeyPress;
use crate::info::InfoTemplate;
use crate::notify::Toasts;
use crate::ports::WalletService;

/// Collaborators available during a `handle` pass.
pub struct FrameContext<'a> {
    pub wallet: &'a dyn WalletService,
    pub toasts: &'a mut Toasts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    CreateWatchOnly { enable_name: bool },
    Info(InfoTemplate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Wallets,
    VerifyMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalAction {
    #[default]
    None,
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageAction {
    #[default]
    None,
    Back,
    Push(PageKind),
    ShowModal(ModalKind),
}

pub trait Modal {
    fn modal_id(&self) -> &str;
    fn on_resume(&mut self) {}
    fn on_dismiss(&mut self) {}
    fn handle(&mut self, cx: &mut FrameContext<'_>) -> ModalAction;
    fn handle_key_event(&mut self, _key: KeyPress) {}
}

pub trait Page {
    fn id(&self) -> &'static str;
    fn on_navigated_to(&mut self) {}
    fn on_navigated_from(&mut self) {}
    fn handle(&mut self, cx: &mut FrameContext<'_>) -> PageAction;
    fn handle_key_event(&mut self, _key: KeyPress) {}
}

/// Unique id for a modal instance, `"{prefix}-{n}"`.
pub fn next_modal_id(prefix: &str) -> String {
    static NEXT: AtomicU32 = AtomicU32::new(1);
    format!("{prefix}-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}

#[derive(Debug)]
pub struct Navigator<P: Page> {
    stack: Vec<P>,
}

impl<P: Page> Navigator<P> {
    pub fn new(mut root: P) -> Self {
        root.on_navigated_to();
        Self { stack: vec![root] }
    }

    pub fn push(&mut self, mut page: P) {
        if let Some(current) = self.stack.last_mut() {
            current.on_navigated_from();
        }
        tracing::info!(page = page.id(), "navigating to page");
        page.on_navigated_to();
        self.stack.push(page);
    }

    /// Pops the current page. The root page is never popped.
    pub fn pop_page(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(mut page) = self.stack.pop() {
            page.on_navigated_from();
            tracing::info!(page = page.id(), "left page");
        }
        if let Some(current) = self.stack.last_mut() {
            current.on_navigated_to();
        }
        true
    }

    pub fn current(&self) -> &P {
        // the root is never removed
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut P {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[derive(Debug)]
pub struct OverlayStack<M: Modal> {
    modals: Vec<M>,
}

impl<M: Modal> Default for OverlayStack<M> {
    fn default() -> Self {
        Self { modals: Vec::new() }
    }
}

impl<M: Modal> OverlayStack<M> {
    /// Shows `modal` on top. No effect if a modal with the same id is shown.
    pub fn show(&mut self, mut modal: M) -> bool {
        if self.contains(modal.modal_id()) {
            return false;
        }
        tracing::info!(modal = modal.modal_id(), "showing modal");
        modal.on_resume();
        self.modals.push(modal);
        true
    }

    /// Removes the modal with `id`. Idempotent.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let Some(pos) = self.modals.iter().position(|m| m.modal_id() == id) else {
            return false;
        };
        let mut modal = self.modals.remove(pos);
        modal.on_dismiss();
        tracing::info!(modal = id, "dismissed modal");
        if let Some(top) = self.modals.last_mut() {
            top.on_resume();
        }
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.modals.iter().any(|m| m.modal_id() == id)
    }

    /// The modal receiving input.
    pub fn top_mut(&mut self) -> Option<&mut M> {
        self.modals.last_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.modals.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut M> {
        self.modals.iter_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.modals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modals.len()
    }
}
